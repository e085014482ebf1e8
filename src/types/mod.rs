pub mod repository;

pub use repository::{GithubRepository, GithubUser, RepoCardData};
