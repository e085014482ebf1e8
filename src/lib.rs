pub mod card;
pub mod cli;
pub mod config;
pub mod exporter;
pub mod github;
pub mod synthesizer;
pub mod types;
pub mod utils;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use workflow::launch;
