#[cfg(test)]
mod tests {
    use crate::types::{GithubUser, RepoCardData};
    use crate::workflow::{ButtonState, CardSession, parse_repo_url};
    use chrono::{TimeZone, Utc};

    fn sample_data() -> RepoCardData {
        RepoCardData {
            name: "demo".to_string(),
            html_url: "https://github.com/octocat/demo".to_string(),
            description: "A demo repository.".to_string(),
            stars: 1,
            forks: 0,
            watchers: 0,
            created_at: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap(),
            owner: GithubUser {
                login: "octocat".to_string(),
                avatar_url: String::new(),
                name: None,
                contributions: None,
            },
            languages: Vec::new(),
            contributors: Vec::new(),
            contributor_count: 0,
            generated_at: Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_parse_repo_url_variants() {
        let cases = [
            "https://github.com/octocat/hello-world",
            "https://github.com/octocat/hello-world/",
            "https://github.com/octocat/hello-world.git",
            "http://github.com/octocat/hello-world",
            "github.com/octocat/hello-world",
            "https://www.github.com/octocat/hello-world",
        ];
        for url in cases {
            let (owner, repo) = parse_repo_url(url).unwrap();
            assert_eq!(owner, "octocat", "url: {}", url);
            assert_eq!(repo, "hello-world", "url: {}", url);
        }
    }

    #[test]
    fn test_parse_repo_url_rejects_non_github() {
        assert!(parse_repo_url("https://gitlab.com/octocat/hello-world").is_err());
        assert!(parse_repo_url("https://github.com/only-owner").is_err());
        assert!(parse_repo_url("not a url").is_err());
    }

    #[test]
    fn test_button_initial_state() {
        let session = CardSession::new();
        assert_eq!(session.state(), ButtonState::Initial);
        assert!(session.data().is_none());
        assert!(!session.is_downloading());
        assert_eq!(session.state().label(), "Generate Report Card");
    }

    #[test]
    fn test_generate_flow_success() {
        let mut session = CardSession::new();
        session.set_url("https://github.com/octocat/demo");

        assert!(session.begin_generate());
        assert_eq!(session.state(), ButtonState::Generating);
        assert_eq!(session.state().label(), "Generating...");

        session.complete(sample_data());
        assert_eq!(session.state(), ButtonState::Generated);
        assert_eq!(session.state().label(), "Generated ✓");
        assert!(session.data().is_some());
    }

    #[test]
    fn test_generate_flow_failure_returns_to_initial() {
        let mut session = CardSession::new();
        session.begin_generate();
        session.fail();
        assert_eq!(session.state(), ButtonState::Initial);
        assert!(session.data().is_none());
    }

    #[test]
    fn test_begin_generate_only_from_initial() {
        let mut session = CardSession::new();
        assert!(session.begin_generate());
        // 生成中重复点击无效
        assert!(!session.begin_generate());

        session.complete(sample_data());
        // 已生成后再次点击同样无效
        assert!(!session.begin_generate());
    }

    #[test]
    fn test_url_edit_resets_generated_session() {
        let mut session = CardSession::new();
        session.set_url("https://github.com/octocat/demo");
        session.begin_generate();
        session.complete(sample_data());

        session.set_url("https://github.com/octocat/other");
        assert_eq!(session.state(), ButtonState::Initial);
        assert!(session.data().is_none());
        assert_eq!(session.url(), "https://github.com/octocat/other");
    }

    #[test]
    fn test_url_edit_in_initial_state() {
        let mut session = CardSession::new();
        session.set_url("https://github.com/octocat/demo");
        assert_eq!(session.state(), ButtonState::Initial);
        assert_eq!(session.url(), "https://github.com/octocat/demo");
    }

    #[test]
    fn test_download_gate() {
        let mut session = CardSession::new();
        // 未生成时不可下载
        assert!(!session.begin_download());

        session.begin_generate();
        assert!(!session.begin_download());

        session.complete(sample_data());
        assert!(session.begin_download());
        assert!(session.is_downloading());
        // 下载中不可再次进入
        assert!(!session.begin_download());

        session.finish_download();
        assert!(!session.is_downloading());
        assert!(session.begin_download());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = CardSession::new();
        session.begin_generate();
        session.complete(sample_data());
        session.begin_download();

        session.reset();
        assert_eq!(session.state(), ButtonState::Initial);
        assert!(session.data().is_none());
        assert!(!session.is_downloading());
    }
}
