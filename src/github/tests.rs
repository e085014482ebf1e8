#[cfg(test)]
mod tests {
    use crate::config::GithubConfig;
    use crate::github::{GithubClient, decode_readme, parse_last_page, sort_languages};
    use std::collections::HashMap;

    #[test]
    fn test_parse_last_page_from_link_header() {
        let link = "<https://api.github.com/repositories/1300192/contributors?per_page=1&page=2>; rel=\"next\", <https://api.github.com/repositories/1300192/contributors?per_page=1&page=446>; rel=\"last\"";
        assert_eq!(parse_last_page(link), Some(446));
    }

    #[test]
    fn test_parse_last_page_ignores_other_rels() {
        let link = "<https://api.github.com/repos/x/y/contributors?page=5>; rel=\"prev\", <https://api.github.com/repos/x/y/contributors?page=1>; rel=\"first\"";
        assert_eq!(parse_last_page(link), None);
    }

    #[test]
    fn test_parse_last_page_garbage() {
        assert_eq!(parse_last_page(""), None);
        assert_eq!(parse_last_page("rel=\"last\""), None);
        assert_eq!(parse_last_page("<no-page-param>; rel=\"last\""), None);
    }

    #[test]
    fn test_sort_languages_descending_by_bytes() {
        let mut map = HashMap::new();
        map.insert("TypeScript".to_string(), 30_000u64);
        map.insert("Rust".to_string(), 60_000);
        map.insert("Shell".to_string(), 1_200);

        let sorted = sort_languages(map);
        assert_eq!(
            sorted,
            vec![
                ("Rust".to_string(), 60_000),
                ("TypeScript".to_string(), 30_000),
                ("Shell".to_string(), 1_200),
            ]
        );
    }

    #[test]
    fn test_sort_languages_tie_breaks_by_name() {
        let mut map = HashMap::new();
        map.insert("Zig".to_string(), 500u64);
        map.insert("C".to_string(), 500);

        let sorted = sort_languages(map);
        assert_eq!(sorted[0].0, "C");
        assert_eq!(sorted[1].0, "Zig");
    }

    #[test]
    fn test_decode_readme_with_api_line_breaks() {
        // GitHub会在Base64内容中插入换行
        let encoded = "IyBIZWxsbwoKVGhp\ncyBpcyBhIFJFQURN\nRS4=\n";
        assert_eq!(
            decode_readme(encoded).as_deref(),
            Some("# Hello\n\nThis is a README.")
        );
    }

    #[test]
    fn test_decode_readme_invalid_base64() {
        assert_eq!(decode_readme("not@@base64!!"), None);
    }

    #[test]
    fn test_client_construction() {
        let config = GithubConfig {
            token: String::new(),
            ..GithubConfig::default()
        };
        let client = GithubClient::new(&config, false).unwrap();
        assert_eq!(client.base_url, "https://api.github.com");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_client_trims_trailing_slash_and_keeps_token() {
        let config = GithubConfig {
            api_base_url: "https://ghe.example.com/api/v3/".to_string(),
            token: "ghp_testtoken".to_string(),
            ..GithubConfig::default()
        };
        let client = GithubClient::new(&config, false).unwrap();
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
        assert_eq!(client.token.as_deref(), Some("ghp_testtoken"));
    }
}
