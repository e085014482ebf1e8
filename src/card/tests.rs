#[cfg(test)]
mod tests {
    use crate::card::{CardNode, InlineStyle, by_name, default_palette, pick_for, truncate_label};
    use crate::config::ExportFormat;
    use crate::types::{GithubUser, RepoCardData};
    use chrono::{TimeZone, Utc};

    fn user(login: &str, contributions: Option<u64>) -> GithubUser {
        GithubUser {
            login: login.to_string(),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{}", login.len()),
            name: None,
            contributions,
        }
    }

    fn sample_data() -> RepoCardData {
        RepoCardData {
            name: "awesome-tool".to_string(),
            html_url: "https://github.com/octocat/awesome-tool".to_string(),
            description: "A modern tool focused on productivity and workflow optimization."
                .to_string(),
            stars: 12_345,
            forks: 678,
            watchers: 90,
            created_at: Utc.with_ymd_and_hms(2021, 3, 5, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 11, 20, 8, 30, 0).unwrap(),
            owner: user("octocat", None),
            languages: vec![
                ("Rust".to_string(), 60_000),
                ("TypeScript".to_string(), 30_000),
                ("Shell".to_string(), 10_000),
            ],
            contributors: vec![
                user("alice", Some(420)),
                user("bob", Some(200)),
                user("carol", Some(88)),
                user("dave", Some(12)),
            ],
            contributor_count: 4,
            generated_at: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    fn sample_card() -> CardNode {
        CardNode::new(sample_data(), default_palette())
    }

    #[test]
    fn test_default_inline_style() {
        let style = InlineStyle::default();
        assert_eq!(style.width, "900px");
        assert_eq!(style.min_width, "900px");
        assert_eq!(style.margin, "0 auto");
        assert_eq!(style.border_radius, "1rem");
        assert!(style.padding.is_empty());
        assert!(style.max_width.is_empty());
    }

    #[test]
    fn test_apply_capture_style_pins_layout() {
        let mut card = sample_card();
        card.apply_capture_style(900);

        assert_eq!(card.style.width, "900px");
        assert_eq!(card.style.min_width, "900px");
        assert_eq!(card.style.max_width, "900px");
        assert_eq!(card.style.box_shadow, "none");
        assert_eq!(card.style.padding, "0");
        assert_eq!(card.style.margin, "0");
        assert_eq!(card.style.border_radius, "1rem");
    }

    #[test]
    fn test_style_css_skips_empty_entries() {
        let style = InlineStyle::default();
        let css = style.to_css();
        assert!(css.contains("width: 900px;"));
        assert!(css.contains("margin: 0 auto;"));
        assert!(!css.contains("padding"));
        assert!(!css.contains("max-width"));
    }

    #[test]
    fn test_style_width_and_radius_parsing() {
        let mut style = InlineStyle::default();
        assert_eq!(style.width_px(), 900.0);
        assert_eq!(style.radius_px(), 16.0);

        style.width = "1200px".to_string();
        style.border_radius = "8px".to_string();
        assert_eq!(style.width_px(), 1200.0);
        assert_eq!(style.radius_px(), 8.0);
    }

    #[test]
    fn test_filename_per_format() {
        let card = sample_card();
        assert_eq!(
            card.filename(ExportFormat::Html),
            "awesome-tool-report-card.html"
        );
        assert_eq!(
            card.filename(ExportFormat::Png),
            "awesome-tool-report-card.png"
        );
        assert_eq!(
            card.filename(ExportFormat::Pdf),
            "awesome-tool-report-card.pdf"
        );
    }

    #[test]
    fn test_html_contains_card_content() {
        let card = sample_card();
        let html = card.to_html();

        assert!(html.contains("awesome-tool"));
        assert!(html.contains("Visit: https://github.com/octocat/awesome-tool"));
        assert!(html.contains("12.3K"));
        assert!(html.contains("Mar 5, 2021"));
        assert!(html.contains("Nov 20, 2024"));
        assert!(html.contains("data-language-item=\"true\""));
        assert!(html.contains("data-contributor-item=\"true\""));
        assert!(html.contains("@octocat"));
        // 四人以上展示前三名
        assert!(html.contains("alice"));
        assert!(html.contains("carol"));
        assert!(!html.contains("dave"));
    }

    #[test]
    fn test_html_language_percentages() {
        let card = sample_card();
        let html = card.to_html();
        assert!(html.contains("Rust</span> <span class=\"lang-pct\">60.0%"));
        assert!(html.contains("TypeScript</span> <span class=\"lang-pct\">30.0%"));
    }

    #[test]
    fn test_html_escapes_markup() {
        let mut data = sample_data();
        data.name = "cmd<&>tool".to_string();
        let card = CardNode::new(data, default_palette());
        let html = card.to_html();
        assert!(html.contains("cmd&lt;&amp;&gt;tool"));
        assert!(!html.contains("cmd<&>tool"));
    }

    #[test]
    fn test_html_empty_languages_and_contributors() {
        let mut data = sample_data();
        data.languages.clear();
        data.contributors.clear();
        data.contributor_count = 0;
        let card = CardNode::new(data, default_palette());
        let html = card.to_html();
        assert!(html.contains("No language data"));
        assert!(html.contains("No contributor data"));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_html_single_contributor_layout() {
        let mut data = sample_data();
        data.contributors.truncate(1);
        data.contributor_count = 1;
        let card = CardNode::new(data, default_palette());
        let html = card.to_html();
        assert!(html.contains("420 contributions"));
        assert!(!html.contains("rank-2"));
    }

    #[test]
    fn test_svg_dimensions_follow_inline_width() {
        let mut card = sample_card();
        let svg = card.to_svg();
        assert!(svg.starts_with("<svg width=\"900\" height=\"506\""));

        card.apply_capture_style(1200);
        let scaled = card.to_svg();
        // 506 / 900 * 1200 = 674.67 -> 675
        assert!(scaled.starts_with("<svg width=\"1200\" height=\"675\""));
    }

    #[test]
    fn test_svg_uses_initial_discs_not_remote_avatars() {
        let card = sample_card();
        let svg = card.to_svg();
        assert!(!svg.contains("avatars.githubusercontent.com"));
        // 所有者与前三贡献者的首字母
        assert!(svg.contains(">O</text>"));
        assert!(svg.contains(">A</text>"));
        assert!(svg.contains(">B</text>"));
        assert!(svg.contains(">C</text>"));
    }

    #[test]
    fn test_svg_contains_sections() {
        let card = sample_card();
        let svg = card.to_svg();
        assert!(svg.contains("Repository Statistics"));
        assert!(svg.contains("Languages"));
        assert!(svg.contains("Repository Author"));
        assert!(svg.contains("Top Contributors"));
        assert!(svg.contains("Generated on"));
        assert!(svg.contains("Jan 15, 2025"));
    }

    #[test]
    fn test_palette_pick_is_deterministic() {
        let first = pick_for("octocat/awesome-tool");
        let second = pick_for("octocat/awesome-tool");
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn test_palette_by_name() {
        assert_eq!(by_name("ocean-breeze").unwrap().name, "ocean-breeze");
        assert!(by_name("no-such-palette").is_none());
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Rust", 9), "Rust");
        assert_eq!(truncate_label("JavaScript", 9), "JavaScri…");
    }
}
