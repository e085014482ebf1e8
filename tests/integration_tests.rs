use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use repocard_rs::card::{CardNode, pick_for};
use repocard_rs::config::{Config, ExportFormat, SynthesizerConfig};
use repocard_rs::exporter;
use repocard_rs::synthesizer::DescriptionSynthesizer;
use repocard_rs::types::{GithubUser, RepoCardData};
use repocard_rs::workflow::{ButtonState, CardSession};

/// 构造一份离线的卡片数据，描述由合成器从README生成
fn build_card_data() -> RepoCardData {
    let readme = "# Overview.\n\nTaskTracker is a tool for managing daily tasks and reminders efficiently.\n\n## Install\n\n```bash\ncargo install tasktracker\n```\n";
    let languages = vec![
        ("Rust".to_string(), 52_000u64),
        ("Shell".to_string(), 3_000),
    ];
    let synthesizer = DescriptionSynthesizer::new(SynthesizerConfig::default());
    let description = synthesizer.synthesize(readme, &languages);

    RepoCardData {
        name: "tasktracker".to_string(),
        html_url: "https://github.com/octocat/tasktracker".to_string(),
        description,
        stars: 2_450,
        forks: 180,
        watchers: 95,
        created_at: Utc.with_ymd_and_hms(2021, 5, 10, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
        owner: GithubUser {
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
            name: Some("The Octocat".to_string()),
            contributions: None,
        },
        languages,
        contributors: vec![
            GithubUser {
                login: "alice".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/2".to_string(),
                name: None,
                contributions: Some(312),
            },
            GithubUser {
                login: "bob".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/3".to_string(),
                name: None,
                contributions: Some(41),
            },
        ],
        contributor_count: 2,
        generated_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_synthesized_description_is_well_formed() {
    let data = build_card_data();
    assert!(data.description.chars().count() <= 140);
    assert!(
        data.description.ends_with('.')
            || data.description.ends_with('!')
            || data.description.ends_with('?')
    );
    // README正文句子被原样采用
    assert!(data.description.contains("TaskTracker is a tool"));
}

#[tokio::test]
async fn test_export_html_and_png_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        repo_url: "https://github.com/octocat/tasktracker".to_string(),
        output_path: temp_dir.path().to_path_buf(),
        formats: vec![ExportFormat::Html, ExportFormat::Png],
        ..Config::default()
    };

    let data = build_card_data();
    let palette = pick_for(&data.name);
    let mut card = CardNode::new(data, palette);
    let original_style = card.style.clone();

    let written = exporter::save(&mut card, &config).await.unwrap();
    assert_eq!(written.len(), 2);

    let html_path = temp_dir.path().join("tasktracker-report-card.html");
    let png_path = temp_dir.path().join("tasktracker-report-card.png");
    assert!(html_path.exists());
    assert!(png_path.exists());

    let document = std::fs::read_to_string(&html_path).unwrap();
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("tasktracker"));
    assert!(document.contains("TaskTracker is a tool"));
    assert!(document.contains("2.5K"));
    assert!(!document.contains("data-testid"));

    // PNG魔数
    let png_bytes = std::fs::read(&png_path).unwrap();
    assert_eq!(
        &png_bytes[..8],
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]
    );

    // 导出结束后内联样式恢复原值
    assert_eq!(card.style, original_style);
}

#[tokio::test]
async fn test_export_creates_missing_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("cards").join("out");
    let config = Config {
        output_path: nested.clone(),
        formats: vec![ExportFormat::Html],
        ..Config::default()
    };

    let data = build_card_data();
    let mut card = CardNode::new(data, pick_for("tasktracker"));
    let written = exporter::save(&mut card, &config).await.unwrap();
    assert_eq!(written.len(), 1);
    assert!(nested.join("tasktracker-report-card.html").exists());
}

#[test]
fn test_session_lifecycle_end_to_end() {
    let mut session = CardSession::new();
    session.set_url("https://github.com/octocat/tasktracker");

    assert!(session.begin_generate());
    session.complete(build_card_data());
    assert_eq!(session.state(), ButtonState::Generated);

    assert!(session.begin_download());
    session.finish_download();

    // 换一个URL会丢弃已生成的卡片
    session.set_url("https://github.com/octocat/other");
    assert_eq!(session.state(), ButtonState::Initial);
    assert!(session.data().is_none());
}
