use anyhow::{Result, bail};
use regex::Regex;

use crate::card::{self, CardNode};
use crate::config::Config;
use crate::exporter;
use crate::github::GithubClient;
use crate::synthesizer::DescriptionSynthesizer;
use crate::types::RepoCardData;

pub mod session;

pub use session::{ButtonState, CardSession};

/// 从URL中解析owner与仓库名
///
/// 接受完整URL或`github.com/owner/repo`简写，容忍结尾的`.git`与斜杠。
pub fn parse_repo_url(url: &str) -> Result<(String, String)> {
    let pattern = Regex::new(r"github\.com/([^/\s]+)/([^/\s]+)").unwrap();
    let Some(caps) = pattern.captures(url) else {
        bail!("无效的GitHub仓库URL: {}", url);
    };
    let owner = caps[1].to_string();
    let repo = caps[2]
        .trim_end_matches('/')
        .trim_end_matches(".git")
        .to_string();
    if repo.is_empty() {
        bail!("无效的GitHub仓库URL: {}", url);
    }
    Ok((owner, repo))
}

/// 启动报告卡生成工作流
pub async fn launch(config: &Config) -> Result<()> {
    let mut session = CardSession::new();
    session.set_url(&config.repo_url);

    let (owner, repo) = parse_repo_url(&config.repo_url)?;
    println!("🔍 正在生成仓库报告卡: {}/{}", owner, repo);
    session.begin_generate();

    let client = GithubClient::new(&config.github, config.verbose)?;
    let data = match assemble_card_data(&client, &owner, &repo, config).await {
        Ok(data) => data,
        Err(e) => {
            session.fail();
            eprintln!("❌ 获取仓库数据失败，请检查URL后重试。");
            return Err(e);
        }
    };
    session.complete(data.clone());

    let palette = match config.palette.as_deref() {
        Some(name) => card::by_name(name).unwrap_or_else(|| {
            eprintln!("⚠️ 未知的配色方案: {}，改用仓库默认配色", name);
            card::pick_for(&data.name)
        }),
        None => card::pick_for(&data.name),
    };
    if config.verbose {
        println!("🔍 使用配色方案: {}", palette.name);
    }

    let mut node = CardNode::new(data, palette);
    session.begin_download();
    let result = exporter::save(&mut node, config).await;
    session.finish_download();

    let written = result?;
    if written.is_empty() {
        bail!("所有格式均导出失败");
    }
    println!("🎉 报告卡生成完成，共导出{}个文件", written.len());
    Ok(())
}

/// 抓取并合并卡片数据
///
/// 仓库主接口失败直接报错；语言、所有者、贡献者与README
/// 都按可降级数据处理。上游描述缺失时从README合成。
async fn assemble_card_data(
    client: &GithubClient,
    owner: &str,
    repo: &str,
    config: &Config,
) -> Result<RepoCardData> {
    let repository = client.fetch_repository(owner, repo).await?;
    let languages = client.fetch_languages(owner, repo).await;
    let owner_profile = client.fetch_owner_profile(&repository.owner.login).await;
    let (contributors, contributor_count) = client.fetch_contributors(owner, repo).await;

    let description = match repository.description.as_deref() {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => {
            if config.verbose {
                println!("🖊️ 仓库没有描述，从README合成");
            }
            let readme = client.fetch_readme(owner, repo).await.unwrap_or_default();
            let synthesizer = DescriptionSynthesizer::new(config.synthesizer.clone());
            synthesizer.synthesize(&readme, &languages)
        }
    };

    let resolved_owner = owner_profile.unwrap_or_else(|| repository.owner.clone());
    Ok(RepoCardData::assemble(
        repository,
        resolved_owner,
        languages,
        contributors,
        contributor_count,
        description,
    ))
}

// Include tests
#[cfg(test)]
mod tests;
