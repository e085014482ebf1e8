use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use regex::Regex;
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::types::{GithubRepository, GithubUser};

/// GitHub API访问错误
///
/// 仓库主接口失败是致命错误，其余附属接口（语言、所有者、
/// 贡献者、README）失败时降级为空数据继续。
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("仓库不存在或无法访问: {0}")]
    RepositoryNotFound(String),
    #[error("GitHub API请求失败: {0}")]
    Request(#[from] reqwest::Error),
}

/// `GET /repos/{owner}/{repo}/readme` 的响应体
#[derive(Debug, Deserialize)]
struct ReadmePayload {
    /// Base64编码的README内容，GitHub会插入换行
    content: String,
}

/// GitHub REST v3客户端
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    verbose: bool,
}

impl GithubClient {
    pub fn new(config: &GithubConfig, verbose: bool) -> Result<Self, GithubError> {
        // GitHub API要求User-Agent，否则直接403
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        let token = if config.token.is_empty() {
            None
        } else {
            Some(config.token.clone())
        };

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
            verbose,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        request
    }

    /// 抓取仓库元数据，任何非2xx状态都视为仓库不可用
    pub async fn fetch_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<GithubRepository, GithubError> {
        if self.verbose {
            println!("🔍 获取仓库元数据: {}/{}", owner, repo);
        }
        let response = self.get(&format!("/repos/{}/{}", owner, repo)).send().await?;
        if !response.status().is_success() {
            return Err(GithubError::RepositoryNotFound(format!(
                "{}/{}",
                owner, repo
            )));
        }
        Ok(response.json().await?)
    }

    /// 抓取语言字节分布，按字节数降序。失败时降级为空表
    pub async fn fetch_languages(&self, owner: &str, repo: &str) -> Vec<(String, u64)> {
        match self.try_fetch_languages(owner, repo).await {
            Ok(languages) => languages,
            Err(e) => {
                eprintln!("⚠️ 获取语言分布失败，卡片将不展示语言: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_fetch_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<(String, u64)>, GithubError> {
        let map: HashMap<String, u64> = self
            .get(&format!("/repos/{}/{}/languages", owner, repo))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(sort_languages(map))
    }

    /// 抓取所有者的完整档案（带展示名）。失败时降级为None，
    /// 调用方回退使用仓库内嵌的owner
    pub async fn fetch_owner_profile(&self, login: &str) -> Option<GithubUser> {
        match self.try_fetch_owner(login).await {
            Ok(user) => Some(user),
            Err(e) => {
                eprintln!("⚠️ 获取所有者档案失败，使用仓库内嵌信息: {}", e);
                None
            }
        }
    }

    async fn try_fetch_owner(&self, login: &str) -> Result<GithubUser, GithubError> {
        Ok(self
            .get(&format!("/users/{}", login))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    /// 抓取贡献者列表与总数
    ///
    /// 先用per_page=1探测Link分页头，`rel="last"`的页码即总数；
    /// 无分页头时逐页穷举（每页100，至多10页）。失败时降级为空。
    pub async fn fetch_contributors(&self, owner: &str, repo: &str) -> (Vec<GithubUser>, u64) {
        match self.try_fetch_contributors(owner, repo).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("⚠️ 获取贡献者列表失败，卡片将不展示贡献者: {}", e);
                (Vec::new(), 0)
            }
        }
    }

    async fn try_fetch_contributors(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<(Vec<GithubUser>, u64), GithubError> {
        let path = format!("/repos/{}/{}/contributors", owner, repo);

        let probe = self
            .get(&path)
            .query(&[("per_page", "1")])
            .send()
            .await?
            .error_for_status()?;
        let link = probe
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if let Some(link) = link
            && let Some(total) = parse_last_page(&link)
        {
            let top: Vec<GithubUser> = self
                .get(&path)
                .query(&[("per_page", "10")])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            return Ok((top, total));
        }

        // 无Link头的小仓库逐页穷举
        let mut all: Vec<GithubUser> = Vec::new();
        for page in 1..=10u32 {
            let batch: Vec<GithubUser> = self
                .get(&path)
                .query(&[("per_page", "100"), ("page", &page.to_string())])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            let fetched = batch.len();
            all.extend(batch);
            if fetched < 100 {
                break;
            }
        }
        let total = all.len() as u64;
        all.truncate(10);
        Ok((all, total))
    }

    /// 抓取README明文。仓库无README或解码失败时返回None
    pub async fn fetch_readme(&self, owner: &str, repo: &str) -> Option<String> {
        let payload = match self.try_fetch_readme(owner, repo).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                eprintln!("⚠️ 获取README失败: {}", e);
                return None;
            }
        };
        match decode_readme(&payload.content) {
            Some(text) => Some(text),
            None => {
                eprintln!("⚠️ README内容解码失败");
                None
            }
        }
    }

    async fn try_fetch_readme(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<ReadmePayload>, GithubError> {
        let response = self
            .get(&format!("/repos/{}/{}/readme", owner, repo))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }
}

/// 语言表按字节数降序，字节数相同时按名称排序保证稳定
fn sort_languages(map: HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut languages: Vec<(String, u64)> = map.into_iter().collect();
    languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    languages
}

/// 从Link分页头解析`rel="last"`的页码
fn parse_last_page(link: &str) -> Option<u64> {
    let pattern = Regex::new(r#"[?&]page=(\d+)[^>]*>;\s*rel="last""#).unwrap();
    pattern
        .captures(link)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// 解码GitHub返回的Base64 README（先剔除其插入的换行与空白）
fn decode_readme(content: &str) -> Option<String> {
    let compact: String = content.split_whitespace().collect();
    let bytes = BASE64_STANDARD.decode(compact.as_bytes()).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

// Include tests
#[cfg(test)]
mod tests;
