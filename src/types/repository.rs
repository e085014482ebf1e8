use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub用户（仓库所有者或贡献者）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub avatar_url: String,
    /// 展示名称，来自`/users/{owner}`，仓库内嵌的owner通常没有
    #[serde(default)]
    pub name: Option<String>,
    /// 贡献次数，仅贡献者列表返回
    #[serde(default)]
    pub contributions: Option<u64>,
}

/// `GET /repos/{owner}/{repo}` 响应中实际被消费的字段
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    /// GitHub网页上的"Watchers"实际是subscribers_count
    #[serde(default)]
    pub subscribers_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: GithubUser,
}

/// 报告卡展示模型
///
/// 一次抓取构建一次，重新提交URL时整体丢弃重建，不做增量更新或缓存。
#[derive(Debug, Clone)]
pub struct RepoCardData {
    pub name: String,
    pub html_url: String,
    /// 上游描述，缺失时由合成器生成
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: GithubUser,
    /// 语言 -> 字节数，按字节数降序
    pub languages: Vec<(String, u64)>,
    /// 按贡献数降序（与上游返回顺序一致）
    pub contributors: Vec<GithubUser>,
    /// 贡献者总数，通过Link分页头或逐页穷举得到
    pub contributor_count: u64,
    pub generated_at: DateTime<Utc>,
}

impl RepoCardData {
    /// 将各接口的返回合并为展示模型
    pub fn assemble(
        repo: GithubRepository,
        owner: GithubUser,
        languages: Vec<(String, u64)>,
        contributors: Vec<GithubUser>,
        contributor_count: u64,
        description: String,
    ) -> Self {
        // 网页端的Watchers展示的是订阅数，优先使用
        let watchers = repo.subscribers_count.unwrap_or(repo.watchers_count);

        Self {
            name: repo.name,
            html_url: repo.html_url,
            description,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            watchers,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            owner,
            languages,
            contributors,
            contributor_count,
            generated_at: Utc::now(),
        }
    }

    /// 最主要的语言（语言表按字节数降序）
    pub fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(|(name, _)| name.as_str())
    }
}
