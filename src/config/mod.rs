use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// 导出格式
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "pdf")]
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// 默认导出全部三种格式
    pub fn all() -> Vec<ExportFormat> {
        vec![ExportFormat::Html, ExportFormat::Png, ExportFormat::Pdf]
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Png => write!(f, "png"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "png" => Ok(ExportFormat::Png),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// GitHub仓库URL
    pub repo_url: String,

    /// 输出路径
    pub output_path: PathBuf,

    /// 要导出的格式
    pub formats: Vec<ExportFormat>,

    /// 配色方案名称，缺省时按仓库名确定性选取
    pub palette: Option<String>,

    /// 是否启用详细日志
    pub verbose: bool,

    /// GitHub API配置
    pub github: GithubConfig,

    /// 导出配置
    pub export: ExportConfig,

    /// 描述合成器配置
    pub synthesizer: SynthesizerConfig,
}

/// GitHub API配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct GithubConfig {
    /// API基地址
    pub api_base_url: String,

    /// 访问令牌，存在时附加到Authorization头
    pub token: String,

    /// GitHub要求所有请求都携带User-Agent
    pub user_agent: String,
}

/// 导出配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    /// 卡片的设计宽度（像素），捕获时临时钉住避免外层布局影响
    pub card_width: u32,

    /// 光栅化的设备像素比倍率
    pub scale: f64,
}

/// 描述合成器配置
///
/// 阈值在原始实现的多个副本中并不一致，按可调常量对待而非硬不变量。
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// README低于该长度时直接走语言兜底句
    pub min_readme_len: usize,

    /// 候选句的最小长度（含）
    pub min_sentence_len: usize,

    /// 候选句的最大长度（不含）
    pub max_sentence_len: usize,

    /// 描述低于该长度时尝试追加第二句
    pub enrich_below: usize,

    /// 最终描述的长度上限
    pub max_description_len: usize,

    /// 硬截断时按词边界收敛到的长度
    pub truncate_at: usize,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_url: String::new(),
            output_path: PathBuf::from("./repocard.out"),
            formats: ExportFormat::all(),
            palette: None,
            verbose: false,
            github: GithubConfig::default(),
            export: ExportConfig::default(),
            synthesizer: SynthesizerConfig::default(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://api.github.com"),
            token: std::env::var("REPOCARD_GITHUB_TOKEN").unwrap_or_default(),
            user_agent: format!("repocard-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            card_width: 900,
            scale: 2.0,
        }
    }
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            min_readme_len: 50,
            min_sentence_len: 15,
            max_sentence_len: 150,
            enrich_below: 90,
            max_description_len: 140,
            truncate_at: 135,
        }
    }
}
