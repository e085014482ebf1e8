use crate::config::{Config, ExportFormat};
use clap::Parser;
use std::path::PathBuf;

/// RepoCard-RS - GitHub仓库报告卡生成器
#[derive(Parser, Debug)]
#[command(name = "repocard-rs")]
#[command(
    about = "Generate a shareable report card for a GitHub repository and export it as standalone HTML, PNG or PDF. Repository metadata is fetched through the public GitHub REST API; when a repository has no description, one is synthesized from its README."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// GitHub仓库URL，例如 https://github.com/rust-lang/rust
    pub url: String,

    /// 输出路径
    #[arg(short, long, default_value = "./repocard.out")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 导出格式 (html, png, pdf)，逗号分隔，默认全部
    #[arg(short, long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// 配色方案 (coral-sunset, ocean-breeze, purple-dream, forest-green, golden-hour, slate)
    #[arg(long)]
    pub palette: Option<String>,

    /// GitHub访问令牌，也可通过 REPOCARD_GITHUB_TOKEN 环境变量提供
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub API基地址
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// 卡片设计宽度（像素）
    #[arg(long)]
    pub card_width: Option<u32>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("repocard.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        config.repo_url = self.url;
        config.output_path = self.output_path;

        // 导出格式：CLI参数优先级最高
        if !self.format.is_empty() {
            let mut formats = Vec::new();
            for format_str in &self.format {
                if let Ok(format) = format_str.parse::<ExportFormat>() {
                    if !formats.contains(&format) {
                        formats.push(format);
                    }
                } else {
                    eprintln!("⚠️ 警告: 未知的导出格式: {}，已忽略", format_str);
                }
            }
            if !formats.is_empty() {
                config.formats = formats;
            }
        }

        // 覆盖GitHub配置
        if let Some(token) = self.token {
            config.github.token = token;
        }
        if let Some(api_base_url) = self.api_base_url {
            config.github.api_base_url = api_base_url;
        }

        // 覆盖导出配置
        if let Some(card_width) = self.card_width {
            config.export.card_width = card_width;
        }

        // 其他配置
        if self.palette.is_some() {
            config.palette = self.palette;
        }
        config.verbose = self.verbose;

        config
    }
}
