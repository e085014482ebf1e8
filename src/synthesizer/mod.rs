use regex::Regex;

use crate::config::SynthesizerConfig;

/// 有序的项目类型关键词表，首个命中生效
/// (关键词集合, 项目类型, 项目意图)
const PROJECT_TYPES: &[(&[&str], &str, &str)] = &[
    (
        &["portfolio", "personal website", "showcase"],
        "portfolio website",
        "showcasing professional work and achievements",
    ),
    (
        &["e-commerce", "shop", "store", "marketplace"],
        "e-commerce platform",
        "facilitating online shopping and transactions",
    ),
    (
        &["blog", "cms", "content management"],
        "content management system",
        "managing and publishing digital content",
    ),
    (
        &["dashboard", "analytics", "visualization"],
        "analytics dashboard",
        "visualizing data and providing insights",
    ),
    (
        &["game", "gaming", "entertainment"],
        "gaming application",
        "providing interactive entertainment experiences",
    ),
    (
        &["chat", "messaging", "communication"],
        "communication platform",
        "enabling real-time communication and collaboration",
    ),
    (
        &["api", "service", "microservice"],
        "backend service",
        "providing robust API endpoints and data processing",
    ),
    (
        &["mobile", "ios", "android"],
        "mobile application",
        "delivering seamless mobile user experiences",
    ),
    (
        &["machine learning", "ai", "data science"],
        "AI/ML application",
        "leveraging artificial intelligence for intelligent solutions",
    ),
    (
        &["tool", "utility", "automation"],
        "development tool",
        "streamlining development workflows and processes",
    ),
];

/// 功能声明式短语，含有这些短语的句子优先作为描述
const FUNCTIONAL_PHRASES: &[&str] = &[
    "is a",
    "is an",
    "is the",
    "provides",
    "offers",
    "delivers",
    "allows",
    "enables",
    "helps",
    "designed to",
    "built to",
    "created to",
    "platform",
    "solution",
    "system",
];

/// 能力描述短语，作为次级候选
const CAPABILITY_PHRASES: &[&str] = &[
    "features",
    "includes",
    "supports",
    "can",
    "able to",
    "capable of",
];

/// 描述合成器
///
/// 纯函数管线：清洗markdown -> 抽取候选句 -> 分类 -> 按优先级选句 -> 归一化截断。
/// 无I/O，永不失败，总是返回非空字符串。
pub struct DescriptionSynthesizer {
    config: SynthesizerConfig,
    /// 按固定顺序执行的清洗规则 (pattern, replacement)
    cleaners: Vec<(Regex, &'static str)>,
    /// 安装/贡献等样板句的排除表
    denylist: Vec<Regex>,
    sentence_splitter: Regex,
    whitespace: Regex,
    duplicate_period: Regex,
}

impl DescriptionSynthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        let cleaner_rules: &[(&str, &'static str)] = &[
            // 代码块与行内代码
            (r"(?s)```.*?```", " "),
            (r"`[^`]+`", " "),
            // markdown标记
            (r"!\[.*?\]\(.*?\)", " "),
            (r"\[([^\]]+)\]\([^)]+\)", "$1"),
            (r"#{1,6}\s+", ""),
            (r"\*\*([^*]+)\*\*", "$1"),
            (r"\*([^*]+)\*", "$1"),
            (r"~~([^~]+)~~", "$1"),
            // 结构性元素
            (r">\s+", ""),
            (r"[-*+]\s+", ""),
            (r"\d+\.\s+", ""),
            (r"\|\s*.*?\s*\|", " "),
            (r"-{3,}", " "),
            (r"={3,}", " "),
            // 空白归一
            (r"\n+", " "),
            (r"\s+", " "),
        ];
        let cleaners = cleaner_rules
            .iter()
            .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
            .collect();

        let denylist_rules = [
            r"install|setup|clone|download|npm|yarn|pip|composer",
            r"requirements|dependencies|getting started|how to use",
            r"usage|example|demo|contributing|license|readme",
            r"documentation|changelog|version|update|release",
            r"run the|start|execute|command|terminal|bash|shell",
            r"folder|directory|file|config|environment|variable",
            r"github|git|repository|repo|branch|commit|pull request",
            r"test|testing|build|deploy|deployment|ci/cd",
            r"api key|token|secret|credential|authentication",
        ];
        let denylist = denylist_rules
            .iter()
            .map(|pattern| Regex::new(pattern).unwrap())
            .collect();

        Self {
            config,
            cleaners,
            denylist,
            sentence_splitter: Regex::new(r"[.!?]+\s+").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            duplicate_period: Regex::new(r"\s*\.\s*\.").unwrap(),
        }
    }

    /// 从README文本合成1-2句的项目描述
    ///
    /// `languages`按字节数降序，首个键视为主语言。
    pub fn synthesize(&self, readme: &str, languages: &[(String, u64)]) -> String {
        // 退化输入：README缺失或过短，走语言兜底句
        if readme.chars().count() < self.config.min_readme_len {
            return self.fallback_description(languages);
        }

        let clean = self.strip_markdown(readme);
        let sentences = self.extract_sentences(&clean);
        let content_lower = clean.to_lowercase();
        let (project_type, project_purpose) = classify(&content_lower, languages);

        let functional: Vec<&String> = sentences
            .iter()
            .filter(|s| is_functional(&s.to_lowercase()))
            .collect();
        let capability: Vec<&String> = sentences
            .iter()
            .filter(|s| is_capability(&s.to_lowercase()))
            .collect();

        // 优先级：功能声明句 > 能力句 > 任意候选句 > 模板句
        let mut description = if let Some(sentence) = functional.first() {
            (*sentence).clone()
        } else if let Some(sentence) = capability.first() {
            (*sentence).clone()
        } else if let Some(sentence) = sentences.first() {
            sentence.clone()
        } else if !project_purpose.is_empty() {
            format!("A modern {} focused on {}.", project_type, project_purpose)
        } else {
            format!(
                "A comprehensive {} built with cutting-edge technologies and best practices.",
                project_type
            )
        };

        // 描述太短时按同样的优先级追加第二句
        if description.chars().count() < self.config.enrich_below {
            let second_line = if functional.is_empty()
                && let Some(sentence) = capability.iter().find(|s| ***s != description)
            {
                (**sentence).clone()
            } else if !languages.is_empty() {
                let techs = languages
                    .iter()
                    .take(2)
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>()
                    .join(" and ");
                format!(
                    "Built with {} to ensure scalability, performance, and maintainability.",
                    techs
                )
            } else {
                String::from("Designed with modern architecture principles and user-centric approach.")
            };

            let combined = format!("{} {}", description, second_line);
            if combined.chars().count() <= self.config.max_description_len {
                description = combined;
            }
        }

        self.finalize(description)
    }

    /// 按固定顺序剥离markdown结构，对已清洗文本幂等
    pub fn strip_markdown(&self, text: &str) -> String {
        let mut clean = text.to_string();
        for (pattern, replacement) in &self.cleaners {
            clean = pattern.replace_all(&clean, *replacement).into_owned();
        }
        clean.trim().to_string()
    }

    /// 切分候选句：长度落在[min, max)且不命中排除表
    fn extract_sentences(&self, clean: &str) -> Vec<String> {
        self.sentence_splitter
            .split(clean)
            .map(str::trim)
            .filter(|s| {
                let len = s.chars().count();
                len >= self.config.min_sentence_len && len < self.config.max_sentence_len
            })
            .filter(|s| {
                let lower = s.to_lowercase();
                !self.denylist.iter().any(|pattern| pattern.is_match(&lower))
            })
            .map(str::to_string)
            .collect()
    }

    fn fallback_description(&self, languages: &[(String, u64)]) -> String {
        let primary = languages
            .first()
            .map(|(name, _)| name.to_lowercase())
            .unwrap_or_else(|| String::from("software"));
        format!(
            "A {} project designed to solve real-world problems with modern development practices and clean architecture.",
            primary
        )
    }

    /// 归一空白、折叠重复句点、必要时按词边界截断并补齐终止标点
    fn finalize(&self, description: String) -> String {
        let mut description = self
            .whitespace
            .replace_all(description.trim(), " ")
            .into_owned();
        description = self
            .duplicate_period
            .replace_all(&description, ".")
            .into_owned();

        if description.chars().count() > self.config.max_description_len {
            let mut truncated = String::new();
            for word in description.split(' ') {
                if truncated.chars().count() + 1 + word.chars().count() > self.config.truncate_at {
                    break;
                }
                if !truncated.is_empty() {
                    truncated.push(' ');
                }
                truncated.push_str(word);
            }
            description = format!("{}...", truncated);
        }

        if !description.ends_with(['.', '!', '?']) {
            description.push('.');
        }

        description
    }
}

/// 扫描清洗后的全文（小写），按有序关键词表对项目分类
///
/// 没有关键词命中时按主语言推断类别。
fn classify(content_lower: &str, languages: &[(String, u64)]) -> (String, String) {
    for (keywords, project_type, project_purpose) in PROJECT_TYPES {
        if keywords.iter().any(|kw| content_lower.contains(kw)) {
            return (project_type.to_string(), project_purpose.to_string());
        }
    }

    // 语言兜底类别
    let primary = languages
        .first()
        .map(|(name, _)| name.as_str())
        .unwrap_or("software");
    match primary {
        "JavaScript" | "TypeScript" => (
            String::from("web application"),
            String::from("delivering modern web experiences"),
        ),
        "Python" => (
            String::from("Python application"),
            String::from("solving complex problems with elegant solutions"),
        ),
        "Java" => (
            String::from("enterprise application"),
            String::from("providing scalable business solutions"),
        ),
        other => (
            format!("{} application", other),
            String::from("delivering high-quality software solutions"),
        ),
    }
}

fn is_functional(lower: &str) -> bool {
    FUNCTIONAL_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

fn is_capability(lower: &str) -> bool {
    CAPABILITY_PHRASES.iter().any(|phrase| lower.contains(phrase))
        || (lower.contains("with")
            && (lower.contains("support") || lower.contains("integration")))
}
