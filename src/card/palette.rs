/// 卡片配色方案
///
/// 渐变以(起点, 终点)色对表达，HTML导出拼成CSS linear-gradient，
/// SVG导出拼成<linearGradient>。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    /// 头部与底部区块的渐变
    pub gradient: (&'static str, &'static str),
    /// 卡片主体背景渐变
    pub card_bg: (&'static str, &'static str),
    /// 作者/贡献者区块背景渐变
    pub section_bg: (&'static str, &'static str),
    /// 统计小块的半透明底色
    pub stat_bg: &'static str,
}

/// 有序配色表，前五个为彩色方案，最后一个为默认的石板灰
pub const PALETTES: &[ColorPalette] = &[
    // Coral Sunset - 温暖活力
    ColorPalette {
        name: "coral-sunset",
        primary: "#FF6B6B",
        secondary: "#FF8E53",
        accent: "#4ECDC4",
        text: "#2C3E50",
        gradient: ("#FF6B6B", "#FF8E53"),
        card_bg: ("#FFF5F5", "#FFF0E6"),
        section_bg: ("#FFE5E5", "#FFE5CC"),
        stat_bg: "rgba(255, 107, 107, 0.1)",
    },
    // Ocean Breeze - 冷静专业
    ColorPalette {
        name: "ocean-breeze",
        primary: "#3498DB",
        secondary: "#2980B9",
        accent: "#1ABC9C",
        text: "#2C3E50",
        gradient: ("#3498DB", "#2980B9"),
        card_bg: ("#EBF8FF", "#E0F2FE"),
        section_bg: ("#DBEAFE", "#CFFAFE"),
        stat_bg: "rgba(52, 152, 219, 0.1)",
    },
    // Purple Dream - 创意创新
    ColorPalette {
        name: "purple-dream",
        primary: "#9B59B6",
        secondary: "#8E44AD",
        accent: "#E74C3C",
        text: "#2C3E50",
        gradient: ("#9B59B6", "#8E44AD"),
        card_bg: ("#FAF5FF", "#F3E8FF"),
        section_bg: ("#F3E8FF", "#EDE9FE"),
        stat_bg: "rgba(155, 89, 182, 0.1)",
    },
    // Forest Green - 自然生长
    ColorPalette {
        name: "forest-green",
        primary: "#27AE60",
        secondary: "#229954",
        accent: "#F39C12",
        text: "#2C3E50",
        gradient: ("#27AE60", "#229954"),
        card_bg: ("#F0FDF4", "#ECFDF5"),
        section_bg: ("#DCFCE7", "#BBF7D0"),
        stat_bg: "rgba(39, 174, 96, 0.1)",
    },
    // Golden Hour - 温暖乐观
    ColorPalette {
        name: "golden-hour",
        primary: "#F39C12",
        secondary: "#E67E22",
        accent: "#E74C3C",
        text: "#2C3E50",
        gradient: ("#F39C12", "#E67E22"),
        card_bg: ("#FFFBEB", "#FEF3C7"),
        section_bg: ("#FEF3C7", "#FDE68A"),
        stat_bg: "rgba(243, 156, 18, 0.1)",
    },
    // Slate - 未指定配色时的深灰默认值
    ColorPalette {
        name: "slate",
        primary: "#4A5568",
        secondary: "#2D3748",
        accent: "#63B3ED",
        text: "#FFFFFF",
        gradient: ("#1A202C", "#2D3748"),
        card_bg: ("#1A202C", "#2D3748"),
        section_bg: ("#2D3748", "#4A5568"),
        stat_bg: "rgba(255, 255, 255, 0.1)",
    },
];

/// 按名称查找配色方案
pub fn by_name(name: &str) -> Option<&'static ColorPalette> {
    PALETTES.iter().find(|palette| palette.name == name)
}

/// 按仓库名确定性选取彩色方案之一，同一仓库总是得到同一配色
pub fn pick_for(repo_name: &str) -> &'static ColorPalette {
    let colorful = &PALETTES[..PALETTES.len() - 1];
    let hash: usize = repo_name.bytes().map(usize::from).sum();
    &colorful[hash % colorful.len()]
}

/// 默认石板灰配色
pub fn default_palette() -> &'static ColorPalette {
    &PALETTES[PALETTES.len() - 1]
}

/// 用于语言小圆点的着色，循环使用调色板衍生色
pub const LANGUAGE_DOT_COLORS: &[&str] = &[
    "#F1E05A", "#3178C6", "#DEA584", "#00ADD8", "#701516", "#563D7C", "#B07219", "#178600",
];
