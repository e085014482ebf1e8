use crate::config::ExportFormat;
use crate::types::RepoCardData;
use crate::utils::format::{escape_markup, format_date, format_number};

pub mod palette;

pub use palette::{ColorPalette, by_name, default_palette, pick_for};

/// 卡片的设计宽高比，内容坐标系固定为900x506
const DESIGN_WIDTH: f64 = 900.0;
const DESIGN_HEIGHT: f64 = 506.0;

/// 卡片节点上的瞬时内联样式
///
/// 导出器在捕获前临时改写这些值，捕获结束后必须原样恢复，
/// 成功与失败两条路径都不例外。
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStyle {
    pub width: String,
    pub min_width: String,
    pub max_width: String,
    pub box_shadow: String,
    pub padding: String,
    pub margin: String,
    pub border_radius: String,
}

impl Default for InlineStyle {
    fn default() -> Self {
        // 卡片的排版默认值
        Self {
            width: String::from("900px"),
            min_width: String::from("900px"),
            max_width: String::new(),
            box_shadow: String::from("0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
            padding: String::new(),
            margin: String::from("0 auto"),
            border_radius: String::from("1rem"),
        }
    }
}

impl InlineStyle {
    /// 拼接成style属性值，跳过空项
    fn to_css(&self) -> String {
        let mut css = String::new();
        let pairs = [
            ("width", &self.width),
            ("min-width", &self.min_width),
            ("max-width", &self.max_width),
            ("box-shadow", &self.box_shadow),
            ("padding", &self.padding),
            ("margin", &self.margin),
            ("border-radius", &self.border_radius),
        ];
        for (property, value) in pairs {
            if !value.is_empty() {
                css.push_str(property);
                css.push_str(": ");
                css.push_str(value);
                css.push_str("; ");
            }
        }
        css.trim_end().to_string()
    }

    /// 当前宽度（像素），无法解析时退回设计宽度
    fn width_px(&self) -> f64 {
        self.width
            .trim_end_matches("px")
            .parse::<f64>()
            .unwrap_or(DESIGN_WIDTH)
    }

    /// 圆角（像素）。"1rem"按16px换算
    fn radius_px(&self) -> f64 {
        let value = self.border_radius.trim();
        if let Some(rem) = value.strip_suffix("rem") {
            rem.trim().parse::<f64>().map(|r| r * 16.0).unwrap_or(16.0)
        } else {
            value.trim_end_matches("px").parse::<f64>().unwrap_or(16.0)
        }
    }
}

/// 渲染好的报告卡节点：展示数据 + 配色 + 瞬时内联样式
#[derive(Debug, Clone)]
pub struct CardNode {
    pub data: RepoCardData,
    pub palette: &'static ColorPalette,
    pub style: InlineStyle,
}

impl CardNode {
    pub fn new(data: RepoCardData, palette: &'static ColorPalette) -> Self {
        Self {
            data,
            palette,
            style: InlineStyle::default(),
        }
    }

    /// 导出文件名：{repoName}-report-card.{ext}
    pub fn filename(&self, format: ExportFormat) -> String {
        format!("{}-report-card.{}", self.data.name, format.extension())
    }

    /// 捕获前奏：把布局盒钉在固定像素宽度上，清零外边距与内边距，
    /// 去阴影并强制圆角，避免光栅化结果受外层排版影响
    pub fn apply_capture_style(&mut self, width_px: u32) {
        let pinned = format!("{}px", width_px);
        self.style.width = pinned.clone();
        self.style.min_width = pinned.clone();
        self.style.max_width = pinned;
        self.style.box_shadow = String::from("none");
        self.style.padding = String::from("0");
        self.style.margin = String::from("0");
        self.style.border_radius = String::from("1rem");
    }

    /// 卡片自身的HTML标记（不含文档外壳）
    pub fn to_html(&self) -> String {
        let p = self.palette;
        let d = &self.data;
        let mut html = String::new();

        html.push_str(&format!(
            "<div class=\"repo-card\" data-testid=\"repo-card\" style=\"background: {}; {}\">\n",
            css_gradient(p.card_bg),
            self.style.to_css()
        ));

        // 头部
        html.push_str(&format!(
            "  <div class=\"card-header\" style=\"background: {}\">\n    <div class=\"header-main\">\n      <div class=\"icon-box\" style=\"background-color: {}\"><img src=\"https://github.githubassets.com/favicons/favicon-dark.svg\" class=\"gh-icon\"></div>\n      <div>\n        <h1 class=\"repo-name\">{}</h1>\n        <p class=\"repo-url\">Visit: {}</p>\n        <p class=\"repo-description\">{}</p>\n      </div>\n    </div>\n    <div class=\"date-box\" style=\"background-color: {}\">\n      <div>Created: {}</div>\n      <div>Updated: {}</div>\n    </div>\n  </div>\n",
            css_gradient(p.gradient),
            p.stat_bg,
            escape_markup(&d.name),
            escape_markup(&d.html_url),
            escape_markup(&d.description),
            p.stat_bg,
            format_date(&d.created_at),
            format_date(&d.updated_at),
        ));

        // 统计 + 语言
        html.push_str("  <div class=\"card-body\">\n    <div class=\"stats\">\n      <h3 style=\"color: ");
        html.push_str(p.text);
        html.push_str("\">Repository Statistics</h3>\n      <div class=\"stats-grid\">\n");
        let contributor_count = if d.contributor_count > 0 {
            d.contributor_count.to_string()
        } else {
            String::from("N/A")
        };
        let stats = [
            (format_number(d.stars), "Stars"),
            (format_number(d.forks), "Forks"),
            (format_number(d.watchers), "Watchers"),
            (contributor_count, "Contributors"),
        ];
        for (value, label) in &stats {
            html.push_str(&format!(
                "        <div class=\"stat-chip\" style=\"background-color: {}\"><span class=\"stat-value\" style=\"color: {}\">{}</span><span class=\"stat-label\">{}</span></div>\n",
                p.stat_bg, p.text, value, label
            ));
        }
        html.push_str("      </div>\n    </div>\n    <div class=\"languages\">\n      <h3 style=\"color: ");
        html.push_str(p.text);
        html.push_str("\">Languages</h3>\n      <div class=\"lang-row\">\n");
        if d.languages.is_empty() {
            html.push_str(&format!(
                "        <div class=\"lang-empty\" style=\"background-color: {}\">No language data</div>\n",
                p.stat_bg
            ));
        } else {
            let total: u64 = d.languages.iter().map(|(_, bytes)| bytes).sum();
            for (index, (language, bytes)) in d.languages.iter().take(8).enumerate() {
                let percentage = *bytes as f64 / total.max(1) as f64 * 100.0;
                let dot = palette::LANGUAGE_DOT_COLORS
                    [index % palette::LANGUAGE_DOT_COLORS.len()];
                html.push_str(&format!(
                    "        <div class=\"lang-chip\" data-language-item=\"true\" style=\"background-color: {}\"><span class=\"lang-dot\" style=\"background-color: {}\"></span><span style=\"color: {}\">{}</span> <span class=\"lang-pct\">{:.1}%</span></div>\n",
                    p.stat_bg,
                    dot,
                    p.text,
                    escape_markup(language),
                    percentage
                ));
            }
        }
        html.push_str("      </div>\n    </div>\n  </div>\n");

        // 作者 + 贡献者
        html.push_str(&format!(
            "  <div class=\"card-section\" style=\"background: {}\">\n    <div class=\"author\">\n      <h3 style=\"color: {}\">Repository Author</h3>\n      <div class=\"author-box\" style=\"background-color: {}\">\n        <img src=\"{}\" alt=\"{}\" class=\"avatar\">\n        <div><div class=\"author-name\">{}</div><div class=\"author-login\">@{}</div></div>\n      </div>\n    </div>\n",
            css_gradient(p.section_bg),
            p.text,
            p.stat_bg,
            escape_markup(&d.owner.avatar_url),
            escape_markup(&d.owner.login),
            escape_markup(d.owner.name.as_deref().unwrap_or(&d.owner.login)),
            escape_markup(&d.owner.login),
        ));
        html.push_str(&format!(
            "    <div class=\"contributors\">\n      <h3 style=\"color: {}\">Top Contributors</h3>\n      <div class=\"contributor-row\">\n",
            p.text
        ));
        if d.contributors.is_empty() {
            html.push_str(&format!(
                "        <div class=\"contributor-empty\" style=\"background-color: {}\">No contributor data</div>\n",
                p.stat_bg
            ));
        } else if d.contributors.len() > 3 {
            // 前三名并排展示，金银铜徽章
            for (rank, contributor) in d.contributors.iter().take(3).enumerate() {
                html.push_str(&format!(
                    "        <div class=\"contributor-chip rank-{}\" data-contributor-item=\"true\" style=\"background-color: {}\"><img src=\"{}\" alt=\"{}\" class=\"avatar\"><div class=\"contributor-login\">{}</div><div class=\"contributor-count\">{}</div></div>\n",
                    rank + 1,
                    p.stat_bg,
                    escape_markup(&contributor.avatar_url),
                    escape_markup(&contributor.login),
                    escape_markup(&contributor.login),
                    format_number(contributor.contributions.unwrap_or(0)),
                ));
            }
        } else {
            let top = &d.contributors[0];
            html.push_str(&format!(
                "        <div class=\"contributor-chip rank-1\" data-contributor-item=\"true\" style=\"background-color: {}\"><img src=\"{}\" alt=\"{}\" class=\"avatar\"><div class=\"contributor-login\">{}</div><div class=\"contributor-count\">{} contributions</div></div>\n",
                p.stat_bg,
                escape_markup(&top.avatar_url),
                escape_markup(&top.login),
                escape_markup(&top.login),
                format_number(top.contributions.unwrap_or(0)),
            ));
        }
        html.push_str("      </div>\n    </div>\n  </div>\n");

        // 底部
        html.push_str(&format!(
            "  <div class=\"card-footer\" style=\"background: {}\">\n    <div><div class=\"footer-title\">Made with repocard-rs</div><div class=\"footer-sub\">github.com/sopaco/repocard-rs</div></div>\n    <div class=\"footer-date\"><div class=\"footer-sub\">Generated on</div><div class=\"footer-title\">{}</div></div>\n  </div>\n</div>\n",
            css_gradient(p.gradient),
            format_date(&d.generated_at),
        ));

        html
    }

    /// 卡片使用到的样式类规则，HTML导出会把它内联进独立文档
    pub fn stylesheet(&self) -> String {
        String::from(
            r#".repo-card { overflow: hidden; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
.card-header { display: flex; justify-content: space-between; align-items: flex-start; padding: 1.25rem; }
.header-main { display: flex; align-items: center; gap: 1rem; }
.icon-box { padding: 0.75rem; border-radius: 0.75rem; }
.gh-icon { width: 1.75rem; height: 1.75rem; }
.repo-name { font-size: 1.25rem; font-weight: 700; color: white; margin-bottom: 0.25rem; }
.repo-url { color: rgba(255, 255, 255, 0.9); font-size: 0.875rem; }
.repo-description { color: rgba(255, 255, 255, 0.85); font-size: 0.75rem; font-style: italic; max-width: 36rem; }
.date-box { text-align: right; color: rgba(255, 255, 255, 0.9); padding: 0.75rem; border-radius: 0.75rem; font-size: 0.75rem; }
.card-body { padding: 1.25rem; display: flex; gap: 1.5rem; }
.card-body h3, .card-section h3 { font-size: 1rem; font-weight: 600; margin-bottom: 0.75rem; }
.stats-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.5rem; }
.stat-chip { display: flex; flex-direction: column; padding: 0.5rem 0.75rem; border-radius: 0.5rem; }
.stat-value { font-size: 0.875rem; font-weight: 700; }
.stat-label { font-size: 0.75rem; color: rgba(120, 120, 120, 0.9); }
.languages { flex: 1; }
.lang-row { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.lang-chip { display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; border-radius: 0.5rem; font-size: 0.875rem; }
.lang-dot { width: 0.625rem; height: 0.625rem; border-radius: 9999px; display: inline-block; }
.lang-pct { font-weight: 600; opacity: 0.8; }
.lang-empty, .contributor-empty { padding: 1rem; border-radius: 0.5rem; text-align: center; font-size: 0.875rem; opacity: 0.7; }
.card-section { padding: 1.25rem; display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1.5rem; }
.author-box { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem; border-radius: 0.5rem; }
.avatar { width: 2rem; height: 2rem; border-radius: 9999px; }
.author-name { font-size: 0.875rem; font-weight: 600; }
.author-login, .contributor-count { font-size: 0.75rem; opacity: 0.7; }
.contributor-row { display: flex; gap: 0.5rem; }
.contributor-chip { flex: 1; display: flex; flex-direction: column; align-items: center; gap: 0.25rem; padding: 0.75rem; border-radius: 0.5rem; font-size: 0.75rem; }
.card-footer { padding: 1rem 1.25rem; display: flex; justify-content: space-between; align-items: center; color: white; }
.footer-title { font-weight: 600; font-size: 0.875rem; }
.footer-sub { font-size: 0.75rem; opacity: 0.8; }
"#,
        )
    }

    /// 把卡片渲染成定宽SVG文档，供光栅化使用
    ///
    /// 内容坐标系固定为900x506，外层宽高按当前内联宽度缩放。
    /// 远端头像不参与光栅化，以首字母圆盘替代。
    pub fn to_svg(&self) -> String {
        let p = self.palette;
        let d = &self.data;
        let width = self.style.width_px();
        let height = (width * DESIGN_HEIGHT / DESIGN_WIDTH).round();
        let radius = self.style.radius_px();

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 900 506\" xmlns=\"http://www.w3.org/2000/svg\" font-family=\"-apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif\">\n",
            width, height
        ));
        svg.push_str("<defs>\n");
        for (id, (from, to)) in [
            ("grad-header", p.gradient),
            ("grad-card", p.card_bg),
            ("grad-section", p.section_bg),
        ] {
            svg.push_str(&format!(
                "  <linearGradient id=\"{}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\"><stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/></linearGradient>\n",
                id, from, to
            ));
        }
        svg.push_str(&format!(
            "  <clipPath id=\"card-clip\"><rect width=\"900\" height=\"506\" rx=\"{}\"/></clipPath>\n</defs>\n",
            radius
        ));
        svg.push_str("<g clip-path=\"url(#card-clip)\">\n");
        svg.push_str("<rect width=\"900\" height=\"506\" fill=\"url(#grad-card)\"/>\n");
        svg.push_str("<rect width=\"900\" height=\"120\" fill=\"url(#grad-header)\"/>\n");
        svg.push_str("<rect y=\"290\" width=\"900\" height=\"140\" fill=\"url(#grad-section)\"/>\n");
        svg.push_str("<rect y=\"430\" width=\"900\" height=\"76\" fill=\"url(#grad-header)\"/>\n");

        // 头部
        svg.push_str(&format!(
            "<rect x=\"24\" y=\"28\" width=\"64\" height=\"64\" rx=\"12\" fill=\"{}\"/>\n",
            p.stat_bg
        ));
        svg.push_str("<text x=\"56\" y=\"68\" text-anchor=\"middle\" font-size=\"22\" font-weight=\"bold\" fill=\"white\">GH</text>\n");
        svg.push_str(&format!(
            "<text x=\"104\" y=\"54\" font-size=\"22\" font-weight=\"bold\" fill=\"white\">{}</text>\n",
            escape_markup(&d.name)
        ));
        svg.push_str(&format!(
            "<text x=\"104\" y=\"76\" font-size=\"13\" fill=\"white\" opacity=\"0.9\">Visit: {}</text>\n",
            escape_markup(&d.html_url)
        ));
        svg.push_str(&format!(
            "<text x=\"104\" y=\"98\" font-size=\"12\" font-style=\"italic\" fill=\"white\" opacity=\"0.85\">{}</text>\n",
            escape_markup(&truncate_label(&d.description, 110))
        ));
        svg.push_str(&format!(
            "<rect x=\"640\" y=\"30\" width=\"236\" height=\"60\" rx=\"12\" fill=\"{}\"/>\n",
            p.stat_bg
        ));
        svg.push_str(&format!(
            "<text x=\"652\" y=\"54\" font-size=\"12\" fill=\"white\">Created: {}</text>\n<text x=\"652\" y=\"76\" font-size=\"12\" fill=\"white\">Updated: {}</text>\n",
            format_date(&d.created_at),
            format_date(&d.updated_at)
        ));

        // 统计
        svg.push_str(&format!(
            "<text x=\"24\" y=\"152\" font-size=\"15\" font-weight=\"600\" fill=\"{}\">Repository Statistics</text>\n",
            p.text
        ));
        let contributor_count = if d.contributor_count > 0 {
            d.contributor_count.to_string()
        } else {
            String::from("N/A")
        };
        let stats = [
            (format_number(d.stars), "Stars"),
            (format_number(d.forks), "Forks"),
            (format_number(d.watchers), "Watchers"),
            (contributor_count, "Contributors"),
        ];
        for (index, (value, label)) in stats.iter().enumerate() {
            let x = 24 + (index % 2) * 184;
            let y = 164 + (index / 2) * 60;
            svg.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"176\" height=\"52\" rx=\"10\" fill=\"{}\"/>\n<text x=\"{tx}\" y=\"{vy}\" font-size=\"14\" font-weight=\"bold\" fill=\"{}\">{}</text>\n<text x=\"{tx}\" y=\"{ly}\" font-size=\"11\" fill=\"{}\" opacity=\"0.7\">{}</text>\n",
                p.stat_bg,
                p.text,
                value,
                p.text,
                label,
                tx = x + 12,
                vy = y + 22,
                ly = y + 40,
            ));
        }

        // 语言
        svg.push_str(&format!(
            "<text x=\"420\" y=\"152\" font-size=\"15\" font-weight=\"600\" fill=\"{}\">Languages</text>\n",
            p.text
        ));
        if d.languages.is_empty() {
            svg.push_str(&format!(
                "<rect x=\"420\" y=\"164\" width=\"456\" height=\"52\" rx=\"10\" fill=\"{}\"/>\n<text x=\"648\" y=\"194\" text-anchor=\"middle\" font-size=\"13\" fill=\"{}\" opacity=\"0.7\">No language data</text>\n",
                p.stat_bg, p.text
            ));
        } else {
            let total: u64 = d.languages.iter().map(|(_, bytes)| bytes).sum();
            for (index, (language, bytes)) in d.languages.iter().take(8).enumerate() {
                let percentage = *bytes as f64 / total.max(1) as f64 * 100.0;
                let x = 420 + (index % 4) * 116;
                let y = 164 + (index / 4) * 42;
                let dot = palette::LANGUAGE_DOT_COLORS
                    [index % palette::LANGUAGE_DOT_COLORS.len()];
                svg.push_str(&format!(
                    "<rect x=\"{x}\" y=\"{y}\" width=\"108\" height=\"34\" rx=\"8\" fill=\"{}\"/>\n<circle cx=\"{cx}\" cy=\"{cy}\" r=\"5\" fill=\"{}\"/>\n<text x=\"{tx}\" y=\"{ty}\" font-size=\"11\" fill=\"{}\">{} {:.1}%</text>\n",
                    p.stat_bg,
                    dot,
                    p.text,
                    escape_markup(&truncate_label(language, 9)),
                    percentage,
                    cx = x + 14,
                    cy = y + 17,
                    tx = x + 24,
                    ty = y + 21,
                ));
            }
        }

        // 作者
        svg.push_str(&format!(
            "<text x=\"24\" y=\"322\" font-size=\"15\" font-weight=\"600\" fill=\"{}\">Repository Author</text>\n",
            p.text
        ));
        svg.push_str(&format!(
            "<rect x=\"24\" y=\"334\" width=\"404\" height=\"72\" rx=\"10\" fill=\"{}\"/>\n",
            p.stat_bg
        ));
        svg.push_str(&initial_disc(60.0, 370.0, 20.0, p.primary, &d.owner.login));
        svg.push_str(&format!(
            "<text x=\"92\" y=\"366\" font-size=\"14\" font-weight=\"600\" fill=\"{}\">{}</text>\n<text x=\"92\" y=\"386\" font-size=\"11\" fill=\"{}\" opacity=\"0.7\">@{}</text>\n",
            p.text,
            escape_markup(d.owner.name.as_deref().unwrap_or(&d.owner.login)),
            p.text,
            escape_markup(&d.owner.login),
        ));

        // 贡献者
        svg.push_str(&format!(
            "<text x=\"472\" y=\"322\" font-size=\"15\" font-weight=\"600\" fill=\"{}\">Top Contributors</text>\n",
            p.text
        ));
        if d.contributors.is_empty() {
            svg.push_str(&format!(
                "<rect x=\"472\" y=\"334\" width=\"404\" height=\"72\" rx=\"10\" fill=\"{}\"/>\n<text x=\"674\" y=\"374\" text-anchor=\"middle\" font-size=\"13\" fill=\"{}\" opacity=\"0.7\">No contributor data</text>\n",
                p.stat_bg, p.text
            ));
        } else if d.contributors.len() > 3 {
            // 金银铜排名徽章
            const BADGE_COLORS: [&str; 3] = ["#EAB308", "#9CA3AF", "#D97706"];
            for (rank, contributor) in d.contributors.iter().take(3).enumerate() {
                let x = 472.0 + rank as f64 * 140.0;
                svg.push_str(&format!(
                    "<rect x=\"{x}\" y=\"334\" width=\"132\" height=\"72\" rx=\"10\" fill=\"{}\"/>\n",
                    p.stat_bg
                ));
                svg.push_str(&initial_disc(x + 26.0, 370.0, 16.0, p.accent, &contributor.login));
                svg.push_str(&format!(
                    "<circle cx=\"{bx}\" cy=\"356\" r=\"7\" fill=\"{}\"/>\n<text x=\"{bx}\" y=\"360\" text-anchor=\"middle\" font-size=\"9\" font-weight=\"bold\" fill=\"white\">{}</text>\n",
                    BADGE_COLORS[rank],
                    rank + 1,
                    bx = x + 38.0,
                ));
                svg.push_str(&format!(
                    "<text x=\"{tx}\" y=\"366\" font-size=\"11\" font-weight=\"600\" fill=\"{}\">{}</text>\n<text x=\"{tx}\" y=\"384\" font-size=\"10\" fill=\"{}\" opacity=\"0.7\">{}</text>\n",
                    p.text,
                    escape_markup(&truncate_label(&contributor.login, 10)),
                    p.text,
                    format_number(contributor.contributions.unwrap_or(0)),
                    tx = x + 52.0,
                ));
            }
        } else {
            let top = &d.contributors[0];
            svg.push_str(&format!(
                "<rect x=\"472\" y=\"334\" width=\"404\" height=\"72\" rx=\"10\" fill=\"{}\"/>\n",
                p.stat_bg
            ));
            svg.push_str(&initial_disc(508.0, 370.0, 20.0, p.accent, &top.login));
            svg.push_str(&format!(
                "<text x=\"540\" y=\"366\" font-size=\"14\" font-weight=\"600\" fill=\"{}\">{}</text>\n<text x=\"540\" y=\"386\" font-size=\"11\" fill=\"{}\" opacity=\"0.7\">{} contributions</text>\n",
                p.text,
                escape_markup(&top.login),
                p.text,
                format_number(top.contributions.unwrap_or(0)),
            ));
        }

        // 底部
        svg.push_str("<text x=\"24\" y=\"462\" font-size=\"13\" font-weight=\"600\" fill=\"white\">Made with repocard-rs</text>\n");
        svg.push_str(
            "<text x=\"24\" y=\"482\" font-size=\"10\" fill=\"white\" opacity=\"0.8\">github.com/sopaco/repocard-rs</text>\n",
        );
        svg.push_str("<text x=\"876\" y=\"458\" text-anchor=\"end\" font-size=\"10\" fill=\"white\" opacity=\"0.8\">Generated on</text>\n");
        svg.push_str(&format!(
            "<text x=\"876\" y=\"478\" text-anchor=\"end\" font-size=\"13\" font-weight=\"600\" fill=\"white\">{}</text>\n",
            format_date(&d.generated_at)
        ));

        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

/// CSS渐变串
fn css_gradient((from, to): (&str, &str)) -> String {
    format!("linear-gradient(135deg, {} 0%, {} 100%)", from, to)
}

/// 远端头像的光栅化替身：着色圆盘 + 大写首字母
fn initial_disc(cx: f64, cy: f64, r: f64, fill: &str, login: &str) -> String {
    let initial = login
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| String::from("?"));
    format!(
        "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"/>\n<text x=\"{cx}\" y=\"{ty}\" text-anchor=\"middle\" font-size=\"{fs}\" font-weight=\"bold\" fill=\"white\">{}</text>\n",
        escape_markup(&initial),
        ty = cy + r * 0.35,
        fs = r,
    )
}

/// 超长标签截断
fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}…", truncated)
    }
}

// Include tests
#[cfg(test)]
mod tests;
