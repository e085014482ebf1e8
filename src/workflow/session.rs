use crate::types::RepoCardData;

/// 生成按钮的三态
///
/// Initial -> Generating -> Generated；抓取失败回到Initial，
/// 修改URL也回到Initial并丢弃已生成的数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Initial,
    Generating,
    Generated,
}

impl ButtonState {
    /// 按钮文案
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Initial => "Generate Report Card",
            ButtonState::Generating => "Generating...",
            ButtonState::Generated => "Generated ✓",
        }
    }
}

/// 一次生成会话：URL、按钮状态、卡片数据与下载门闩
#[derive(Debug, Default)]
pub struct CardSession {
    url: String,
    state: ButtonState,
    data: Option<RepoCardData>,
    is_downloading: bool,
}

impl CardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn data(&self) -> Option<&RepoCardData> {
        self.data.as_ref()
    }

    pub fn is_downloading(&self) -> bool {
        self.is_downloading
    }

    /// 修改URL。非Initial状态下的修改会重置会话并丢弃旧数据
    pub fn set_url(&mut self, url: &str) {
        if self.state != ButtonState::Initial {
            self.state = ButtonState::Initial;
            self.data = None;
        }
        self.url = url.to_string();
    }

    /// 进入生成中。仅Initial状态可触发，重复点击无效
    pub fn begin_generate(&mut self) -> bool {
        if self.state != ButtonState::Initial || self.is_downloading {
            return false;
        }
        self.state = ButtonState::Generating;
        true
    }

    /// 抓取成功，持有卡片数据
    pub fn complete(&mut self, data: RepoCardData) {
        self.state = ButtonState::Generated;
        self.data = Some(data);
    }

    /// 抓取失败，回到初始态且不保留半成品数据
    pub fn fail(&mut self) {
        self.state = ButtonState::Initial;
        self.data = None;
    }

    /// 进入下载中。要求已生成且当前没有进行中的下载
    pub fn begin_download(&mut self) -> bool {
        if self.state != ButtonState::Generated || self.is_downloading || self.data.is_none() {
            return false;
        }
        self.is_downloading = true;
        true
    }

    /// 下载结束，无论成败都释放门闩
    pub fn finish_download(&mut self) {
        self.is_downloading = false;
    }

    /// 整体复位
    pub fn reset(&mut self) {
        self.state = ButtonState::Initial;
        self.data = None;
        self.is_downloading = false;
    }
}
