use serde::{Deserialize, Serialize};

/// 界面
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    TopicSelection,
    Loading,
    Quiz,
    Results,
}

impl Screen {
    pub fn id(self) -> &'static str {
        match self {
            Screen::TopicSelection => "topic-selection",
            Screen::Loading => "loading",
            Screen::Quiz => "quiz",
            Screen::Results => "results",
        }
    }

    /// 从标识解析界面，无法识别的值一律回到主题选择
    pub fn from_id(s: &str) -> Self {
        match s {
            "loading" => Screen::Loading,
            "quiz" => Screen::Quiz,
            "results" => Screen::Results,
            _ => Screen::TopicSelection,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
