/// 内置主题
///
/// 对应主题选择界面上的四个选项，同时也是兜底题库的键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Wellness,
    Tech,
    Science,
    History,
}

impl Topic {
    /// 全部内置主题（按界面显示顺序）
    pub const ALL: [Topic; 4] = [Topic::Wellness, Topic::Tech, Topic::Science, Topic::History];

    /// 主题标识
    pub fn id(self) -> &'static str {
        match self {
            Topic::Wellness => "wellness",
            Topic::Tech => "tech",
            Topic::Science => "science",
            Topic::History => "history",
        }
    }

    /// 显示名称
    pub fn name(self) -> &'static str {
        match self {
            Topic::Wellness => "Wellness & Health",
            Topic::Tech => "Tech Trends",
            Topic::Science => "Science",
            Topic::History => "History",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Topic::Wellness => "Test your knowledge about mental and physical health",
            Topic::Tech => "Explore the latest in technology and innovation",
            Topic::Science => "Discover fascinating facts about the natural world",
            Topic::History => "Journey through significant historical events",
        }
    }

    /// 从标识解析主题（忽略大小写和首尾空白）
    pub fn from_id(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.id() == s)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
