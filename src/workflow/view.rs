//! 界面解析
//!
//! 每次渲染前按固定优先级决定显示哪个界面：
//! 1. 有错误 → 错误界面
//! 2. 正在生成反馈 → 加载界面（固定文案）
//! 3. 否则按当前 `Screen` 显示

use crate::models::Screen;
use crate::services::feedback::percentage;

/// 生成反馈时加载界面的文案
pub const FEEDBACK_LOADING_LABEL: &str = "Generating your personalized feedback";

/// 结果界面在没有反馈时显示的文案
pub const DEFAULT_RESULTS_FEEDBACK: &str = "Great job completing the quiz!";

/// 实际要渲染的界面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Error(&'a str),
    LoadingFeedback,
    Named(Screen),
}

impl View<'_> {
    /// 加载界面的文案；生成题目时显示主题，生成反馈时显示固定文案
    pub fn loading_label<'t>(&self, topic: &'t str) -> Option<&'t str> {
        match self {
            View::LoadingFeedback => Some(FEEDBACK_LOADING_LABEL),
            View::Named(Screen::Loading) => Some(topic),
            _ => None,
        }
    }
}

/// 按优先级解析界面
pub fn resolve_view(error: Option<&str>, is_loading_feedback: bool, screen: Screen) -> View<'_> {
    if let Some(message) = error {
        return View::Error(message);
    }
    if is_loading_feedback {
        return View::LoadingFeedback;
    }
    View::Named(screen)
}

/// 结果界面数据
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSummary<'a> {
    pub score: usize,
    pub total: usize,
    /// 四舍五入后的百分比
    pub percentage: u32,
    pub topic: &'a str,
    pub feedback: &'a str,
}

impl<'a> ResultsSummary<'a> {
    pub fn new(score: usize, total: usize, topic: &'a str, feedback: Option<&'a str>) -> Self {
        Self {
            score,
            total,
            percentage: percentage(score, total).round() as u32,
            topic,
            feedback: feedback.unwrap_or(DEFAULT_RESULTS_FEEDBACK),
        }
    }
}
