//! 测验反馈文案
//!
//! 按得分百分比分档，结果只取决于输入

/// 得分百分比（0-100），题目总数为 0 时返回 0
pub fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    score as f64 * 100.0 / total as f64
}

/// 反馈档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// >= 90%
    Outstanding,
    /// >= 70%
    Great,
    /// >= 50%
    Good,
    KeepPracticing,
}

impl FeedbackTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            FeedbackTier::Outstanding
        } else if percentage >= 70.0 {
            FeedbackTier::Great
        } else if percentage >= 50.0 {
            FeedbackTier::Good
        } else {
            FeedbackTier::KeepPracticing
        }
    }
}

/// 生成测验反馈
pub fn feedback_for(score: usize, total: usize, topic: &str) -> String {
    match FeedbackTier::from_percentage(percentage(score, total)) {
        FeedbackTier::Outstanding => {
            format!("Outstanding performance! You scored {}/{} on {}.", score, total, topic)
        }
        FeedbackTier::Great => format!("Great job! You scored {}/{} on {}.", score, total, topic),
        FeedbackTier::Good => format!("Good effort! You scored {}/{} on {}.", score, total, topic),
        FeedbackTier::KeepPracticing => format!(
            "You scored {}/{} on {}. Keep practicing and you’ll improve quickly!",
            score, total, topic
        ),
    }
}

/// 反馈生成失败时由控制器使用的文案
pub fn completion_fallback(score: usize, total: usize) -> String {
    let pct = percentage(score, total);
    let mut text = format!(
        "You completed the quiz with a score of {}/{} ({}%).",
        score,
        total,
        pct.round() as u32
    );

    if pct >= 80.0 {
        text.push_str(" Excellent work!");
    } else if pct >= 60.0 {
        text.push_str(" Good job!");
    } else {
        text.push_str(" Keep practicing to improve your score.");
    }
    text
}
