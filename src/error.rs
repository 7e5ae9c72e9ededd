use thiserror::Error;

use crate::models::Screen;

/// 测验控制器错误
///
/// 只表示调用方违反了操作的前置条件，出现时控制器状态保持不变。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// 当前界面不允许该操作
    #[error("当前界面 {actual} 不允许该操作，需要 {expected}")]
    WrongScreen { expected: Screen, actual: Screen },
    /// 没有当前题目（题目列表为空）
    #[error("当前没有可作答的题目")]
    NoCurrentQuestion,
    /// 答案索引超出选项范围
    #[error("答案索引 {index} 超出范围 [0, {option_count})")]
    AnswerOutOfRange { index: usize, option_count: usize },
    /// 当前题目尚未作答
    #[error("当前题目尚未作答，不能进入下一题")]
    NotAnswered,
}

/// 题目生成错误
///
/// 这些错误都会被 `AiQuizProvider` 吸收并替换成兜底题库，调用方不会看到。
#[derive(Debug, Error)]
pub enum GenerationError {
    /// 没有配置 API 密钥
    #[error("未配置 LLM API 密钥")]
    MissingApiKey,
    /// API 调用失败
    #[error("LLM API 调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回内容为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 返回内容不是合法 JSON
    #[error("LLM 返回内容无法解析为 JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// 题目数量不对
    #[error("LLM 返回 {actual} 道题目，需要 {expected} 道")]
    InvalidShape { expected: usize, actual: usize },
    /// 单道题目不满足约束
    #[error("第 {position} 道题目不合法: {reason}")]
    InvalidQuestion { position: usize, reason: String },
}

impl GenerationError {
    /// 创建 LLM API 调用错误
    pub fn api_call_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        GenerationError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }
}

/// 控制器操作结果类型
pub type AppResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_error_display() {
        let err = QuizError::AnswerOutOfRange {
            index: 7,
            option_count: 4,
        };
        assert_eq!(err.to_string(), "答案索引 7 超出范围 [0, 4)");

        let err = QuizError::WrongScreen {
            expected: Screen::Quiz,
            actual: Screen::Results,
        };
        assert!(err.to_string().contains("results"));
    }

    #[test]
    fn test_generation_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: GenerationError = json_err.into();
        assert!(matches!(err, GenerationError::InvalidJson(_)));
    }
}
