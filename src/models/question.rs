use serde::{Deserialize, Serialize};

/// 每道题的选项数量
pub const OPTION_COUNT: usize = 4;

/// 每套题的题目数量
pub const QUESTION_COUNT: usize = 5;

/// 单选题
///
/// 字段名与生成接口返回的 JSON 保持一致（`correctAnswer` 等）。
/// `user_answer` 只在作答后存在，不参与序列化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 题号（套内 1-5）
    pub id: u8,
    /// 题干
    pub question: String,
    /// 固定 4 个选项
    pub options: [String; OPTION_COUNT],
    /// 正确答案索引（从 0 开始）
    pub correct_answer: usize,
    /// 用户答案索引，未作答时为 `None`
    #[serde(skip)]
    pub user_answer: Option<usize>,
}

impl Question {
    pub fn new(
        id: u8,
        question: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer: usize,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            correct_answer,
            user_answer: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    /// 是否答对（未作答视为答错）
    pub fn is_correct(&self) -> bool {
        self.user_answer == Some(self.correct_answer)
    }

    /// 检查题目本身是否合法，返回不合法的原因
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("题干为空".to_string());
        }
        if let Some(i) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(format!("选项 {} 为空", i));
        }
        if self.correct_answer >= OPTION_COUNT {
            return Err(format!(
                "正确答案索引 {} 超出范围 [0, {})",
                self.correct_answer, OPTION_COUNT
            ));
        }
        Ok(())
    }
}

/// 计算答对的题目数
pub fn count_correct(questions: &[Question]) -> usize {
    questions.iter().filter(|q| q.is_correct()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            1,
            "Which planet is largest?",
            [
                "Saturn".to_string(),
                "Neptune".to_string(),
                "Jupiter".to_string(),
                "Uranus".to_string(),
            ],
            2,
        )
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":3,"question":"Q?","options":["a","b","c","d"],"correctAnswer":1,"userAnswer":2}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 3);
        assert_eq!(q.correct_answer, 1);
        // 生成结果里的 userAnswer 被忽略
        assert_eq!(q.user_answer, None);
    }

    #[test]
    fn test_deserialize_rejects_wrong_option_count() {
        let json = r#"{"id":1,"question":"Q?","options":["a","b","c"],"correctAnswer":0}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn test_is_correct() {
        let mut q = sample();
        assert!(!q.is_answered());
        assert!(!q.is_correct());

        q.user_answer = Some(1);
        assert!(q.is_answered());
        assert!(!q.is_correct());

        q.user_answer = Some(2);
        assert!(q.is_correct());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut q = sample();
        q.correct_answer = 4;
        assert!(q.validate().is_err());

        let mut q = sample();
        q.options[3] = "  ".to_string();
        assert!(q.validate().unwrap_err().contains("选项 3"));
    }

    #[test]
    fn test_count_correct() {
        let mut questions = vec![sample(), sample(), sample()];
        questions[0].user_answer = Some(2);
        questions[1].user_answer = Some(0);
        assert_eq!(count_correct(&questions), 1);
    }
}
