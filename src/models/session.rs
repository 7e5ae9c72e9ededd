use serde::Serialize;

use super::question::{count_correct, Question};

/// 题目来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    /// LLM 生成
    Generated,
    /// 内置兜底题库
    Fallback,
}

/// 一次测验的全部状态
///
/// `score` 只有在 `is_completed` 为 `true` 之后才有意义。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizSession {
    pub topic: String,
    pub questions: Vec<Question>,
    pub current_question_index: usize,
    pub score: usize,
    pub is_completed: bool,
    pub feedback: Option<String>,
    /// 题目来源，题目加载之前为 `None`
    pub question_source: Option<QuestionSource>,
}

impl QuizSession {
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_mut(&mut self) -> Option<&mut Question> {
        self.questions.get_mut(self.current_question_index)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    /// 完成测验：计算得分并标记完成，返回得分
    pub fn complete(&mut self) -> usize {
        self.score = count_correct(&self.questions);
        self.is_completed = true;
        self.score
    }

    /// 重新作答：清空答案和进度，保留主题和题目
    pub fn reset_progress(&mut self) {
        for question in &mut self.questions {
            question.user_answer = None;
        }
        self.current_question_index = 0;
        self.score = 0;
        self.is_completed = false;
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u8, correct: usize) -> Question {
        Question::new(
            id,
            format!("Q{}", id),
            ["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        )
    }

    fn session() -> QuizSession {
        QuizSession {
            topic: "science".to_string(),
            questions: (1..=5).map(|id| question(id, 1)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_last_question() {
        let mut s = session();
        assert!(!s.is_last_question());
        s.current_question_index = 4;
        assert!(s.is_last_question());
    }

    #[test]
    fn test_complete_counts_correct_answers() {
        let mut s = session();
        for (i, q) in s.questions.iter_mut().enumerate() {
            q.user_answer = Some(if i < 3 { 1 } else { 0 });
        }
        assert_eq!(s.complete(), 3);
        assert_eq!(s.score, 3);
        assert!(s.is_completed);
    }

    #[test]
    fn test_reset_progress_keeps_questions() {
        let mut s = session();
        s.questions[0].user_answer = Some(1);
        s.current_question_index = 4;
        s.complete();
        s.feedback = Some("nice".to_string());

        s.reset_progress();

        assert_eq!(s.topic, "science");
        assert_eq!(s.total(), 5);
        assert!(s.questions.iter().all(|q| q.user_answer.is_none()));
        assert_eq!(s.current_question_index, 0);
        assert_eq!(s.score, 0);
        assert!(!s.is_completed);
        assert!(s.feedback.is_none());
    }
}
