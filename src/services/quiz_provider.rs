//! 题目与反馈生成 - 业务能力层
//!
//! 核心职责：
//! 1. 让 LLM 生成 5 道单选题，并校验返回格式
//! 2. 任何失败都记录 warn 日志并换成兜底题库，不向调用方抛错
//! 3. 按得分分档生成反馈

use anyhow::Result;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::GenerationError;
use crate::models::{Question, QuestionSource, QUESTION_COUNT};
use crate::services::feedback::feedback_for;
use crate::services::llm_service::TextBackend;
use crate::services::question_bank::QuestionBank;
use crate::utils::logging::truncate_text;

/// 一套生成好的题目及其来源
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuestions {
    pub questions: Vec<Question>,
    pub source: QuestionSource,
}

/// 题目与反馈提供者
///
/// 控制器只通过这两个操作获取内容。
#[allow(async_fn_in_trait)]
pub trait QuizProvider {
    /// 为主题生成一套题目
    async fn generate_questions(&self, topic: &str) -> Result<GeneratedQuestions>;

    /// 根据得分生成反馈
    async fn generate_feedback(&self, score: usize, total: usize, topic: &str) -> Result<String>;
}

/// 基于 LLM 的提供者，失败时使用内置题库
pub struct AiQuizProvider<B> {
    backend: B,
    bank: QuestionBank,
}

impl<B: TextBackend> AiQuizProvider<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            bank: QuestionBank::new(),
        }
    }

    async fn request_questions(&self, topic: &str) -> Result<Vec<Question>> {
        let prompt = build_question_prompt(topic);
        let raw = self.backend.complete(&prompt).await?;
        debug!("LLM 原始返回: {}", truncate_text(&raw, 200));
        Ok(parse_questions(&raw)?)
    }
}

impl<B: TextBackend> QuizProvider for AiQuizProvider<B> {
    async fn generate_questions(&self, topic: &str) -> Result<GeneratedQuestions> {
        match self.request_questions(topic).await {
            Ok(questions) => {
                info!("✓ LLM 生成 {} 道题目 (主题: {})", questions.len(), topic);
                Ok(GeneratedQuestions {
                    questions,
                    source: QuestionSource::Generated,
                })
            }
            Err(e) => {
                warn!("⚠️ LLM 生成题目失败，使用内置题库 (主题: {}): {:#}", topic, e);
                Ok(GeneratedQuestions {
                    questions: self.bank.fallback_questions(topic),
                    source: QuestionSource::Fallback,
                })
            }
        }
    }

    async fn generate_feedback(&self, score: usize, total: usize, topic: &str) -> Result<String> {
        Ok(feedback_for(score, total, topic))
    }
}

/// 构建题目生成提示词
pub fn build_question_prompt(topic: &str) -> String {
    format!(
        r#"Generate {count} multiple-choice quiz questions on the topic: "{topic}".
Each question should be JSON with:
- id (1–{count}),
- question (string),
- options (array of 4 strings),
- correctAnswer (index of the correct option, 0-based).
Return ONLY valid JSON: an array of {count} question objects."#,
        count = QUESTION_COUNT,
        topic = topic
    )
}

/// 解析并校验 LLM 返回的题目
///
/// 允许外层包裹 ```json 代码块；题号按顺序重新编为 1-5。
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, GenerationError> {
    let payload = strip_code_fence(raw);
    let mut questions: Vec<Question> = serde_json::from_str(payload)?;

    if questions.len() != QUESTION_COUNT {
        return Err(GenerationError::InvalidShape {
            expected: QUESTION_COUNT,
            actual: questions.len(),
        });
    }

    for (index, question) in questions.iter_mut().enumerate() {
        question
            .validate()
            .map_err(|reason| GenerationError::InvalidQuestion {
                position: index + 1,
                reason,
            })?;
        question.id = (index + 1) as u8;
        question.user_answer = None;
    }

    Ok(questions)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Ok(re) = Regex::new(r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$") else {
        return trimmed;
    };
    re.captures(trimmed)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Topic;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 固定返回的后端
    struct FixedBackend {
        response: Result<String, String>,
        calls: AtomicUsize,
    }

    impl FixedBackend {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                response: Err(msg.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextBackend for FixedBackend {
        async fn complete(&self, prompt: &str) -> Result<String> {
            assert!(prompt.contains("multiple-choice"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(anyhow::anyhow!(msg.clone())),
            }
        }
    }

    fn question_json(id: usize, correct: usize) -> String {
        format!(
            r#"{{"id":{id},"question":"Generated question {id}?","options":["A","B","C","D"],"correctAnswer":{correct}}}"#
        )
    }

    fn questions_json(count: usize) -> String {
        let items: Vec<String> = (1..=count).map(|id| question_json(id, id % 4)).collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_prompt_mentions_topic_and_shape() {
        let prompt = build_question_prompt("volcanoes");
        assert!(prompt.contains("\"volcanoes\""));
        assert!(prompt.contains("Generate 5 multiple-choice"));
        assert!(prompt.contains("correctAnswer"));
        assert!(prompt.contains("ONLY valid JSON"));
    }

    #[test]
    fn test_parse_valid_questions() {
        let questions = parse_questions(&questions_json(5)).unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[2].question, "Generated question 3?");
        assert_eq!(questions[2].correct_answer, 3);
    }

    #[test]
    fn test_parse_strips_code_fence() {
        let raw = format!("```json\n{}\n```", questions_json(5));
        assert_eq!(parse_questions(&raw).unwrap().len(), 5);
    }

    #[test]
    fn test_parse_renumbers_ids() {
        let items: Vec<String> = (0..5).map(|i| question_json(i, 0)).collect();
        let questions = parse_questions(&format!("[{}]", items.join(","))).unwrap();
        let ids: Vec<u8> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let err = parse_questions(&questions_json(4)).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidShape {
                expected: 5,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_questions(r#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidJson(_)));

        let err = parse_questions("Sure! Here are your questions.").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_rejects_answer_out_of_range() {
        let mut items: Vec<String> = (1..=5).map(|id| question_json(id, 0)).collect();
        items[3] = question_json(4, 4);
        let err = parse_questions(&format!("[{}]", items.join(","))).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidQuestion { position: 4, .. }));
    }

    #[tokio::test]
    async fn test_generate_uses_backend_result() {
        let provider = AiQuizProvider::new(FixedBackend::ok(&questions_json(5)));
        let generated = provider.generate_questions("volcanoes").await.unwrap();

        assert_eq!(generated.source, QuestionSource::Generated);
        assert_eq!(generated.questions.len(), 5);
        assert_eq!(provider.backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_backend_error() {
        let provider = AiQuizProvider::new(FixedBackend::failing("connection refused"));
        let generated = provider.generate_questions("science").await.unwrap();

        assert_eq!(generated.source, QuestionSource::Fallback);
        assert_eq!(generated.questions, QuestionBank::new().questions_for(Topic::Science));
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_bad_shape() {
        let provider = AiQuizProvider::new(FixedBackend::ok(&questions_json(3)));
        let generated = provider.generate_questions("History").await.unwrap();

        assert_eq!(generated.source, QuestionSource::Fallback);
        assert_eq!(generated.questions, QuestionBank::new().questions_for(Topic::History));
    }

    #[tokio::test]
    async fn test_generate_unknown_topic_falls_back_to_wellness() {
        let provider = AiQuizProvider::new(FixedBackend::ok("not json at all"));
        let generated = provider.generate_questions("medieval cooking").await.unwrap();

        assert_eq!(generated.questions, QuestionBank::new().questions_for(Topic::Wellness));
    }

    #[tokio::test]
    async fn test_generated_questions_always_well_formed() {
        let backends = vec![
            FixedBackend::ok(&questions_json(5)),
            FixedBackend::ok(&questions_json(6)),
            FixedBackend::ok("[]"),
            FixedBackend::failing("timeout"),
        ];
        for backend in backends {
            let provider = AiQuizProvider::new(backend);
            for topic in ["wellness", "tech", "science", "history", "anything"] {
                let generated = provider.generate_questions(topic).await.unwrap();
                assert_eq!(generated.questions.len(), 5);
                for q in &generated.questions {
                    assert_eq!(q.options.len(), 4);
                    assert!(q.correct_answer < 4);
                    assert!(q.user_answer.is_none());
                }
            }
        }
    }

    #[tokio::test]
    async fn test_generate_feedback_never_calls_backend() {
        let provider = AiQuizProvider::new(FixedBackend::failing("offline"));
        let feedback = provider.generate_feedback(5, 5, "science").await.unwrap();

        assert_eq!(feedback, "Outstanding performance! You scored 5/5 on science.");
        assert_eq!(provider.backend.calls.load(Ordering::SeqCst), 0);
    }
}
