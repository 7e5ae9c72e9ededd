pub mod feedback;
pub mod llm_service;
pub mod question_bank;
pub mod quiz_provider;

pub use llm_service::{LlmService, TextBackend};
pub use question_bank::QuestionBank;
pub use quiz_provider::{AiQuizProvider, GeneratedQuestions, QuizProvider};
