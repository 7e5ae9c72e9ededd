//! # AI Quiz
//!
//! 选择主题，回答 5 道由 LLM 生成（或内置题库兜底）的单选题，最后得到分数和反馈
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - `Question`、`QuizSession`、`Screen`、`Topic`
//!
//! ### ② 业务能力层（Services）
//! - `LlmService` - 调用 LLM 生成文本
//! - `QuestionBank` - 内置兜底题库
//! - `AiQuizProvider` - 生成并校验题目，失败时换成兜底题库；按得分生成反馈
//!
//! ### ③ 流程层（Workflow）
//! - `QuizController` - 界面状态机，持有会话状态
//! - `view` - 按优先级解析当前界面（错误 > 反馈加载 > 当前界面）
//!
//! ### ④ 界面层（App）
//! - `app` - 终端渲染和输入处理，只通过控制器操作修改状态
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppResult, GenerationError, QuizError};
pub use models::{Question, QuestionSource, QuizSession, Screen, Topic};
pub use services::{AiQuizProvider, LlmService, QuizProvider};
pub use workflow::{QuizController, View};
