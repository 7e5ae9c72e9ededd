//! 测验控制器 - 流程层
//!
//! 核心职责：持有整个测验的状态，决定当前界面
//!
//! 界面流转：
//! ```text
//! TopicSelection ──select_topic──▶ Loading ──成功──▶ Quiz ──最后一题 next──▶ Results
//!       ▲                            │                 ▲                      │
//!       │                           失败               └──────restart─────────┤
//!       │                            ▼                                        │
//!       └──────new_topic─────── Error (retry 重新选择同一主题) ◀──────────────┘
//! ```
//!
//! 只在两处调用提供者：生成题目、生成反馈。

use tracing::{debug, error, info, warn};

use crate::error::{AppResult, QuizError};
use crate::models::{Question, QuizSession, Screen, OPTION_COUNT};
use crate::services::feedback::completion_fallback;
use crate::services::QuizProvider;
use crate::utils::logging::log_quiz_complete;
use crate::workflow::view::{resolve_view, ResultsSummary, View};

/// 生成题目失败时显示给用户的错误信息
pub const GENERATION_ERROR_MESSAGE: &str = "Failed to generate questions. Please try again.";

/// 测验控制器
///
/// - 是会话状态唯一的读写者，所有修改都经过下面的操作
/// - 操作都需要 `&mut self`，同一时间最多只有一个进行中的提供者调用
pub struct QuizController<P> {
    provider: P,
    screen: Screen,
    session: QuizSession,
    is_loading_feedback: bool,
    error: Option<String>,
}

impl<P: QuizProvider> QuizController<P> {
    /// 创建新的控制器，初始界面为主题选择
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            screen: Screen::TopicSelection,
            session: QuizSession::default(),
            is_loading_feedback: false,
            error: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading_feedback(&self) -> bool {
        self.is_loading_feedback
    }

    /// 当前应渲染的界面
    pub fn view(&self) -> View<'_> {
        resolve_view(self.error.as_deref(), self.is_loading_feedback, self.screen)
    }

    // ========== 操作 ==========

    /// 选择主题并生成题目
    ///
    /// 成功进入答题界面；失败回到主题选择并设置错误信息。
    pub async fn select_topic(&mut self, topic: impl Into<String>) {
        let topic = topic.into();
        info!("📚 选择主题: {}", topic);

        self.screen = Screen::Loading;
        self.error = None;
        self.session = QuizSession {
            topic,
            ..QuizSession::default()
        };

        match self.provider.generate_questions(&self.session.topic).await {
            Ok(generated) => {
                info!(
                    "✓ 题目已就绪: {} 道 (来源: {:?})",
                    generated.questions.len(),
                    generated.source
                );
                self.session.questions = generated.questions;
                self.session.question_source = Some(generated.source);
                self.screen = Screen::Quiz;
            }
            Err(e) => {
                error!("❌ 生成题目失败 (主题: {}): {:#}", self.session.topic, e);
                self.error = Some(GENERATION_ERROR_MESSAGE.to_string());
                self.screen = Screen::TopicSelection;
            }
        }
    }

    /// 回答当前题目（可以覆盖之前的答案）
    pub fn answer(&mut self, index: usize) -> AppResult<()> {
        self.expect_screen(Screen::Quiz)?;
        if index >= OPTION_COUNT {
            return Err(QuizError::AnswerOutOfRange {
                index,
                option_count: OPTION_COUNT,
            });
        }

        let question = self
            .session
            .current_question_mut()
            .ok_or(QuizError::NoCurrentQuestion)?;
        question.user_answer = Some(index);
        debug!("题目 {} 作答: {}", question.id, index);
        Ok(())
    }

    /// 下一题；在最后一题时完成测验并生成反馈
    pub async fn next(&mut self) -> AppResult<()> {
        self.expect_screen(Screen::Quiz)?;
        let question = self
            .session
            .current_question()
            .ok_or(QuizError::NoCurrentQuestion)?;
        if !question.is_answered() {
            return Err(QuizError::NotAnswered);
        }

        if !self.session.is_last_question() {
            self.session.current_question_index += 1;
            debug!("进入第 {} 题", self.session.current_question_index + 1);
            return Ok(());
        }

        self.finish().await;
        Ok(())
    }

    /// 上一题；已经是第一题时不做任何事
    pub fn previous(&mut self) {
        if self.session.current_question_index > 0 {
            self.session.current_question_index -= 1;
            debug!("返回第 {} 题", self.session.current_question_index + 1);
        }
    }

    /// 重新作答同一套题目
    pub fn restart(&mut self) {
        info!("🔄 重新开始测验 (主题: {})", self.session.topic);
        self.session.reset_progress();
        self.screen = Screen::Quiz;
    }

    /// 放弃当前会话，回到主题选择
    pub fn new_topic(&mut self) {
        debug!("回到主题选择");
        self.session = QuizSession::default();
        self.screen = Screen::TopicSelection;
        self.error = None;
    }

    /// 出错后重试：有主题就重新生成，否则回到主题选择
    pub async fn retry(&mut self) {
        if self.session.topic.is_empty() {
            self.new_topic();
        } else {
            let topic = self.session.topic.clone();
            self.select_topic(topic).await;
        }
    }

    // ========== 派生值 ==========

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    /// 当前题号（从 1 开始）
    pub fn question_number(&self) -> usize {
        self.session.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.total()
    }

    pub fn has_answered(&self) -> bool {
        self.current_question().is_some_and(Question::is_answered)
    }

    pub fn can_go_next(&self) -> bool {
        self.has_answered()
    }

    pub fn can_go_previous(&self) -> bool {
        self.session.current_question_index > 0
    }

    /// 答题进度百分比
    pub fn progress_percent(&self) -> f64 {
        let total = self.session.total();
        if total == 0 {
            return 0.0;
        }
        (self.session.current_question_index + 1) as f64 * 100.0 / total as f64
    }

    /// 结果界面数据，测验完成前为 `None`
    pub fn results(&self) -> Option<ResultsSummary<'_>> {
        if !self.session.is_completed {
            return None;
        }
        Some(ResultsSummary::new(
            self.session.score,
            self.session.total(),
            &self.session.topic,
            self.session.feedback.as_deref(),
        ))
    }

    // ========== 内部方法 ==========

    fn expect_screen(&self, expected: Screen) -> AppResult<()> {
        if self.screen != expected {
            return Err(QuizError::WrongScreen {
                expected,
                actual: self.screen,
            });
        }
        Ok(())
    }

    /// 计算得分、生成反馈并进入结果界面
    async fn finish(&mut self) {
        let score = self.session.complete();
        let total = self.session.total();
        log_quiz_complete(&self.session.topic, score, total);

        let feedback = {
            let _loading = LoadingFlag::raise(&mut self.is_loading_feedback);
            match self
                .provider
                .generate_feedback(score, total, &self.session.topic)
                .await
            {
                Ok(feedback) => feedback,
                Err(e) => {
                    warn!("⚠️ 生成反馈失败，使用默认反馈: {:#}", e);
                    completion_fallback(score, total)
                }
            }
        };

        self.session.feedback = Some(feedback);
        self.screen = Screen::Results;
    }
}

/// 反馈加载标记
///
/// 创建时置为 `true`，离开作用域时（包括 future 被取消）复位为 `false`。
struct LoadingFlag<'a>(&'a mut bool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
