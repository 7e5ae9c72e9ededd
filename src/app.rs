//! 终端界面
//!
//! 把控制器解析出的界面渲染成文本，再把用户输入映射成控制器操作。
//! 这里不直接修改任何测验状态。

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::error::QuizError;
use crate::models::{Screen, Topic};
use crate::services::QuizProvider;
use crate::workflow::{QuizController, View, FEEDBACK_LOADING_LABEL};

/// 用户输入的一条命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// 选项编号（从 1 开始）
    Number(usize),
    Next,
    Previous,
    Retry,
    Topics,
    /// 其他非空输入，在主题选择界面作为自定义主题
    Text(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Command::Empty,
            "q" | "quit" => Command::Quit,
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "r" | "retry" | "restart" => Command::Retry,
            "t" | "topics" => Command::Topics,
            other => match other.parse::<usize>() {
                Ok(n) => Command::Number(n),
                Err(_) => Command::Text(line.to_string()),
            },
        }
    }
}

/// 终端应用
pub struct App<P> {
    controller: QuizController<P>,
}

impl<P: QuizProvider> App<P> {
    pub fn new(controller: QuizController<P>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &QuizController<P> {
        &self.controller
    }

    /// 使用标准输入输出运行
    pub async fn run(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run_with(stdin, &mut stdout).await
    }

    /// 运行主循环，直到输入结束或用户退出
    pub async fn run_with<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            render(&self.controller, out)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                debug!("输入结束，退出");
                break;
            };

            let command = Command::parse(&line);
            if command == Command::Quit {
                break;
            }
            self.dispatch(command, out).await?;
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    async fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        // None 表示错误界面
        let current = match self.controller.view() {
            View::Error(_) => None,
            View::LoadingFeedback => Some(Screen::Loading),
            View::Named(screen) => Some(screen),
        };

        match (current, command) {
            (None, Command::Retry) => {
                writeln!(out, "⏳ Generating questions on {}...", self.controller.session().topic)?;
                self.controller.retry().await;
            }
            (None, Command::Topics) => self.controller.new_topic(),

            (Some(Screen::TopicSelection), Command::Number(n)) => {
                match n.checked_sub(1).and_then(|i| Topic::ALL.get(i).copied()) {
                    Some(topic) => self.start(topic.id(), out).await?,
                    None => writeln!(out, "Please pick a topic between 1 and {}.", Topic::ALL.len())?,
                }
            }
            (Some(Screen::TopicSelection), Command::Text(topic)) => {
                self.start(&topic, out).await?
            }

            (Some(Screen::Quiz), Command::Number(n)) => {
                let result = match n.checked_sub(1) {
                    Some(index) => self.controller.answer(index),
                    None => Err(QuizError::AnswerOutOfRange {
                        index: 0,
                        option_count: crate::models::OPTION_COUNT,
                    }),
                };
                if let Err(e) = result {
                    self.report(&e, out)?;
                }
            }
            (Some(Screen::Quiz), Command::Next) => {
                let finishing = self.controller.can_go_next()
                    && self.controller.session().is_last_question();
                if finishing {
                    writeln!(out, "⏳ {}...", FEEDBACK_LOADING_LABEL)?;
                }
                if let Err(e) = self.controller.next().await {
                    self.report(&e, out)?;
                }
            }
            (Some(Screen::Quiz), Command::Previous) => self.controller.previous(),
            (Some(Screen::Quiz), Command::Topics) => self.controller.new_topic(),

            (Some(Screen::Results), Command::Retry) => self.controller.restart(),
            (Some(Screen::Results), Command::Topics) => self.controller.new_topic(),

            (_, Command::Empty) => {}
            (screen, command) => {
                debug!("忽略命令 {:?} (界面: {:?})", command, screen);
                writeln!(out, "Unknown command.")?;
            }
        }
        Ok(())
    }

    async fn start<W: Write>(&mut self, topic: &str, out: &mut W) -> Result<()> {
        writeln!(out, "⏳ Generating questions on {}...", topic)?;
        self.controller.select_topic(topic).await;
        Ok(())
    }

    fn report<W: Write>(&self, error: &QuizError, out: &mut W) -> Result<()> {
        warn!("操作被拒绝: {}", error);
        let hint = match error {
            QuizError::NotAnswered => "Please choose an answer first.".to_string(),
            QuizError::AnswerOutOfRange { option_count, .. } => {
                format!("Please choose an option between 1 and {}.", option_count)
            }
            QuizError::NoCurrentQuestion | QuizError::WrongScreen { .. } => {
                "That action is not available right now.".to_string()
            }
        };
        writeln!(out, "{}", hint)?;
        Ok(())
    }
}

/// 渲染当前界面
pub fn render<P: QuizProvider, W: Write>(controller: &QuizController<P>, out: &mut W) -> Result<()> {
    let view = controller.view();
    writeln!(out)?;

    match view {
        View::Error(message) => {
            writeln!(out, "⚠️  {}", message)?;
            writeln!(out, "[r] Try again   [t] Back to topics   [q] Quit")?;
        }
        View::LoadingFeedback | View::Named(Screen::Loading) => {
            let label = view.loading_label(&controller.session().topic).unwrap_or_default();
            writeln!(out, "⏳ {}...", label)?;
        }
        View::Named(Screen::TopicSelection) => {
            writeln!(out, "AI-Powered Quiz")?;
            writeln!(out, "Choose a topic:")?;
            for (i, topic) in Topic::ALL.iter().enumerate() {
                writeln!(out, "  {}) {} - {}", i + 1, topic.name(), topic.description())?;
            }
            writeln!(out, "Or type any topic.   [q] Quit")?;
        }
        View::Named(Screen::Quiz) => render_question(controller, out)?,
        View::Named(Screen::Results) => match controller.results() {
            Some(results) => {
                writeln!(out, "Quiz Complete!")?;
                writeln!(out, "{}/{} ({}% Score)", results.score, results.total, results.percentage)?;
                writeln!(out, "Topic: {}", results.topic)?;
                writeln!(out, "Feedback: {}", results.feedback)?;
                writeln!(out, "[r] Retake Quiz   [t] New Topic   [q] Quit")?;
            }
            None => writeln!(out, "No results yet.")?,
        },
    }
    Ok(())
}

fn render_question<P: QuizProvider, W: Write>(controller: &QuizController<P>, out: &mut W) -> Result<()> {
    let Some(question) = controller.current_question() else {
        writeln!(out, "No questions loaded.   [t] Back to topics")?;
        return Ok(());
    };

    writeln!(
        out,
        "Question {} of {} ({:.0}%)",
        controller.question_number(),
        controller.total_questions(),
        controller.progress_percent()
    )?;
    writeln!(out, "{}", question.question)?;
    for (i, option) in question.options.iter().enumerate() {
        let marker = if question.user_answer == Some(i) { "*" } else { " " };
        writeln!(out, " {} {}) {}", marker, i + 1, option)?;
    }

    let mut actions = vec!["[1-4] Answer"];
    if controller.can_go_previous() {
        actions.push("[p] Previous");
    }
    if controller.can_go_next() {
        actions.push(if controller.session().is_last_question() {
            "[n] Finish"
        } else {
            "[n] Next"
        });
    }
    actions.push("[t] Topics");
    writeln!(out, "{}", actions.join("   "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(" q "), Command::Quit);
        assert_eq!(Command::parse("N"), Command::Next);
        assert_eq!(Command::parse("p"), Command::Previous);
        assert_eq!(Command::parse("r"), Command::Retry);
        assert_eq!(Command::parse("t"), Command::Topics);
        assert_eq!(Command::parse("3"), Command::Number(3));
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("Ancient Rome"), Command::Text("Ancient Rome".to_string()));
    }
}
