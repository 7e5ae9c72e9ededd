use ai_quiz::app::App;
use ai_quiz::services::{AiQuizProvider, LlmService};
use ai_quiz::utils::logging;
use ai_quiz::{Config, QuizController};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config_path = std::env::var("QUIZ_CONFIG").unwrap_or_else(|_| "quiz.toml".to_string());
    let config = Config::load(&config_path)?;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config.llm_model_name, config.llm_api_key.is_some());

    // 组装服务并运行
    let provider = AiQuizProvider::new(LlmService::new(&config));
    let mut app = App::new(QuizController::new(provider));
    app.run().await?;

    Ok(())
}
