/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 `info`，开启详细日志时为 `debug`。
/// 重复调用是安全的（测试中会多次调用）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `model`: 使用的模型名称
/// - `has_api_key`: 是否配置了 API 密钥
pub fn log_startup(model: &str, has_api_key: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - AI 测验");
    info!("🤖 模型: {}", model);
    if !has_api_key {
        info!("⚠️ 未配置 API 密钥，题目将使用内置题库");
    }
    info!("{}", "=".repeat(60));
}

/// 记录测验完成统计
///
/// # 参数
/// - `topic`: 主题
/// - `score`: 得分
/// - `total`: 题目总数
pub fn log_quiz_complete(topic: &str, score: usize, total: usize) {
    info!("{}", "─".repeat(60));
    info!("📊 测验完成: 主题 {}", topic);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 得分: {}/{}", score, total);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
