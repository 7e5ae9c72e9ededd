use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    /// API 密钥，缺失时题目生成直接走兜底题库
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4.1-mini".to_string(),
            llm_temperature: 0.7,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 只从环境变量读取配置
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 先读取 TOML 配置文件（不存在时使用默认值），再用环境变量覆盖
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let base = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
            Self::from_toml_str(&content)
                .with_context(|| format!("无法解析配置文件: {}", path.display()))?
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    /// 解析 TOML 格式的配置内容，缺失的字段取默认值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            llm_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .or(self.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            llm_temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.llm_temperature),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let config = Config::default();
        assert_eq!(config.llm_model_name, "gpt-4.1-mini");
        assert!(config.llm_api_key.is_none());
        assert!((config.llm_temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml_str(
            r#"
            llm_model_name = "gpt-4o-mini"
            verbose_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.llm_model_name, "gpt-4o-mini");
        assert!(config.verbose_logging);
        // 未出现的字段保持默认值
        assert_eq!(config.llm_api_base_url, Config::default().llm_api_base_url);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(Config::from_toml_str("llm_temperature = \"hot\"").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/quiz.toml").unwrap();
        assert!(!config.llm_api_base_url.is_empty());
    }
}
