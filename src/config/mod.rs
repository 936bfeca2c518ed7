//! # 配置管理模块
//!
//! 处理应用配置加载与验证

mod app_config;
mod database;

pub use app_config::{AppConfig, LoggingConfig};
pub use database::DatabaseConfig;

use std::env;
use std::path::Path;

use crate::error::{ConfigError, HubError, Result};

/// 覆盖数据库地址的环境变量
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// 按 `RUST_ENV`（默认 dev）加载 `config/config.{env}.toml`
pub fn load_config() -> Result<AppConfig> {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    load_config_from(format!("config/config.{env}.toml"))
}

/// 从指定文件加载配置
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(HubError::config(format!(
            "配置文件不存在: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        HubError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
    })?;

    parse_config(&content, env::var(DATABASE_URL_ENV).ok())
}

/// 解析配置文本，`database_url` 非空时覆盖文件中的数据库地址
pub fn parse_config(content: &str, database_url: Option<String>) -> Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(content).map_err(ConfigError::from)?;

    if let Some(url) = database_url.filter(|url| !url.is_empty()) {
        config.database.url = url;
    }

    validate_config(&config)?;

    Ok(config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.database.url.trim().is_empty() {
        return Err(ConfigError::Invalid("数据库URL不能为空".to_string()).into());
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::Invalid("数据库最大连接数必须大于0".to_string()).into());
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::Invalid("日志级别不能为空".to_string()).into());
    }

    Ok(())
}
