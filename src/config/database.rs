//! # 数据库配置

use std::path::Path;
use std::time::Duration;

use sea_orm::ConnectOptions;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HubError, Result};

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库URL
    pub url: String,
    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_connect_timeout() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./data/dev.db?mode=rwc".to_string(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// 确保数据库路径存在（仅对SQLite文件数据库）
    pub fn ensure_database_path(&self) -> Result<()> {
        let Some(path) = self.sqlite_file_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    HubError::config_with_source(
                        format!("无法创建数据库目录: {}", parent.display()),
                        e,
                    )
                })?;
                info!("创建数据库目录: {}", parent.display());
            }
        }

        Ok(())
    }

    /// SQLite 文件路径，去掉 scheme 与查询参数
    #[must_use]
    pub fn sqlite_file_path(&self) -> Option<&Path> {
        if !self.is_sqlite() || self.is_memory_database() {
            return None;
        }
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let file = rest.split('?').next().unwrap_or(rest);
        (!file.is_empty()).then(|| Path::new(file))
    }

    /// 检查是否为内存数据库
    #[must_use]
    pub fn is_memory_database(&self) -> bool {
        self.url.contains(":memory:")
    }

    /// 检查是否为SQLite数据库
    #[must_use]
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// sea-orm 连接参数
    #[must_use]
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .sqlx_logging(false);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            with_url("sqlite://./data/dev.db?mode=rwc").sqlite_file_path(),
            Some(Path::new("./data/dev.db"))
        );
        assert_eq!(with_url("sqlite::memory:").sqlite_file_path(), None);
        assert_eq!(with_url("postgres://localhost/hub").sqlite_file_path(), None);
    }

    #[test]
    fn test_ensure_database_path_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db_file = dir.path().join("nested").join("hub.db");
        let config = with_url(&format!("sqlite://{}?mode=rwc", db_file.display()));

        config.ensure_database_path().unwrap();
        assert!(db_file.parent().unwrap().exists());
    }
}
