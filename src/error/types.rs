//! # 错误类型定义

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use super::{ConfigError, ErrorCategory, ValidationError};

/// 应用主要错误类型
#[derive(Debug, Error)]
pub enum HubError {
    /// 字段校验失败
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),

    /// 唯一字段重复
    #[error("唯一性冲突: {entity}.{field} = {value}")]
    UniquenessConflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// 外键指向的记录不存在
    #[error("引用错误: {entity}.{field} 指向的记录 {id} 不存在")]
    Reference {
        entity: &'static str,
        field: &'static str,
        id: i32,
    },

    /// 按 ID 查找失败
    #[error("记录未找到: {entity} #{id}")]
    NotFound { entity: &'static str, id: i32 },

    /// 数据库相关错误
    #[error("数据库错误: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 配置相关错误
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 系统内部错误
    #[error("内部错误: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl HubError {
    /// 错误分类，用于日志和告警
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_)
            | Self::UniquenessConflict { .. }
            | Self::Reference { .. }
            | Self::NotFound { .. } => ErrorCategory::Client,
            Self::Database { .. } | Self::Config { .. } | Self::Internal { .. } => {
                ErrorCategory::Server
            }
        }
    }

    /// 错误码
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UniquenessConflict { .. } => "UNIQUENESS_CONFLICT",
            Self::Reference { .. } => "REFERENCE_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// 为基础设施类错误追加上下文；领域错误本身已携带定位信息，保持不变
    #[must_use]
    pub fn with_context(self, context: impl std::fmt::Display) -> Self {
        match self {
            Self::Database { message, source } => Self::Database {
                message: format!("{context}: {message}"),
                source,
            },
            Self::Config { message, source } => Self::Config {
                message: format!("{context}: {message}"),
                source,
            },
            Self::Internal { message, source } => Self::Internal {
                message: format!("{context}: {message}"),
                source,
            },
            other => other,
        }
    }

    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    pub fn database_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn config<T: Into<String>>(message: T) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub const fn reference(entity: &'static str, field: &'static str, id: i32) -> Self {
        Self::Reference { entity, field, id }
    }

    pub fn conflict(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::UniquenessConflict {
            entity,
            field,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::UniquenessConflict { .. })
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// 返回校验失败的字段名
    #[must_use]
    pub const fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.field),
            _ => None,
        }
    }
}

impl From<DbErr> for HubError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(message) => Self::Database {
                message: format!("记录不存在: {message}"),
                source: None,
            },
            other => {
                let message = match other.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(detail)) => {
                        format!("违反唯一约束: {detail}")
                    }
                    Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                        format!("违反外键约束: {detail}")
                    }
                    _ => other.to_string(),
                };
                Self::database_with_source(message, other)
            }
        }
    }
}

impl From<ConfigError> for HubError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        Self::internal_with_source("IO操作失败", err)
    }
}

impl From<bcrypt::BcryptError> for HubError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal_with_source("密码哈希失败", err)
    }
}
