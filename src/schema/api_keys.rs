//! # API 密钥载荷
//!
//! 明文密钥与哈希由存储层生成，载荷只描述名称、过期时间与限流。

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Validate, limits, rules};
use crate::error::ValidationError;

/// 创建 API 密钥请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyCreate {
    pub name: String,
    #[serde(default)]
    pub expires_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub rate_limit_per_hour: Option<i32>,
    #[serde(default)]
    pub rate_limit_per_day: Option<i32>,
}

impl ApiKeyCreate {
    /// 仅指定名称，不过期且不限流
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expires_at: None,
            rate_limit_per_hour: None,
            rate_limit_per_day: None,
        }
    }
}

impl Validate for ApiKeyCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::max_len("name", &self.name, limits::NAME_MAX)?;
        check_rate_limits(self.rate_limit_per_hour, self.rate_limit_per_day)
    }
}

/// 更新 API 密钥请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyUpdate {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub expires_at: Option<NaiveDateTime>,
    pub rate_limit_per_hour: Option<i32>,
    pub rate_limit_per_day: Option<i32>,
}

impl ApiKeyUpdate {
    /// 所有字段均未设置
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.is_active.is_none()
            && self.expires_at.is_none()
            && self.rate_limit_per_hour.is_none()
            && self.rate_limit_per_day.is_none()
    }
}

impl Validate for ApiKeyUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::optional(self.name.as_deref(), |v| {
            rules::max_len("name", v, limits::NAME_MAX)
        })?;
        check_rate_limits(self.rate_limit_per_hour, self.rate_limit_per_day)
    }
}

fn check_rate_limits(per_hour: Option<i32>, per_day: Option<i32>) -> Result<(), ValidationError> {
    let min = f64::from(limits::RATE_LIMIT_MIN);
    rules::optional(per_hour, |v| {
        rules::at_least("rate_limit_per_hour", f64::from(v), min)
    })?;
    rules::optional(per_day, |v| {
        rules::at_least("rate_limit_per_day", f64::from(v), min)
    })
}
