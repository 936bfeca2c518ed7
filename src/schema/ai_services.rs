//! # AI 服务目录载荷
//!
//! `service_type` 只在创建时指定，更新载荷中不存在该字段。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ServiceType, Validate, limits, rules};
use crate::error::ValidationError;

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// 创建 AI 服务请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiServiceCreate {
    pub name: String,
    pub service_type: ServiceType,
    pub provider: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "empty_object")]
    pub default_config: Value,
}

impl AiServiceCreate {
    /// 使用空描述与空配置创建
    #[must_use]
    pub fn new(name: impl Into<String>, service_type: ServiceType, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_type,
            provider: provider.into(),
            description: String::new(),
            default_config: empty_object(),
        }
    }
}

impl Validate for AiServiceCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::max_len("name", &self.name, limits::NAME_MAX)?;
        rules::max_len("provider", &self.provider, limits::PROVIDER_MAX)?;
        rules::max_len("description", &self.description, limits::DESCRIPTION_MAX)?;
        rules::json_object("default_config", &self.default_config)
    }
}

/// 更新 AI 服务请求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiServiceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub default_config: Option<Value>,
}

impl AiServiceUpdate {
    /// 所有字段均未设置
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
            && self.default_config.is_none()
    }
}

impl Validate for AiServiceUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::optional(self.name.as_deref(), |v| {
            rules::max_len("name", v, limits::NAME_MAX)
        })?;
        rules::optional(self.description.as_deref(), |v| {
            rules::max_len("description", v, limits::DESCRIPTION_MAX)
        })?;
        rules::optional(self.default_config.as_ref(), |v| {
            rules::json_object("default_config", v)
        })
    }
}
