//! # 智能体服务配置载荷

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Validate, rules};
use crate::error::ValidationError;

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// 为智能体绑定 AI 服务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfigCreate {
    pub service_id: i32,
    #[serde(default = "empty_object")]
    pub config: Value,
    #[serde(default)]
    pub is_primary: bool,
}

impl ServiceConfigCreate {
    /// 空配置、非主配置的绑定
    #[must_use]
    pub fn for_service(service_id: i32) -> Self {
        Self {
            service_id,
            config: empty_object(),
            is_primary: false,
        }
    }
}

impl Validate for ServiceConfigCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::json_object("config", &self.config)
    }
}

/// 更新服务绑定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfigUpdate {
    pub config: Option<Value>,
    pub is_primary: Option<bool>,
}

impl ServiceConfigUpdate {
    /// 所有字段均未设置
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.config.is_none() && self.is_primary.is_none()
    }
}

impl Validate for ServiceConfigUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::optional(self.config.as_ref(), |v| rules::json_object("config", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let create: ServiceConfigCreate = serde_json::from_value(json!({"service_id": 3})).unwrap();
        assert_eq!(create, ServiceConfigCreate::for_service(3));
        assert!(!create.is_primary);
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_config_must_be_object() {
        let create = ServiceConfigCreate {
            config: json!(42),
            ..ServiceConfigCreate::for_service(1)
        };
        assert_eq!(create.validate().unwrap_err().field, "config");
    }
}
