//! # 封闭枚举
//!
//! 服务类型、智能体状态、测试会话状态。数据库中保存小写字符串，
//! 读写边界通过 `as_str` / `FromStr` 转换。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Constraint, ValidationError};

/// AI 服务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// 语音合成
    Tts,
    /// 语音识别
    Stt,
    /// 大语言模型
    Llm,
}

impl ServiceType {
    /// 全部合法取值
    pub const VALUES: &'static [&'static str] = &["tts", "stt", "llm"];

    /// 数据库中保存的字符串形式
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tts => "tts",
            Self::Stt => "stt",
            Self::Llm => "llm",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tts" => Ok(Self::Tts),
            "stt" => Ok(Self::Stt),
            "llm" => Ok(Self::Llm),
            _ => Err(ValidationError::new(
                "service_type",
                Constraint::OneOf(Self::VALUES),
            )),
        }
    }
}

/// 智能体状态，状态之间的切换不受限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Draft,
    Active,
    Inactive,
}

impl AgentStatus {
    /// 全部合法取值
    pub const VALUES: &'static [&'static str] = &["draft", "active", "inactive"];

    /// 数据库中保存的字符串形式
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ValidationError::new("status", Constraint::OneOf(Self::VALUES))),
        }
    }
}

/// 测试会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestSessionStatus {
    #[default]
    Active,
    Completed,
    Failed,
}

impl TestSessionStatus {
    /// 全部合法取值
    pub const VALUES: &'static [&'static str] = &["active", "completed", "failed"];

    /// 数据库中保存的字符串形式
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TestSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestSessionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(ValidationError::new("status", Constraint::OneOf(Self::VALUES))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AgentStatus::default(), AgentStatus::Draft);
        assert_eq!(TestSessionStatus::default(), TestSessionStatus::Active);
    }

    #[test]
    fn test_string_forms_round_trip_through_from_str() {
        for value in ServiceType::VALUES {
            assert_eq!(value.parse::<ServiceType>().unwrap().as_str(), *value);
        }
        for value in AgentStatus::VALUES {
            assert_eq!(value.parse::<AgentStatus>().unwrap().as_str(), *value);
        }
        for value in TestSessionStatus::VALUES {
            assert_eq!(value.parse::<TestSessionStatus>().unwrap().as_str(), *value);
        }
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let err = "tts2".parse::<ServiceType>().unwrap_err();
        assert_eq!(err.field, "service_type");
        assert_eq!(err.constraint, Constraint::OneOf(ServiceType::VALUES));

        assert!("archived".parse::<AgentStatus>().is_err());
        assert!("Active".parse::<TestSessionStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_and_rejects_unknown() {
        assert_eq!(serde_json::to_string(&ServiceType::Llm).unwrap(), "\"llm\"");
        assert_eq!(
            serde_json::from_str::<AgentStatus>("\"inactive\"").unwrap(),
            AgentStatus::Inactive
        );
        assert!(serde_json::from_str::<ServiceType>("\"asr\"").is_err());
    }
}
