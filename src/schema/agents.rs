//! # 智能体载荷
//!
//! 语音参数使用双精度浮点保存，边界均为闭区间：
//! pitch / volume 为 `[0.1, 2.0]`，speed 为 `[0.1, 3.0]`，
//! 响应超时 `[5, 300]` 秒，最大对话轮数 `[1, 1000]`。

use serde::{Deserialize, Serialize};

use super::{AgentStatus, Validate, limits, rules};
use crate::error::ValidationError;

const fn default_voice() -> f64 {
    1.0
}

const fn default_response_timeout() -> i32 {
    30
}

const fn default_max_conversation_length() -> i32 {
    50
}

/// 创建智能体请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub system_message: String,
    #[serde(default = "default_voice")]
    pub voice_pitch: f64,
    #[serde(default = "default_voice")]
    pub voice_speed: f64,
    #[serde(default = "default_voice")]
    pub voice_volume: f64,
    #[serde(default = "default_response_timeout")]
    pub response_timeout: i32,
    #[serde(default = "default_max_conversation_length")]
    pub max_conversation_length: i32,
}

impl AgentCreate {
    /// 使用默认语音参数创建
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            system_message: String::new(),
            voice_pitch: default_voice(),
            voice_speed: default_voice(),
            voice_volume: default_voice(),
            response_timeout: default_response_timeout(),
            max_conversation_length: default_max_conversation_length(),
        }
    }
}

impl Validate for AgentCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::max_len("name", &self.name, limits::NAME_MAX)?;
        rules::max_len("description", &self.description, limits::DESCRIPTION_MAX)?;
        rules::max_len(
            "system_message",
            &self.system_message,
            limits::SYSTEM_MESSAGE_MAX,
        )?;
        check_voice_pitch(self.voice_pitch)?;
        check_voice_speed(self.voice_speed)?;
        check_voice_volume(self.voice_volume)?;
        check_response_timeout(self.response_timeout)?;
        check_max_conversation_length(self.max_conversation_length)
    }
}

/// 更新智能体请求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub system_message: Option<String>,
    pub voice_pitch: Option<f64>,
    pub voice_speed: Option<f64>,
    pub voice_volume: Option<f64>,
    pub response_timeout: Option<i32>,
    pub max_conversation_length: Option<i32>,
    pub status: Option<AgentStatus>,
}

impl AgentUpdate {
    /// 所有字段均未设置
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.system_message.is_none()
            && self.voice_pitch.is_none()
            && self.voice_speed.is_none()
            && self.voice_volume.is_none()
            && self.response_timeout.is_none()
            && self.max_conversation_length.is_none()
            && self.status.is_none()
    }
}

impl Validate for AgentUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::optional(self.name.as_deref(), |v| {
            rules::max_len("name", v, limits::NAME_MAX)
        })?;
        rules::optional(self.description.as_deref(), |v| {
            rules::max_len("description", v, limits::DESCRIPTION_MAX)
        })?;
        rules::optional(self.system_message.as_deref(), |v| {
            rules::max_len("system_message", v, limits::SYSTEM_MESSAGE_MAX)
        })?;
        rules::optional(self.voice_pitch, check_voice_pitch)?;
        rules::optional(self.voice_speed, check_voice_speed)?;
        rules::optional(self.voice_volume, check_voice_volume)?;
        rules::optional(self.response_timeout, check_response_timeout)?;
        rules::optional(self.max_conversation_length, check_max_conversation_length)
    }
}

fn check_voice_pitch(value: f64) -> Result<(), ValidationError> {
    let (min, max) = limits::VOICE_PITCH;
    rules::in_range("voice_pitch", value, min, max)
}

fn check_voice_speed(value: f64) -> Result<(), ValidationError> {
    let (min, max) = limits::VOICE_SPEED;
    rules::in_range("voice_speed", value, min, max)
}

fn check_voice_volume(value: f64) -> Result<(), ValidationError> {
    let (min, max) = limits::VOICE_VOLUME;
    rules::in_range("voice_volume", value, min, max)
}

fn check_response_timeout(value: i32) -> Result<(), ValidationError> {
    let (min, max) = limits::RESPONSE_TIMEOUT;
    rules::in_range(
        "response_timeout",
        f64::from(value),
        f64::from(min),
        f64::from(max),
    )
}

fn check_max_conversation_length(value: i32) -> Result<(), ValidationError> {
    let (min, max) = limits::MAX_CONVERSATION_LENGTH;
    rules::in_range(
        "max_conversation_length",
        f64::from(value),
        f64::from(min),
        f64::from(max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Constraint;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_from_json() {
        let create: AgentCreate = serde_json::from_str(r#"{"name": "前台接待"}"#).unwrap();
        assert_eq!(create, AgentCreate::named("前台接待"));
        assert!((create.voice_pitch - 1.0).abs() < f64::EPSILON);
        assert_eq!(create.response_timeout, 30);
        assert_eq!(create.max_conversation_length, 50);
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_name_is_required() {
        assert!(serde_json::from_str::<AgentCreate>("{}").is_err());
    }

    #[test]
    fn test_voice_pitch_example() {
        let mut create = AgentCreate::named("pitch");
        create.voice_pitch = 2.5;
        assert_eq!(
            create.validate().unwrap_err(),
            ValidationError::new("voice_pitch", Constraint::Range { min: 0.1, max: 2.0 })
        );

        create.voice_pitch = 2.0;
        assert!(create.validate().is_ok());
    }

    #[rstest]
    #[case::timeout_low(|c: &mut AgentCreate| c.response_timeout = 4, "response_timeout")]
    #[case::timeout_high(|c: &mut AgentCreate| c.response_timeout = 301, "response_timeout")]
    #[case::length_zero(|c: &mut AgentCreate| c.max_conversation_length = 0, "max_conversation_length")]
    #[case::length_high(|c: &mut AgentCreate| c.max_conversation_length = 1001, "max_conversation_length")]
    #[case::speed_high(|c: &mut AgentCreate| c.voice_speed = 3.01, "voice_speed")]
    #[case::volume_low(|c: &mut AgentCreate| c.voice_volume = 0.0, "voice_volume")]
    #[case::name_long(|c: &mut AgentCreate| c.name = "n".repeat(101), "name")]
    #[case::system_message_long(|c: &mut AgentCreate| c.system_message = "s".repeat(2001), "system_message")]
    fn test_out_of_bounds_rejected(
        #[case] mutate: fn(&mut AgentCreate),
        #[case] field: &'static str,
    ) {
        let mut create = AgentCreate::named("bounds");
        mutate(&mut create);
        assert_eq!(create.validate().unwrap_err().field, field);
    }

    #[rstest]
    #[case(5, 1)]
    #[case(300, 1000)]
    fn test_integer_bounds_inclusive(#[case] timeout: i32, #[case] length: i32) {
        let mut create = AgentCreate::named("edges");
        create.response_timeout = timeout;
        create.max_conversation_length = length;
        create.voice_speed = 3.0;
        create.voice_volume = 0.1;
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_update_validates_present_fields_and_status() {
        assert!(AgentUpdate::default().validate().is_ok());
        assert!(AgentUpdate::default().is_empty());

        let update: AgentUpdate =
            serde_json::from_str(r#"{"status": "active", "voice_speed": 2.5}"#).unwrap();
        assert_eq!(update.status, Some(AgentStatus::Active));
        assert!(update.validate().is_ok());
        assert!(!update.is_empty());

        assert!(serde_json::from_str::<AgentUpdate>(r#"{"status": "archived"}"#).is_err());

        let bad = AgentUpdate {
            response_timeout: Some(301),
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().field, "response_timeout");
    }

    proptest! {
        #[test]
        fn prop_voice_pitch_accepted_iff_in_range(pitch in -5.0f64..5.0) {
            let mut create = AgentCreate::named("prop");
            create.voice_pitch = pitch;
            prop_assert_eq!(create.validate().is_ok(), (0.1..=2.0).contains(&pitch));
        }

        #[test]
        fn prop_response_timeout_accepted_iff_in_range(timeout in -1000i32..1000) {
            let update = AgentUpdate { response_timeout: Some(timeout), ..Default::default() };
            prop_assert_eq!(update.validate().is_ok(), (5..=300).contains(&timeout));
        }
    }
}
