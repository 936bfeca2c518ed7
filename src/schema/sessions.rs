//! # 测试会话与对话记录载荷

use serde::{Deserialize, Serialize};

use super::{Validate, limits, rules};
use crate::error::ValidationError;

/// 开启测试会话，状态默认为 `active`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSessionCreate {
    pub agent_id: i32,
}

impl Validate for TestSessionCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// 单轮对话记录，耗时单位为毫秒，音频时长单位为秒
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub user_input: String,
    pub agent_response: String,
    pub processing_time: f64,
    #[serde(default)]
    pub tts_processing_time: Option<f64>,
    #[serde(default)]
    pub stt_processing_time: Option<f64>,
    #[serde(default)]
    pub llm_processing_time: Option<f64>,
    #[serde(default)]
    pub audio_input_duration: Option<f64>,
    #[serde(default)]
    pub audio_output_duration: Option<f64>,
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ConversationEntry {
    #[must_use]
    pub fn new(
        user_input: impl Into<String>,
        agent_response: impl Into<String>,
        processing_time: f64,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            agent_response: agent_response.into(),
            processing_time,
            tts_processing_time: None,
            stt_processing_time: None,
            llm_processing_time: None,
            audio_input_duration: None,
            audio_output_duration: None,
            has_error: false,
            error_message: None,
        }
    }

    /// 标记为失败的一轮对话
    #[must_use]
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.has_error = true;
        self.error_message = Some(message.into());
        self
    }
}

impl Validate for ConversationEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::max_len("user_input", &self.user_input, limits::USER_INPUT_MAX)?;
        rules::max_len(
            "agent_response",
            &self.agent_response,
            limits::AGENT_RESPONSE_MAX,
        )?;
        rules::at_least("processing_time", self.processing_time, 0.0)?;

        let durations = [
            ("tts_processing_time", self.tts_processing_time),
            ("stt_processing_time", self.stt_processing_time),
            ("llm_processing_time", self.llm_processing_time),
            ("audio_input_duration", self.audio_input_duration),
            ("audio_output_duration", self.audio_output_duration),
        ];
        for (field, value) in durations {
            rules::optional(value, |v| rules::at_least(field, v, 0.0))?;
        }

        rules::optional(self.error_message.as_deref(), |v| {
            rules::max_len("error_message", v, limits::ERROR_MESSAGE_MAX)
        })
    }
}
