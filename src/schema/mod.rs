//! # 数据模型与校验层
//!
//! 创建/更新请求载荷及其字段约束。载荷在写入存储前必须通过 [`Validate`]。
//! 更新类载荷的所有字段均为可选，未设置表示保持原值。

pub mod agents;
pub mod ai_services;
pub mod api_keys;
pub mod enums;
pub mod rules;
pub mod service_configs;
pub mod sessions;
pub mod users;

pub use agents::{AgentCreate, AgentUpdate};
pub use ai_services::{AiServiceCreate, AiServiceUpdate};
pub use api_keys::{ApiKeyCreate, ApiKeyUpdate};
pub use enums::{AgentStatus, ServiceType, TestSessionStatus};
pub use service_configs::{ServiceConfigCreate, ServiceConfigUpdate};
pub use sessions::{ConversationEntry, TestSessionCreate};
pub use users::{UserCreate, UserUpdate};

use crate::error::ValidationError;

/// 字段级校验，返回第一个违反约束的字段
pub trait Validate {
    /// 校验全部字段，失败时返回第一个违反约束的字段
    fn validate(&self) -> Result<(), ValidationError>;
}

/// 字段长度与数值边界，均为闭区间
pub mod limits {
    /// 邮箱最大字符数
    pub const EMAIL_MAX: usize = 255;
    /// 用户名最大字符数
    pub const USERNAME_MAX: usize = 50;
    /// 姓名最大字符数
    pub const FULL_NAME_MAX: usize = 100;
    /// 密码最小字符数
    pub const PASSWORD_MIN: usize = 8;
    /// 密码最大字符数
    pub const PASSWORD_MAX: usize = 100;

    /// 智能体、服务、密钥名称最大字符数
    pub const NAME_MAX: usize = 100;
    /// 服务提供商名称最大字符数
    pub const PROVIDER_MAX: usize = 100;
    /// 描述最大字符数
    pub const DESCRIPTION_MAX: usize = 500;
    /// 系统提示词最大字符数
    pub const SYSTEM_MESSAGE_MAX: usize = 2000;

    /// 音调区间
    pub const VOICE_PITCH: (f64, f64) = (0.1, 2.0);
    /// 语速区间
    pub const VOICE_SPEED: (f64, f64) = (0.1, 3.0);
    /// 音量区间
    pub const VOICE_VOLUME: (f64, f64) = (0.1, 2.0);
    /// 响应超时区间（秒）
    pub const RESPONSE_TIMEOUT: (i32, i32) = (5, 300);
    /// 单次会话最大轮数区间
    pub const MAX_CONVERSATION_LENGTH: (i32, i32) = (1, 1000);

    /// 限流下限
    pub const RATE_LIMIT_MIN: i32 = 1;
    /// 密钥展示前缀最大字符数
    pub const KEY_PREVIEW_MAX: usize = 20;

    /// 用户输入最大字符数
    pub const USER_INPUT_MAX: usize = 2000;
    /// 智能体回复最大字符数
    pub const AGENT_RESPONSE_MAX: usize = 5000;
    /// 错误信息最大字符数
    pub const ERROR_MESSAGE_MAX: usize = 1000;
}
