//! # 对话日志实体定义
//!
//! 测试会话中单轮请求/响应的记录，包含各阶段耗时

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 对话日志实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversation_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub test_session_id: i32,

    /// 会话内序号，从 1 开始
    pub sequence_number: i32,
    pub user_input: String,
    pub agent_response: String,

    // 性能指标（毫秒）
    pub processing_time: f64,
    pub tts_processing_time: Option<f64>,
    pub stt_processing_time: Option<f64>,
    pub llm_processing_time: Option<f64>,

    // 音频时长（秒）
    pub audio_input_duration: Option<f64>,
    pub audio_output_duration: Option<f64>,

    pub has_error: bool,
    pub error_message: Option<String>,

    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_sessions::Entity",
        from = "Column::TestSessionId",
        to = "super::test_sessions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TestSession,
}

impl Related<super::test_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
