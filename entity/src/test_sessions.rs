//! # 测试会话实体定义
//!
//! 用户与智能体之间一次测试对话的汇总记录

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 测试会话实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "test_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub agent_id: i32,
    pub status: String, // active / completed / failed
    #[sea_orm(column_type = "Json")]
    pub session_data: Json,

    // 指标
    pub total_exchanges: i32,
    pub avg_response_time: Option<f64>, // 毫秒
    pub total_duration: Option<i32>,    // 秒

    // 错误追踪
    pub error_count: i32,
    pub last_error: Option<String>,

    pub started_at: DateTime,
    pub ended_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::agents::Entity",
        from = "Column::AgentId",
        to = "super::agents::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Agent,
    #[sea_orm(has_many = "super::conversation_logs::Entity")]
    ConversationLogs,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::agents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::conversation_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConversationLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
