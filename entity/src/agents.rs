//! # 语音智能体实体定义
//!
//! 用户配置的对话智能体表的 Sea-ORM 实体模型，包含语音参数和对话限制

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 智能体实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub system_message: String,
    pub status: String, // draft / active / inactive

    // 语音配置
    pub voice_pitch: f64,  // 0.1 - 2.0
    pub voice_speed: f64,  // 0.1 - 3.0
    pub voice_volume: f64, // 0.1 - 2.0

    pub response_timeout: i32,        // 秒，5 - 300
    pub max_conversation_length: i32, // 对话轮数，1 - 1000

    pub created_at: DateTime,
    pub updated_at: DateTime,
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
    #[sea_orm(has_many = "super::agent_service_configs::Entity")]
    AgentServiceConfigs,
    #[sea_orm(has_many = "super::api_keys::Entity")]
    ApiKeys,
    #[sea_orm(has_many = "super::test_sessions::Entity")]
    TestSessions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::agent_service_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgentServiceConfigs.def()
    }
}

impl Related<super::api_keys::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiKeys.def()
    }
}

impl Related<super::test_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
