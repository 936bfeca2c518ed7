//! # AI 服务目录实体定义
//!
//! TTS / STT / LLM 服务提供方目录表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// AI 服务实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub service_type: String,      // tts / stt / llm，创建后不可修改
    pub provider: String,          // e.g. Google, OpenAI, Azure
    pub is_active: bool,
    pub description: String,
    #[sea_orm(column_type = "Json")]
    pub default_config: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::agent_service_configs::Entity")]
    AgentServiceConfigs,
}

impl Related<super::agent_service_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgentServiceConfigs.def()
    }
}

// 通过 agent_service_configs 中间表关联到 agents
impl Related<super::agents::Entity> for Entity {
    fn to() -> RelationDef {
        super::agent_service_configs::Relation::Agent.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::agent_service_configs::Relation::Service.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
