//! # 智能体服务配置实体定义
//!
//! 智能体与 AI 服务之间的关联表，保存服务级别的个性化配置

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 智能体服务配置实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agent_service_configs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub agent_id: i32,
    pub service_id: i32,
    #[sea_orm(column_type = "Json")]
    pub config: Json,
    /// 是否为该服务类型的主服务（数据库层不保证唯一）
    pub is_primary: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agents::Entity",
        from = "Column::AgentId",
        to = "super::agents::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Agent,
    #[sea_orm(
        belongs_to = "super::ai_services::Entity",
        from = "Column::ServiceId",
        to = "super::ai_services::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Service,
}

impl Related<super::agents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::ai_services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
