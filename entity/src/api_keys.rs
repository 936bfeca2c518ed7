//! # 智能体 API 密钥实体定义
//!
//! 仅保存密钥哈希与展示前缀，明文密钥只在创建时返回一次

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// API 密钥实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "api_keys")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub agent_id: i32,
    #[sea_orm(unique)]
    #[serde(skip_serializing)]
    pub key_hash: String,
    pub key_preview: String,
    pub name: String,
    pub is_active: bool,
    pub usage_count: i64,
    pub last_used_at: Option<DateTime>,
    pub expires_at: Option<DateTime>,

    // 限流配置
    pub rate_limit_per_hour: Option<i32>,
    pub rate_limit_per_day: Option<i32>,

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
}

impl Related<super::agents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 密钥在给定时间点是否已过期
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
