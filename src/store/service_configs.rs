//! # 智能体服务配置存储
//!
//! 同一智能体可为同类服务登记多个主配置，读取时取最近更新的一条

use std::sync::Arc;

use entity::{AgentServiceConfigs, Agents, AiServices, agent_service_configs, ai_services};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::debug;

use super::shared::{self, ensure_exists, fetch, map_write_error, validated};
use crate::error::{Context, Result};
use crate::schema::{ServiceConfigCreate, ServiceConfigUpdate, ServiceType};

const ENTITY: &str = "agent_service_configs";

/// 服务配置读写服务
#[derive(Clone)]
pub struct ServiceConfigStore {
    db: Arc<DatabaseConnection>,
}

impl ServiceConfigStore {
    /// 创建服务配置存储
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 为智能体绑定服务，智能体与服务都必须存在
    pub async fn create(
        &self,
        agent_id: i32,
        request: &ServiceConfigCreate,
    ) -> Result<agent_service_configs::Model> {
        validated(ENTITY, request)?;
        ensure_exists::<Agents, _>(self.db(), ENTITY, "agent_id", agent_id).await?;
        ensure_exists::<AiServices, _>(self.db(), ENTITY, "service_id", request.service_id)
            .await?;

        let now = shared::now();
        let binding = agent_service_configs::ActiveModel {
            agent_id: Set(agent_id),
            service_id: Set(request.service_id),
            config: Set(request.config.clone()),
            is_primary: Set(request.is_primary),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(|e| map_write_error(ENTITY, e, &[]))?;

        debug!(
            config_id = binding.id,
            agent_id,
            service_id = request.service_id,
            "服务配置创建成功"
        );
        Ok(binding)
    }

    /// 更新配置内容或主配置标记
    pub async fn update(
        &self,
        config_id: i32,
        request: &ServiceConfigUpdate,
    ) -> Result<agent_service_configs::Model> {
        validated(ENTITY, request)?;
        let binding = self.get(config_id).await?;
        if request.is_empty() {
            return Ok(binding);
        }

        let mut active_model: agent_service_configs::ActiveModel = binding.into();
        if let Some(config) = &request.config {
            active_model.config = Set(config.clone());
        }
        if let Some(is_primary) = request.is_primary {
            active_model.is_primary = Set(is_primary);
        }
        active_model.updated_at = Set(shared::now());

        let updated = active_model
            .update(self.db())
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))?;
        debug!(config_id, "服务配置更新成功");
        Ok(updated)
    }

    /// 按 ID 获取服务配置
    pub async fn get(&self, config_id: i32) -> Result<agent_service_configs::Model> {
        fetch::<AgentServiceConfigs, _>(self.db(), ENTITY, config_id).await
    }

    /// 智能体的全部服务配置，按创建顺序
    pub async fn list_for_agent(&self, agent_id: i32) -> Result<Vec<agent_service_configs::Model>> {
        AgentServiceConfigs::find()
            .filter(agent_service_configs::Column::AgentId.eq(agent_id))
            .order_by_asc(agent_service_configs::Column::Id)
            .all(self.db())
            .await
            .context("查询服务配置列表失败")
    }

    /// 智能体在某类服务上的主配置
    pub async fn primary_for(
        &self,
        agent_id: i32,
        service_type: ServiceType,
    ) -> Result<Option<agent_service_configs::Model>> {
        AgentServiceConfigs::find()
            .join(
                JoinType::InnerJoin,
                agent_service_configs::Relation::Service.def(),
            )
            .filter(agent_service_configs::Column::AgentId.eq(agent_id))
            .filter(agent_service_configs::Column::IsPrimary.eq(true))
            .filter(ai_services::Column::ServiceType.eq(service_type.as_str()))
            .order_by_desc(agent_service_configs::Column::UpdatedAt)
            .order_by_desc(agent_service_configs::Column::Id)
            .one(self.db())
            .await
            .context("查询主服务配置失败")
    }
}
