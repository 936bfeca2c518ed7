//! # AI 服务目录存储

use std::sync::Arc;

use entity::{AiServices, ai_services};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::shared::{self, fetch, map_write_error, validated};
use crate::error::{Context, Result};
use crate::schema::{AiServiceCreate, AiServiceUpdate, ServiceType};

const ENTITY: &str = "ai_services";

/// AI 服务目录读写服务
#[derive(Clone)]
pub struct AiServiceStore {
    db: Arc<DatabaseConnection>,
}

impl AiServiceStore {
    /// 创建 AI 服务存储
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 登记新的 AI 服务，默认启用
    pub async fn create(&self, request: &AiServiceCreate) -> Result<ai_services::Model> {
        validated(ENTITY, request)?;

        let service = ai_services::ActiveModel {
            name: Set(request.name.clone()),
            service_type: Set(request.service_type.as_str().to_string()),
            provider: Set(request.provider.clone()),
            is_active: Set(true),
            description: Set(request.description.clone()),
            default_config: Set(request.default_config.clone()),
            created_at: Set(shared::now()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(|e| map_write_error(ENTITY, e, &[]))?;

        debug!(
            service_id = service.id,
            service_type = %service.service_type,
            "AI服务创建成功"
        );
        Ok(service)
    }

    /// 更新服务信息，服务类型不可修改
    pub async fn update(
        &self,
        service_id: i32,
        request: &AiServiceUpdate,
    ) -> Result<ai_services::Model> {
        validated(ENTITY, request)?;
        let service = self.get(service_id).await?;
        if request.is_empty() {
            return Ok(service);
        }

        let mut active_model: ai_services::ActiveModel = service.into();
        if let Some(name) = &request.name {
            active_model.name = Set(name.clone());
        }
        if let Some(description) = &request.description {
            active_model.description = Set(description.clone());
        }
        if let Some(is_active) = request.is_active {
            active_model.is_active = Set(is_active);
        }
        if let Some(config) = &request.default_config {
            active_model.default_config = Set(config.clone());
        }

        let updated = active_model
            .update(self.db())
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))?;
        debug!(service_id, "AI服务更新成功");
        Ok(updated)
    }

    /// 按 ID 获取 AI 服务
    pub async fn get(&self, service_id: i32) -> Result<ai_services::Model> {
        fetch::<AiServices, _>(self.db(), ENTITY, service_id).await
    }

    /// 指定类型的启用服务，按名称排序
    pub async fn list_by_type(&self, service_type: ServiceType) -> Result<Vec<ai_services::Model>> {
        AiServices::find()
            .filter(ai_services::Column::ServiceType.eq(service_type.as_str()))
            .filter(ai_services::Column::IsActive.eq(true))
            .order_by_asc(ai_services::Column::Name)
            .all(self.db())
            .await
            .context("查询AI服务列表失败")
    }
}
