//! # 智能体存储

use std::sync::Arc;

use entity::{Agents, Users, agents};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::shared::{self, ensure_exists, fetch, map_write_error, validated};
use crate::error::{Context, Result};
use crate::schema::{AgentCreate, AgentStatus, AgentUpdate};

const ENTITY: &str = "agents";

/// 智能体读写服务
#[derive(Clone)]
pub struct AgentStore {
    db: Arc<DatabaseConnection>,
}

impl AgentStore {
    /// 创建智能体存储
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 为用户创建智能体，新建状态为 `draft`
    pub async fn create(&self, user_id: i32, request: &AgentCreate) -> Result<agents::Model> {
        validated(ENTITY, request)?;
        ensure_exists::<Users, _>(self.db(), ENTITY, "user_id", user_id).await?;

        let now = shared::now();
        let agent = agents::ActiveModel {
            user_id: Set(user_id),
            name: Set(request.name.clone()),
            description: Set(request.description.clone()),
            system_message: Set(request.system_message.clone()),
            status: Set(AgentStatus::default().as_str().to_string()),
            voice_pitch: Set(request.voice_pitch),
            voice_speed: Set(request.voice_speed),
            voice_volume: Set(request.voice_volume),
            response_timeout: Set(request.response_timeout),
            max_conversation_length: Set(request.max_conversation_length),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(|e| map_write_error(ENTITY, e, &[]))?;

        debug!(agent_id = agent.id, user_id, "智能体创建成功");
        Ok(agent)
    }

    /// 部分更新，所有字段均未设置时不写库
    pub async fn update(&self, agent_id: i32, request: &AgentUpdate) -> Result<agents::Model> {
        validated(ENTITY, request)?;
        let agent = self.get(agent_id).await?;
        if request.is_empty() {
            return Ok(agent);
        }

        let mut active_model: agents::ActiveModel = agent.into();
        if let Some(name) = &request.name {
            active_model.name = Set(name.clone());
        }
        if let Some(description) = &request.description {
            active_model.description = Set(description.clone());
        }
        if let Some(system_message) = &request.system_message {
            active_model.system_message = Set(system_message.clone());
        }
        if let Some(status) = request.status {
            active_model.status = Set(status.as_str().to_string());
        }
        if let Some(pitch) = request.voice_pitch {
            active_model.voice_pitch = Set(pitch);
        }
        if let Some(speed) = request.voice_speed {
            active_model.voice_speed = Set(speed);
        }
        if let Some(volume) = request.voice_volume {
            active_model.voice_volume = Set(volume);
        }
        if let Some(timeout) = request.response_timeout {
            active_model.response_timeout = Set(timeout);
        }
        if let Some(max_len) = request.max_conversation_length {
            active_model.max_conversation_length = Set(max_len);
        }
        active_model.updated_at = Set(shared::now());

        let updated = active_model
            .update(self.db())
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))?;
        debug!(agent_id, status = %updated.status, "智能体更新成功");
        Ok(updated)
    }

    /// 按 ID 获取智能体
    pub async fn get(&self, agent_id: i32) -> Result<agents::Model> {
        fetch::<Agents, _>(self.db(), ENTITY, agent_id).await
    }

    /// 用户的全部智能体，最近更新的在前
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<agents::Model>> {
        Agents::find()
            .filter(agents::Column::UserId.eq(user_id))
            .order_by_desc(agents::Column::UpdatedAt)
            .order_by_desc(agents::Column::Id)
            .all(self.db())
            .await
            .context("查询智能体列表失败")
    }
}
