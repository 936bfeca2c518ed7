//! # API 密钥存储
//!
//! 明文只在签发时返回一次，库中保存 SHA-256 摘要与前 12 个字符

use std::sync::Arc;

use entity::{Agents, ApiKeys, api_keys};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use tracing::{debug, warn};

use super::shared::{self, ensure_exists, fetch, map_write_error, validated};
use crate::error::{Context, HubError, Result};
use crate::schema::{ApiKeyCreate, ApiKeyUpdate};
use crate::security::{generate_api_key, hash_api_key, key_preview};

const ENTITY: &str = "api_keys";

/// 新签发的密钥
#[derive(Debug, Clone)]
pub struct IssuedApiKey {
    /// 已保存的记录
    pub key: api_keys::Model,
    /// 明文密钥，仅此一次可见
    pub plaintext: String,
}

/// API 密钥读写服务
#[derive(Clone)]
pub struct ApiKeyStore {
    db: Arc<DatabaseConnection>,
}

impl ApiKeyStore {
    /// 创建 API 密钥存储
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 为智能体签发新密钥
    pub async fn create(&self, agent_id: i32, request: &ApiKeyCreate) -> Result<IssuedApiKey> {
        validated(ENTITY, request)?;
        ensure_exists::<Agents, _>(self.db(), ENTITY, "agent_id", agent_id).await?;

        let plaintext = generate_api_key();
        let key_hash = hash_api_key(&plaintext);
        let now = shared::now();

        let key = api_keys::ActiveModel {
            agent_id: Set(agent_id),
            key_hash: Set(key_hash.clone()),
            key_preview: Set(key_preview(&plaintext)),
            name: Set(request.name.clone()),
            is_active: Set(true),
            usage_count: Set(0),
            last_used_at: Set(None),
            expires_at: Set(request.expires_at),
            rate_limit_per_hour: Set(request.rate_limit_per_hour),
            rate_limit_per_day: Set(request.rate_limit_per_day),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(|e| map_write_error(ENTITY, e, &[("key_hash", key_hash.as_str())]))?;

        debug!(key_id = key.id, agent_id, preview = %key.key_preview, "API密钥签发成功");
        Ok(IssuedApiKey { key, plaintext })
    }

    /// 更新名称、启用状态、过期时间与限流
    pub async fn update(&self, key_id: i32, request: &ApiKeyUpdate) -> Result<api_keys::Model> {
        validated(ENTITY, request)?;
        let key = self.get(key_id).await?;
        if request.is_empty() {
            return Ok(key);
        }

        let mut active_model: api_keys::ActiveModel = key.into();
        if let Some(name) = &request.name {
            active_model.name = Set(name.clone());
        }
        if let Some(is_active) = request.is_active {
            active_model.is_active = Set(is_active);
        }
        if let Some(expires_at) = request.expires_at {
            active_model.expires_at = Set(Some(expires_at));
        }
        if let Some(limit) = request.rate_limit_per_hour {
            active_model.rate_limit_per_hour = Set(Some(limit));
        }
        if let Some(limit) = request.rate_limit_per_day {
            active_model.rate_limit_per_day = Set(Some(limit));
        }
        active_model.updated_at = Set(shared::now());

        let updated = active_model
            .update(self.db())
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))?;
        debug!(key_id, "API密钥更新成功");
        Ok(updated)
    }

    /// 按 ID 获取密钥记录
    pub async fn get(&self, key_id: i32) -> Result<api_keys::Model> {
        fetch::<ApiKeys, _>(self.db(), ENTITY, key_id).await
    }

    /// 按明文查找可用密钥，未知、停用或已过期的密钥返回 `None`
    pub async fn find_by_plaintext(&self, plaintext: &str) -> Result<Option<api_keys::Model>> {
        let key = ApiKeys::find()
            .filter(api_keys::Column::KeyHash.eq(hash_api_key(plaintext)))
            .one(self.db())
            .await
            .context("按密钥查询失败")?;

        let Some(key) = key else {
            return Ok(None);
        };
        if !key.is_active {
            warn!(key_id = key.id, "使用已停用的API密钥");
            return Ok(None);
        }
        if key.is_expired_at(shared::now()) {
            warn!(key_id = key.id, "使用已过期的API密钥");
            return Ok(None);
        }
        Ok(Some(key))
    }

    /// 记录一次使用：计数加一并刷新最近使用时间
    pub async fn record_usage(&self, key_id: i32) -> Result<api_keys::Model> {
        let result = ApiKeys::update_many()
            .col_expr(
                api_keys::Column::UsageCount,
                Expr::col(api_keys::Column::UsageCount).add(1),
            )
            .col_expr(api_keys::Column::LastUsedAt, Expr::value(shared::now()))
            .filter(api_keys::Column::Id.eq(key_id))
            .exec(self.db())
            .await
            .context("更新密钥使用次数失败")?;

        if result.rows_affected == 0 {
            return Err(HubError::not_found(ENTITY, key_id));
        }
        self.get(key_id).await
    }

    /// 智能体的全部密钥，最新签发的在前
    pub async fn list_for_agent(&self, agent_id: i32) -> Result<Vec<api_keys::Model>> {
        ApiKeys::find()
            .filter(api_keys::Column::AgentId.eq(agent_id))
            .order_by_desc(api_keys::Column::CreatedAt)
            .order_by_desc(api_keys::Column::Id)
            .all(self.db())
            .await
            .context("查询API密钥列表失败")
    }
}
