//! # 用户存储

use std::sync::Arc;

use entity::{Users, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{debug, warn};

use super::shared::{self, fetch, map_write_error, validated};
use crate::error::{Context, HubError, Result};
use crate::schema::{UserCreate, UserUpdate};
use crate::security::{BcryptHasher, PasswordHasher};

const ENTITY: &str = "users";

/// 用户读写服务
#[derive(Clone)]
pub struct UserStore {
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserStore {
    /// 使用默认 bcrypt 哈希创建用户存储
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self::with_hasher(db, Arc::new(BcryptHasher::default()))
    }

    /// 使用自定义密码哈希算法
    #[must_use]
    pub fn with_hasher(db: Arc<DatabaseConnection>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { db, hasher }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 创建用户，邮箱与用户名必须唯一
    pub async fn create(&self, request: &UserCreate) -> Result<users::Model> {
        validated(ENTITY, request)?;
        self.ensure_unique_user(None, Some(&request.username), Some(&request.email))
            .await?;

        let password_hash = self.hasher.hash(&request.password)?;
        let now = shared::now();

        let user = users::ActiveModel {
            email: Set(request.email.clone()),
            username: Set(request.username.clone()),
            full_name: Set(request.full_name.clone()),
            password_hash: Set(password_hash),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(|e| {
            map_write_error(
                ENTITY,
                e,
                &[
                    ("email", request.email.as_str()),
                    ("username", request.username.as_str()),
                ],
            )
        })?;

        debug!(user_id = user.id, username = %user.username, "用户创建成功");
        Ok(user)
    }

    /// 更新用户资料，未设置的字段保持不变
    pub async fn update(&self, user_id: i32, request: &UserUpdate) -> Result<users::Model> {
        validated(ENTITY, request)?;
        let user = self.get(user_id).await?;
        if request.is_empty() {
            return Ok(user);
        }

        if let Some(username) = &request.username {
            if username != &user.username {
                self.ensure_unique_user(Some(user_id), Some(username), None)
                    .await?;
            }
        }

        let mut active_model: users::ActiveModel = user.into();
        if let Some(full_name) = &request.full_name {
            active_model.full_name = Set(full_name.clone());
        }
        if let Some(username) = &request.username {
            active_model.username = Set(username.clone());
        }
        active_model.updated_at = Set(shared::now());

        let username = request.username.as_deref().unwrap_or_default();
        let updated = active_model
            .update(self.db())
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[("username", username)]))?;

        debug!(user_id, "用户更新成功");
        Ok(updated)
    }

    /// 按 ID 获取用户
    pub async fn get(&self, user_id: i32) -> Result<users::Model> {
        fetch::<Users, _>(self.db(), ENTITY, user_id).await
    }

    /// 按邮箱查找用户
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db())
            .await
            .context("按邮箱查询用户失败")
    }

    /// 按用户名查找用户
    pub async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>> {
        Users::find()
            .filter(users::Column::Username.eq(username))
            .one(self.db())
            .await
            .context("按用户名查询用户失败")
    }

    /// 校验登录凭据，停用账户与错误密码均返回 `None`
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<users::Model>> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };
        if !user.is_active {
            warn!(user_id = user.id, "停用账户尝试登录");
            return Ok(None);
        }
        if self.hasher.verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn ensure_unique_user(
        &self,
        exclude_id: Option<i32>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<()> {
        if username.is_none() && email.is_none() {
            return Ok(());
        }

        let mut any = Condition::any();
        if let Some(username) = username {
            any = any.add(users::Column::Username.eq(username));
        }
        if let Some(email) = email {
            any = any.add(users::Column::Email.eq(email));
        }

        let mut query = Users::find().filter(any);
        if let Some(id) = exclude_id {
            query = query.filter(users::Column::Id.ne(id));
        }

        let Some(existing) = query
            .one(self.db())
            .await
            .context("检查用户唯一性失败")?
        else {
            return Ok(());
        };

        let conflict = match (email, username) {
            (Some(email), _) if existing.email == email => HubError::conflict(ENTITY, "email", email),
            (_, Some(username)) => HubError::conflict(ENTITY, "username", username),
            (Some(email), None) => HubError::conflict(ENTITY, "email", email),
            (None, None) => return Ok(()),
        };
        warn!(entity = ENTITY, "{}", conflict);
        Err(conflict)
    }
}
