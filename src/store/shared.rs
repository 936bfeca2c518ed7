//! # 存储层公共工具

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};
use tracing::warn;

use crate::error::{Context, HubError, Result};
use crate::schema::Validate;

/// 当前 UTC 时间（无时区）
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// 写入前校验，失败时记录告警
pub fn validated<P: Validate + ?Sized>(entity: &'static str, payload: &P) -> Result<()> {
    payload.validate().map_err(|err| {
        warn!(entity, field = err.field, "拒绝写入: {}", err);
        HubError::from(err)
    })
}

/// 按主键查找，不存在时返回 `NotFound`
pub async fn fetch<E, C>(db: &C, entity: &'static str, id: i32) -> Result<E::Model>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    E::find_by_id(id)
        .one(db)
        .await
        .with_context(|| format!("查询 {entity} #{id} 失败"))?
        .ok_or_else(|| HubError::not_found(entity, id))
}

/// 确认外键指向的记录存在，否则返回 `Reference`
pub async fn ensure_exists<E, C>(
    db: &C,
    entity: &'static str,
    field: &'static str,
    id: i32,
) -> Result<()>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    let found = E::find_by_id(id)
        .one(db)
        .await
        .with_context(|| format!("查询 {field} #{id} 失败"))?;

    if found.is_none() {
        warn!(entity, field, id, "引用的记录不存在");
        return Err(HubError::reference(entity, field, id));
    }
    Ok(())
}

/// 将写入失败转换为领域错误
///
/// `unique_fields` 为 `(列名, 写入值)`，用于把数据库唯一约束冲突映射为 `UniquenessConflict`
pub fn map_write_error(
    entity: &'static str,
    err: DbErr,
    unique_fields: &[(&'static str, &str)],
) -> HubError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if let Some(&(field, value)) = unique_fields
            .iter()
            .find(|(field, _)| detail.contains(field))
        {
            warn!(entity, field, "唯一约束冲突");
            return HubError::conflict(entity, field, value);
        }
    }
    HubError::from(err).with_context(format!("写入 {entity} 失败"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{agents, api_keys, users};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn user_row(username: &str, email: &str) -> users::ActiveModel {
        users::ActiveModel {
            email: Set(email.to_string()),
            username: Set(username.to_string()),
            full_name: Set(String::new()),
            password_hash: Set("x".to_string()),
            is_active: Set(true),
            created_at: Set(now()),
            updated_at: Set(now()),
            ..Default::default()
        }
    }

    fn key_row(agent_id: i32, key_hash: &str) -> api_keys::ActiveModel {
        api_keys::ActiveModel {
            agent_id: Set(agent_id),
            key_hash: Set(key_hash.to_string()),
            key_preview: Set("vak_00000000".to_string()),
            name: Set("dup".to_string()),
            is_active: Set(true),
            usage_count: Set(0),
            last_used_at: Set(None),
            expires_at: Set(None),
            rate_limit_per_hour: Set(None),
            rate_limit_per_day: Set(None),
            created_at: Set(now()),
            updated_at: Set(now()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_maps_to_conflict() {
        let db = setup_db().await;
        user_row("same", "a@example.com").insert(&db).await.unwrap();

        let err = user_row("same", "b@example.com")
            .insert(&db)
            .await
            .unwrap_err();
        let mapped = map_write_error(
            "users",
            err,
            &[("email", "b@example.com"), ("username", "same")],
        );

        assert!(matches!(
            mapped,
            HubError::UniquenessConflict { entity: "users", field: "username", ref value } if value == "same"
        ));
    }

    #[tokio::test]
    async fn test_duplicate_key_hash_maps_to_conflict() {
        let db = setup_db().await;
        let user = user_row("owner", "owner@example.com")
            .insert(&db)
            .await
            .unwrap();
        let agent = agents::ActiveModel {
            user_id: Set(user.id),
            name: Set("Desk".to_string()),
            description: Set(String::new()),
            system_message: Set(String::new()),
            status: Set("draft".to_string()),
            voice_pitch: Set(1.0),
            voice_speed: Set(1.0),
            voice_volume: Set(1.0),
            response_timeout: Set(30),
            max_conversation_length: Set(50),
            created_at: Set(now()),
            updated_at: Set(now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let digest = "a".repeat(64);
        key_row(agent.id, &digest).insert(&db).await.unwrap();
        let err = key_row(agent.id, &digest).insert(&db).await.unwrap_err();
        let mapped = map_write_error("api_keys", err, &[("key_hash", digest.as_str())]);

        assert!(matches!(
            mapped,
            HubError::UniquenessConflict { entity: "api_keys", field: "key_hash", .. }
        ));
    }

    #[test]
    fn test_unknown_write_error_stays_database() {
        let err = map_write_error("users", DbErr::Custom("disk full".into()), &[]);
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(err.to_string().contains("写入 users 失败"));
    }
}
