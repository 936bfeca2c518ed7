//! 集成测试公共工具

#![allow(dead_code)]

use std::sync::Arc;

use entity::{agents, ai_services, users};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use voice_agent_hub::Stores;
use voice_agent_hub::schema::{AgentCreate, AiServiceCreate, ServiceType, UserCreate};
use voice_agent_hub::security::BcryptHasher;

pub async fn setup_test_db() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(db)
}

/// 使用最低 bcrypt 成本，加快测试
pub async fn setup_stores() -> Stores {
    Stores::with_hasher(setup_test_db().await, Arc::new(BcryptHasher::with_cost(4)))
}

pub fn user_request(username: &str) -> UserCreate {
    UserCreate {
        email: format!("{username}@example.com"),
        username: username.to_string(),
        full_name: format!("{username} tester"),
        password: "s3cret-pass".to_string(),
    }
}

pub async fn seed_user(stores: &Stores, username: &str) -> users::Model {
    stores
        .users
        .create(&user_request(username))
        .await
        .expect("create user")
}

pub async fn seed_agent(stores: &Stores, user_id: i32, name: &str) -> agents::Model {
    stores
        .agents
        .create(user_id, &AgentCreate::named(name))
        .await
        .expect("create agent")
}

pub async fn seed_service(
    stores: &Stores,
    name: &str,
    service_type: ServiceType,
) -> ai_services::Model {
    stores
        .ai_services
        .create(&AiServiceCreate::new(name, service_type, "Acme"))
        .await
        .expect("create ai service")
}
