//! # 持久化边界
//!
//! 每个实体一个存储服务：写入前执行载荷校验，引用不存在时返回 `Reference`，
//! 唯一字段冲突返回 `UniquenessConflict`，按 ID 查找失败返回 `NotFound`。

mod agents;
mod ai_services;
mod api_keys;
mod service_configs;
mod shared;
mod test_sessions;
mod users;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use agents::AgentStore;
pub use ai_services::AiServiceStore;
pub use api_keys::{ApiKeyStore, IssuedApiKey};
pub use service_configs::ServiceConfigStore;
pub use test_sessions::TestSessionStore;
pub use users::UserStore;

use crate::security::PasswordHasher;

/// 共享同一连接的全部存储服务
#[derive(Clone)]
pub struct Stores {
    /// 用户
    pub users: UserStore,
    /// AI 服务目录
    pub ai_services: AiServiceStore,
    /// 智能体
    pub agents: AgentStore,
    /// 智能体服务配置
    pub service_configs: ServiceConfigStore,
    /// API 密钥
    pub api_keys: ApiKeyStore,
    /// 测试会话与对话记录
    pub test_sessions: TestSessionStore,
}

impl Stores {
    /// 使用默认密码哈希算法创建全部存储
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let users = UserStore::new(Arc::clone(&db));
        Self::assemble(db, users)
    }

    /// 使用自定义密码哈希算法
    #[must_use]
    pub fn with_hasher(db: Arc<DatabaseConnection>, hasher: Arc<dyn PasswordHasher>) -> Self {
        let users = UserStore::with_hasher(Arc::clone(&db), hasher);
        Self::assemble(db, users)
    }

    fn assemble(db: Arc<DatabaseConnection>, users: UserStore) -> Self {
        Self {
            users,
            ai_services: AiServiceStore::new(Arc::clone(&db)),
            agents: AgentStore::new(Arc::clone(&db)),
            service_configs: ServiceConfigStore::new(Arc::clone(&db)),
            api_keys: ApiKeyStore::new(Arc::clone(&db)),
            test_sessions: TestSessionStore::new(db),
        }
    }
}
