//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod users;
pub mod ai_services;
pub mod agents;
pub mod agent_service_configs;
pub mod api_keys;
pub mod test_sessions;
pub mod conversation_logs;

pub use users::Entity as Users;
pub use ai_services::Entity as AiServices;
pub use agents::Entity as Agents;
pub use agent_service_configs::Entity as AgentServiceConfigs;
pub use api_keys::Entity as ApiKeys;
pub use test_sessions::Entity as TestSessions;
pub use conversation_logs::Entity as ConversationLogs;

#[cfg(test)]
mod tests;
