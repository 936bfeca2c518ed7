pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_ai_services_table;
mod m20240101_000003_create_agents_table;
mod m20240101_000004_create_agent_service_configs_table;
mod m20240101_000005_create_api_keys_table;
mod m20240101_000006_create_test_sessions_table;
mod m20240101_000007_create_conversation_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_ai_services_table::Migration),
            Box::new(m20240101_000003_create_agents_table::Migration),
            Box::new(m20240101_000004_create_agent_service_configs_table::Migration),
            Box::new(m20240101_000005_create_api_keys_table::Migration),
            Box::new(m20240101_000006_create_test_sessions_table::Migration),
            Box::new(m20240101_000007_create_conversation_logs_table::Migration),
        ]
    }
}
