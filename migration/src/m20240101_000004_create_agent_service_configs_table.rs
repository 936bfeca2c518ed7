use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgentServiceConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AgentServiceConfigs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AgentServiceConfigs::AgentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AgentServiceConfigs::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AgentServiceConfigs::Config)
                            .json()
                            .not_null()
                            .default("{}"),
                    )
                    .col(
                        ColumnDef::new(AgentServiceConfigs::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AgentServiceConfigs::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AgentServiceConfigs::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_service_configs_agent_id")
                            .from(AgentServiceConfigs::Table, AgentServiceConfigs::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_service_configs_service_id")
                            .from(AgentServiceConfigs::Table, AgentServiceConfigs::ServiceId)
                            .to(AiServices::Table, AiServices::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 主服务唯一性不在数据库层约束，这里只建普通索引
        manager
            .create_index(
                Index::create()
                    .name("idx_agent_service_configs_agent_service")
                    .table(AgentServiceConfigs::Table)
                    .col(AgentServiceConfigs::AgentId)
                    .col(AgentServiceConfigs::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agent_service_configs_service_id")
                    .table(AgentServiceConfigs::Table)
                    .col(AgentServiceConfigs::ServiceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgentServiceConfigs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AgentServiceConfigs {
    Table,
    Id,
    AgentId,
    ServiceId,
    Config,
    IsPrimary,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AiServices {
    Table,
    Id,
}
