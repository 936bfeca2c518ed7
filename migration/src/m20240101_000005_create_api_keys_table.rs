use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApiKeys::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApiKeys::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApiKeys::AgentId).integer().not_null())
                    .col(ColumnDef::new(ApiKeys::KeyHash).string_len(255).not_null())
                    .col(ColumnDef::new(ApiKeys::KeyPreview).string_len(20).not_null())
                    .col(ColumnDef::new(ApiKeys::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ApiKeys::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ApiKeys::UsageCount)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(ApiKeys::UsageCount).gte(0)),
                    )
                    .col(ColumnDef::new(ApiKeys::LastUsedAt).timestamp().null())
                    .col(ColumnDef::new(ApiKeys::ExpiresAt).timestamp().null())
                    // 限流配置
                    .col(
                        ColumnDef::new(ApiKeys::RateLimitPerHour)
                            .integer()
                            .null()
                            .check(Expr::col(ApiKeys::RateLimitPerHour).gte(1)),
                    )
                    .col(
                        ColumnDef::new(ApiKeys::RateLimitPerDay)
                            .integer()
                            .null()
                            .check(Expr::col(ApiKeys::RateLimitPerDay).gte(1)),
                    )
                    .col(
                        ColumnDef::new(ApiKeys::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ApiKeys::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_api_keys_agent_id")
                            .from(ApiKeys::Table, ApiKeys::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_api_keys_key_hash_unique")
                    .table(ApiKeys::Table)
                    .col(ApiKeys::KeyHash)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_api_keys_agent_active")
                    .table(ApiKeys::Table)
                    .col(ApiKeys::AgentId)
                    .col(ApiKeys::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_api_keys_expires_at")
                    .table(ApiKeys::Table)
                    .col(ApiKeys::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiKeys::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ApiKeys {
    Table,
    Id,
    AgentId,
    KeyHash,
    KeyPreview,
    Name,
    IsActive,
    UsageCount,
    LastUsedAt,
    ExpiresAt,
    RateLimitPerHour,
    RateLimitPerDay,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
}
