use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AiServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AiServices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AiServices::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(AiServices::ServiceType)
                            .string_len(10)
                            .not_null()
                            .check(Expr::col(AiServices::ServiceType).is_in(["tts", "stt", "llm"])),
                    )
                    .col(ColumnDef::new(AiServices::Provider).string_len(100).not_null())
                    .col(
                        ColumnDef::new(AiServices::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AiServices::Description)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(AiServices::DefaultConfig)
                            .json()
                            .not_null()
                            .default("{}"),
                    )
                    .col(
                        ColumnDef::new(AiServices::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ai_services_type_active")
                    .table(AiServices::Table)
                    .col(AiServices::ServiceType)
                    .col(AiServices::IsActive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AiServices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AiServices {
    Table,
    Id,
    Name,
    ServiceType,
    Provider,
    IsActive,
    Description,
    DefaultConfig,
    CreatedAt,
}
