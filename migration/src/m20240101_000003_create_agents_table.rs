use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Agents::UserId).integer().not_null())
                    .col(ColumnDef::new(Agents::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Agents::Description)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Agents::SystemMessage)
                            .string_len(2000)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Agents::Status)
                            .string_len(20)
                            .not_null()
                            .default("draft")
                            .check(
                                Expr::col(Agents::Status).is_in(["draft", "active", "inactive"]),
                            ),
                    )
                    // 语音配置
                    .col(
                        ColumnDef::new(Agents::VoicePitch)
                            .double()
                            .not_null()
                            .default(1.0)
                            .check(Expr::col(Agents::VoicePitch).between(0.1, 2.0)),
                    )
                    .col(
                        ColumnDef::new(Agents::VoiceSpeed)
                            .double()
                            .not_null()
                            .default(1.0)
                            .check(Expr::col(Agents::VoiceSpeed).between(0.1, 3.0)),
                    )
                    .col(
                        ColumnDef::new(Agents::VoiceVolume)
                            .double()
                            .not_null()
                            .default(1.0)
                            .check(Expr::col(Agents::VoiceVolume).between(0.1, 2.0)),
                    )
                    .col(
                        ColumnDef::new(Agents::ResponseTimeout)
                            .integer()
                            .not_null()
                            .default(30)
                            .check(Expr::col(Agents::ResponseTimeout).between(5, 300)),
                    )
                    .col(
                        ColumnDef::new(Agents::MaxConversationLength)
                            .integer()
                            .not_null()
                            .default(50)
                            .check(Expr::col(Agents::MaxConversationLength).between(1, 1000)),
                    )
                    .col(
                        ColumnDef::new(Agents::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Agents::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agents_user_id")
                            .from(Agents::Table, Agents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agents_user_id")
                    .table(Agents::Table)
                    .col(Agents::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agents_status")
                    .table(Agents::Table)
                    .col(Agents::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
    UserId,
    Name,
    Description,
    SystemMessage,
    Status,
    VoicePitch,
    VoiceSpeed,
    VoiceVolume,
    ResponseTimeout,
    MaxConversationLength,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
