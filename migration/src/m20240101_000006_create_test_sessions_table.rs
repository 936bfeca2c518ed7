use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestSessions::UserId).integer().not_null())
                    .col(ColumnDef::new(TestSessions::AgentId).integer().not_null())
                    .col(
                        ColumnDef::new(TestSessions::Status)
                            .string_len(20)
                            .not_null()
                            .default("active")
                            .check(
                                Expr::col(TestSessions::Status)
                                    .is_in(["active", "completed", "failed"]),
                            ),
                    )
                    .col(
                        ColumnDef::new(TestSessions::SessionData)
                            .json()
                            .not_null()
                            .default("{}"),
                    )
                    // 会话指标
                    .col(
                        ColumnDef::new(TestSessions::TotalExchanges)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(TestSessions::TotalExchanges).gte(0)),
                    )
                    .col(
                        ColumnDef::new(TestSessions::AvgResponseTime)
                            .double()
                            .null()
                            .check(Expr::col(TestSessions::AvgResponseTime).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(TestSessions::TotalDuration)
                            .integer()
                            .null()
                            .check(Expr::col(TestSessions::TotalDuration).gte(0)),
                    )
                    // 错误追踪
                    .col(
                        ColumnDef::new(TestSessions::ErrorCount)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(TestSessions::ErrorCount).gte(0)),
                    )
                    .col(ColumnDef::new(TestSessions::LastError).string_len(1000).null())
                    .col(
                        ColumnDef::new(TestSessions::StartedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(TestSessions::EndedAt).timestamp().null())
                    .col(
                        ColumnDef::new(TestSessions::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_sessions_user_id")
                            .from(TestSessions::Table, TestSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_sessions_agent_id")
                            .from(TestSessions::Table, TestSessions::AgentId)
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
                    .name("idx_test_sessions_user_id")
                    .table(TestSessions::Table)
                    .col(TestSessions::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_sessions_agent_status")
                    .table(TestSessions::Table)
                    .col(TestSessions::AgentId)
                    .col(TestSessions::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestSessions {
    Table,
    Id,
    UserId,
    AgentId,
    Status,
    SessionData,
    TotalExchanges,
    AvgResponseTime,
    TotalDuration,
    ErrorCount,
    LastError,
    StartedAt,
    EndedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
}
