use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConversationLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConversationLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::TestSessionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::SequenceNumber)
                            .integer()
                            .not_null()
                            .check(Expr::col(ConversationLogs::SequenceNumber).gte(1)),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::UserInput)
                            .string_len(2000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::AgentResponse)
                            .string_len(5000)
                            .not_null(),
                    )
                    // 性能指标（毫秒）
                    .col(
                        ColumnDef::new(ConversationLogs::ProcessingTime)
                            .double()
                            .not_null()
                            .check(Expr::col(ConversationLogs::ProcessingTime).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::TtsProcessingTime)
                            .double()
                            .null()
                            .check(Expr::col(ConversationLogs::TtsProcessingTime).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::SttProcessingTime)
                            .double()
                            .null()
                            .check(Expr::col(ConversationLogs::SttProcessingTime).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::LlmProcessingTime)
                            .double()
                            .null()
                            .check(Expr::col(ConversationLogs::LlmProcessingTime).gte(0.0)),
                    )
                    // 音频时长（秒）
                    .col(
                        ColumnDef::new(ConversationLogs::AudioInputDuration)
                            .double()
                            .null()
                            .check(Expr::col(ConversationLogs::AudioInputDuration).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::AudioOutputDuration)
                            .double()
                            .null()
                            .check(Expr::col(ConversationLogs::AudioOutputDuration).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::HasError)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::ErrorMessage)
                            .string_len(1000)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ConversationLogs::Timestamp)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversation_logs_test_session_id")
                            .from(ConversationLogs::Table, ConversationLogs::TestSessionId)
                            .to(TestSessions::Table, TestSessions::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 序号只用于排序，不加唯一约束
        manager
            .create_index(
                Index::create()
                    .name("idx_conversation_logs_session_sequence")
                    .table(ConversationLogs::Table)
                    .col(ConversationLogs::TestSessionId)
                    .col(ConversationLogs::SequenceNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConversationLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConversationLogs {
    Table,
    Id,
    TestSessionId,
    SequenceNumber,
    UserInput,
    AgentResponse,
    ProcessingTime,
    TtsProcessingTime,
    SttProcessingTime,
    LlmProcessingTime,
    AudioInputDuration,
    AudioOutputDuration,
    HasError,
    ErrorMessage,
    Timestamp,
}

#[derive(DeriveIden)]
enum TestSessions {
    Table,
    Id,
}
