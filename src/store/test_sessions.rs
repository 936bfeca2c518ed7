//! # 测试会话存储
//!
//! 追加对话记录与更新会话计数在同一事务内完成，序号从 1 开始连续递增

use std::sync::Arc;

use entity::{Agents, ConversationLogs, TestSessions, Users, conversation_logs, test_sessions};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::shared::{self, ensure_exists, fetch, map_write_error, validated};
use crate::error::{Constraint, Context, Result, ValidationError};
use crate::schema::{ConversationEntry, TestSessionCreate, TestSessionStatus, rules};

const ENTITY: &str = "test_sessions";
const LOG_ENTITY: &str = "conversation_logs";

/// 结束会话时允许的状态
const FINAL_STATUSES: &[&str] = &["completed", "failed"];
/// 只有进行中的会话可以结束
const OPEN_STATUSES: &[&str] = &["active"];

/// 测试会话与对话记录读写服务
#[derive(Clone)]
pub struct TestSessionStore {
    db: Arc<DatabaseConnection>,
}

impl TestSessionStore {
    /// 创建测试会话存储
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 开启会话，状态为 `active`，计数清零
    pub async fn create(
        &self,
        user_id: i32,
        request: &TestSessionCreate,
    ) -> Result<test_sessions::Model> {
        validated(ENTITY, request)?;
        ensure_exists::<Users, _>(self.db(), ENTITY, "user_id", user_id).await?;
        ensure_exists::<Agents, _>(self.db(), ENTITY, "agent_id", request.agent_id).await?;

        let now = shared::now();
        let session = test_sessions::ActiveModel {
            user_id: Set(user_id),
            agent_id: Set(request.agent_id),
            status: Set(TestSessionStatus::default().as_str().to_string()),
            session_data: Set(Value::Object(Map::new())),
            total_exchanges: Set(0),
            avg_response_time: Set(None),
            total_duration: Set(None),
            error_count: Set(0),
            last_error: Set(None),
            started_at: Set(now),
            ended_at: Set(None),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(|e| map_write_error(ENTITY, e, &[]))?;

        debug!(session_id = session.id, user_id, agent_id = request.agent_id, "测试会话已开启");
        Ok(session)
    }

    /// 按 ID 获取测试会话
    pub async fn get(&self, session_id: i32) -> Result<test_sessions::Model> {
        fetch::<TestSessions, _>(self.db(), ENTITY, session_id).await
    }

    /// 用户的全部测试会话，最近开始的在前
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<test_sessions::Model>> {
        TestSessions::find()
            .filter(test_sessions::Column::UserId.eq(user_id))
            .order_by_desc(test_sessions::Column::StartedAt)
            .order_by_desc(test_sessions::Column::Id)
            .all(self.db())
            .await
            .context("查询测试会话列表失败")
    }

    /// 追加一轮对话
    pub async fn append_exchange(
        &self,
        session_id: i32,
        entry: &ConversationEntry,
    ) -> Result<conversation_logs::Model> {
        validated(LOG_ENTITY, entry)?;

        let txn = self.db().begin().await.context("开启事务失败")?;
        let session = fetch::<TestSessions, _>(&txn, ENTITY, session_id).await?;
        let sequence_number = next_sequence_number(&txn, session_id).await?;

        let log = conversation_logs::ActiveModel {
            test_session_id: Set(session_id),
            sequence_number: Set(sequence_number),
            user_input: Set(entry.user_input.clone()),
            agent_response: Set(entry.agent_response.clone()),
            processing_time: Set(entry.processing_time),
            tts_processing_time: Set(entry.tts_processing_time),
            stt_processing_time: Set(entry.stt_processing_time),
            llm_processing_time: Set(entry.llm_processing_time),
            audio_input_duration: Set(entry.audio_input_duration),
            audio_output_duration: Set(entry.audio_output_duration),
            has_error: Set(entry.has_error),
            error_message: Set(entry.error_message.clone()),
            timestamp: Set(shared::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| map_write_error(LOG_ENTITY, e, &[]))?;

        let total_exchanges = session.total_exchanges + 1;
        let error_count = session.error_count;
        let mut active_model: test_sessions::ActiveModel = session.into();
        active_model.total_exchanges = Set(total_exchanges);
        if entry.has_error {
            active_model.error_count = Set(error_count + 1);
            if let Some(message) = &entry.error_message {
                active_model.last_error = Set(Some(message.clone()));
            }
            warn!(session_id, sequence_number, "对话轮次出错");
        }
        active_model
            .update(&txn)
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))?;

        txn.commit().await.context("提交事务失败")?;

        debug!(session_id, sequence_number, "对话记录已追加");
        Ok(log)
    }

    /// 会话的全部对话记录，按序号升序
    pub async fn logs(&self, session_id: i32) -> Result<Vec<conversation_logs::Model>> {
        ConversationLogs::find()
            .filter(conversation_logs::Column::TestSessionId.eq(session_id))
            .order_by_asc(conversation_logs::Column::SequenceNumber)
            .all(self.db())
            .await
            .context("查询对话记录失败")
    }

    /// 替换会话附加数据，必须为 JSON 对象
    pub async fn set_session_data(
        &self,
        session_id: i32,
        data: Value,
    ) -> Result<test_sessions::Model> {
        rules::json_object("session_data", &data)?;
        let session = self.get(session_id).await?;

        let mut active_model: test_sessions::ActiveModel = session.into();
        active_model.session_data = Set(data);
        active_model
            .update(self.db())
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))
    }

    /// 结束进行中的会话，写入结束时间、总时长（秒）与平均响应时间
    pub async fn finish(
        &self,
        session_id: i32,
        status: TestSessionStatus,
    ) -> Result<test_sessions::Model> {
        if status == TestSessionStatus::Active {
            return Err(
                ValidationError::new("status", Constraint::OneOf(FINAL_STATUSES)).into(),
            );
        }

        let txn = self.db().begin().await.context("开启事务失败")?;
        let session = fetch::<TestSessions, _>(&txn, ENTITY, session_id).await?;
        if session.status != TestSessionStatus::Active.as_str() {
            warn!(session_id, status = %session.status, "会话已结束");
            return Err(
                ValidationError::new("status", Constraint::OneOf(OPEN_STATUSES)).into(),
            );
        }

        let (total, count) = ConversationLogs::find()
            .filter(conversation_logs::Column::TestSessionId.eq(session_id))
            .select_only()
            .column_as(conversation_logs::Column::ProcessingTime.sum(), "total")
            .column_as(conversation_logs::Column::Id.count(), "count")
            .into_tuple::<(Option<f64>, i64)>()
            .one(&txn)
            .await
            .context("统计响应时间失败")?
            .unwrap_or((None, 0));

        let avg_response_time = match total {
            Some(total) if count > 0 => {
                Some(total / f64::from(u32::try_from(count).unwrap_or(u32::MAX)))
            }
            _ => None,
        };

        let ended_at = shared::now();
        let elapsed = (ended_at - session.started_at).num_seconds().max(0);
        let total_duration = i32::try_from(elapsed).unwrap_or(i32::MAX);

        let mut active_model: test_sessions::ActiveModel = session.into();
        active_model.status = Set(status.as_str().to_string());
        active_model.ended_at = Set(Some(ended_at));
        active_model.total_duration = Set(Some(total_duration));
        active_model.avg_response_time = Set(avg_response_time);
        let finished = active_model
            .update(&txn)
            .await
            .map_err(|e| map_write_error(ENTITY, e, &[]))?;

        txn.commit().await.context("提交事务失败")?;

        debug!(session_id, status = %finished.status, total_duration, "测试会话已结束");
        Ok(finished)
    }
}

async fn next_sequence_number(txn: &DatabaseTransaction, session_id: i32) -> Result<i32> {
    let current = ConversationLogs::find()
        .filter(conversation_logs::Column::TestSessionId.eq(session_id))
        .select_only()
        .column_as(conversation_logs::Column::SequenceNumber.max(), "max_seq")
        .into_tuple::<Option<i32>>()
        .one(txn)
        .await
        .context("查询对话序号失败")?
        .flatten();

    Ok(current.unwrap_or(0) + 1)
}

