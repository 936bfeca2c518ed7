//! # 实体定义测试
//!
//! 测试所有 Sea-ORM 实体定义的正确性

use crate::{
    agent_service_configs, agents, ai_services, api_keys, conversation_logs, test_sessions, users,
};
use chrono::NaiveDate;
use sea_orm::{EntityName, Iterable, Set};
use serde_json::json;

fn at(hour: u32) -> sea_orm::prelude::DateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn test_table_names() {
    assert_eq!(users::Entity.table_name(), "users");
    assert_eq!(ai_services::Entity.table_name(), "ai_services");
    assert_eq!(agents::Entity.table_name(), "agents");
    assert_eq!(agent_service_configs::Entity.table_name(), "agent_service_configs");
    assert_eq!(api_keys::Entity.table_name(), "api_keys");
    assert_eq!(test_sessions::Entity.table_name(), "test_sessions");
    assert_eq!(conversation_logs::Entity.table_name(), "conversation_logs");
}

#[test]
fn test_agent_active_model() {
    let agent = agents::ActiveModel {
        user_id: Set(1),
        name: Set("客服助手".to_string()),
        status: Set("draft".to_string()),
        voice_pitch: Set(1.0),
        response_timeout: Set(30),
        ..Default::default()
    };

    assert_eq!(agent.user_id.as_ref(), &1);
    assert_eq!(agent.name.as_ref(), "客服助手");
    assert_eq!(agent.status.as_ref(), "draft");
    assert!(agent.id.is_not_set());
}

#[test]
fn test_agent_columns_cover_voice_settings() {
    let voice_columns = agents::Column::iter()
        .filter(|column| {
            matches!(
                column,
                agents::Column::VoicePitch | agents::Column::VoiceSpeed | agents::Column::VoiceVolume
            )
        })
        .count();
    assert_eq!(voice_columns, 3);
    assert_eq!(agents::Column::iter().count(), 13);
}

#[test]
fn test_user_serialization_hides_password_hash() {
    let user = users::Model {
        id: 7,
        email: "alice@example.com".to_string(),
        username: "alice".to_string(),
        full_name: "Alice".to_string(),
        password_hash: "$2b$12$abcdef".to_string(),
        is_active: true,
        created_at: at(8),
        updated_at: at(8),
    };

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["username"], "alice");
    assert!(value.get("password_hash").is_none());
}

#[test]
fn test_api_key_serialization_hides_hash() {
    let key = api_keys::Model {
        id: 1,
        agent_id: 3,
        key_hash: "deadbeef".to_string(),
        key_preview: "vak_AbCdEfGh".to_string(),
        name: "生产环境".to_string(),
        is_active: true,
        usage_count: 0,
        last_used_at: None,
        expires_at: Some(at(12)),
        rate_limit_per_hour: Some(100),
        rate_limit_per_day: None,
        created_at: at(8),
        updated_at: at(8),
    };

    let value = serde_json::to_value(&key).unwrap();
    assert!(value.get("key_hash").is_none());
    assert_eq!(value["key_preview"], "vak_AbCdEfGh");

    assert!(!key.is_expired_at(at(11)));
    assert!(key.is_expired_at(at(12)));
    assert!(key.is_expired_at(at(13)));
}

#[test]
fn test_ai_service_json_config() {
    let service = ai_services::ActiveModel {
        name: Set("Google TTS".to_string()),
        service_type: Set("tts".to_string()),
        provider: Set("Google".to_string()),
        default_config: Set(json!({"voice": "en-US-Wavenet-D"})),
        ..Default::default()
    };

    assert_eq!(service.default_config.as_ref()["voice"], "en-US-Wavenet-D");
}
