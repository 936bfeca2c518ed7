//! 智能体与服务配置存储集成测试

mod common;

use common::{seed_agent, seed_service, seed_user, setup_stores};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use voice_agent_hub::HubError;
use voice_agent_hub::schema::{
    AgentCreate, AgentStatus, AgentUpdate, AiServiceUpdate, ServiceConfigCreate,
    ServiceConfigUpdate, ServiceType,
};

#[tokio::test]
async fn create_agent_with_defaults() {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;
    let agent = seed_agent(&stores, user.id, "Receptionist").await;

    assert_eq!(agent.user_id, user.id);
    assert_eq!(agent.status, "draft");
    assert_eq!(agent.voice_pitch, 1.0);
    assert_eq!(agent.response_timeout, 30);
    assert_eq!(agent.max_conversation_length, 50);
}

#[tokio::test]
async fn agent_for_missing_user_is_reference_error() {
    let stores = setup_stores().await;
    let err = stores
        .agents
        .create(99, &AgentCreate::named("Orphan"))
        .await
        .unwrap_err();

    match err {
        HubError::Reference { entity, field, id } => {
            assert_eq!(entity, "agents");
            assert_eq!(field, "user_id");
            assert_eq!(id, 99);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_agent_is_not_found() {
    let stores = setup_stores().await;
    let err = stores.agents.get(7).await.unwrap_err();
    assert!(matches!(err, HubError::NotFound { entity: "agents", id: 7 }));
}

#[rstest]
#[case::pitch_high(AgentUpdate { voice_pitch: Some(2.5), ..Default::default() }, "voice_pitch")]
#[case::speed_low(AgentUpdate { voice_speed: Some(0.0), ..Default::default() }, "voice_speed")]
#[case::timeout(AgentUpdate { response_timeout: Some(301), ..Default::default() }, "response_timeout")]
#[case::length(AgentUpdate { max_conversation_length: Some(0), ..Default::default() }, "max_conversation_length")]
#[tokio::test]
async fn out_of_range_update_is_rejected(#[case] update: AgentUpdate, #[case] field: &str) {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;
    let agent = seed_agent(&stores, user.id, "Tuner").await;

    let err = stores.agents.update(agent.id, &update).await.unwrap_err();
    assert_eq!(err.invalid_field(), Some(field));
    assert_eq!(stores.agents.get(agent.id).await.unwrap(), agent);
}

#[tokio::test]
async fn empty_update_leaves_agent_unchanged() {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;
    let agent = seed_agent(&stores, user.id, "Static").await;

    let returned = stores
        .agents
        .update(agent.id, &AgentUpdate::default())
        .await
        .unwrap();

    assert_eq!(returned, agent);
    assert_eq!(stores.agents.get(agent.id).await.unwrap(), agent);
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;
    let agent = seed_agent(&stores, user.id, "Support").await;

    let update = AgentUpdate {
        status: Some(AgentStatus::Active),
        voice_pitch: Some(2.0),
        ..Default::default()
    };
    let updated = stores.agents.update(agent.id, &update).await.unwrap();

    assert_eq!(updated.status, "active");
    assert_eq!(updated.voice_pitch, 2.0);
    assert_eq!(updated.name, agent.name);
    assert_eq!(updated.voice_speed, agent.voice_speed);
    assert!(updated.updated_at >= agent.updated_at);

    let listed = stores.agents.list_for_user(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn service_binding_requires_existing_service() {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;
    let agent = seed_agent(&stores, user.id, "Caller").await;

    let err = stores
        .service_configs
        .create(agent.id, &ServiceConfigCreate::for_service(42))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        HubError::Reference { field: "service_id", id: 42, .. }
    ));

    let err = stores
        .service_configs
        .create(999, &ServiceConfigCreate::for_service(1))
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Reference { field: "agent_id", .. }));
}

#[tokio::test]
async fn primary_binding_per_service_type() {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;
    let agent = seed_agent(&stores, user.id, "Caller").await;
    let tts = seed_service(&stores, "Polly", ServiceType::Tts).await;
    let llm = seed_service(&stores, "GPT", ServiceType::Llm).await;

    let tts_binding = stores
        .service_configs
        .create(
            agent.id,
            &ServiceConfigCreate {
                service_id: tts.id,
                config: json!({"voice": "Joanna"}),
                is_primary: true,
            },
        )
        .await
        .unwrap();
    let llm_binding = stores
        .service_configs
        .create(agent.id, &ServiceConfigCreate::for_service(llm.id))
        .await
        .unwrap();

    let primary = stores
        .service_configs
        .primary_for(agent.id, ServiceType::Tts)
        .await
        .unwrap();
    assert_eq!(primary.map(|c| c.id), Some(tts_binding.id));
    assert!(stores
        .service_configs
        .primary_for(agent.id, ServiceType::Llm)
        .await
        .unwrap()
        .is_none());

    let promoted = stores
        .service_configs
        .update(
            llm_binding.id,
            &ServiceConfigUpdate {
                is_primary: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(promoted.is_primary);
    assert_eq!(
        stores.service_configs.list_for_agent(agent.id).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn inactive_services_are_not_listed() {
    let stores = setup_stores().await;
    let whisper = seed_service(&stores, "Whisper", ServiceType::Stt).await;
    seed_service(&stores, "Deepgram", ServiceType::Stt).await;
    seed_service(&stores, "Polly", ServiceType::Tts).await;

    stores
        .ai_services
        .update(
            whisper.id,
            &AiServiceUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let names: Vec<String> = stores
        .ai_services
        .list_by_type(ServiceType::Stt)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Deepgram".to_string()]);
}
