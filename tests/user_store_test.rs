//! 用户存储集成测试

mod common;

use common::{seed_user, setup_stores, user_request};
use pretty_assertions::assert_eq;
use voice_agent_hub::HubError;
use voice_agent_hub::schema::UserUpdate;

#[tokio::test]
async fn create_user_hashes_password() {
    let stores = setup_stores().await;
    let user = seed_user(&stores, "alice").await;

    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_active);
    assert_ne!(user.password_hash, "s3cret-pass");
    assert_eq!(user.created_at, user.updated_at);

    let found = stores.users.find_by_username("alice").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn duplicate_username_is_conflict() {
    let stores = setup_stores().await;
    seed_user(&stores, "alice").await;

    let mut request = user_request("alice");
    request.email = "other@example.com".to_string();
    let err = stores.users.create(&request).await.unwrap_err();

    match err {
        HubError::UniquenessConflict {
            entity,
            field,
            value,
        } => {
            assert_eq!(entity, "users");
            assert_eq!(field, "username");
            assert_eq!(value, "alice");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let stores = setup_stores().await;
    seed_user(&stores, "alice").await;

    let mut request = user_request("bob");
    request.email = "alice@example.com".to_string();
    let err = stores.users.create(&request).await.unwrap_err();

    assert!(matches!(
        err,
        HubError::UniquenessConflict { field: "email", .. }
    ));
}

#[tokio::test]
async fn invalid_email_is_rejected_before_write() {
    let stores = setup_stores().await;
    let mut request = user_request("carol");
    request.email = "not-an-email".to_string();

    let err = stores.users.create(&request).await.unwrap_err();
    assert_eq!(err.invalid_field(), Some("email"));
    assert!(stores.users.find_by_username("carol").await.unwrap().is_none());
}

#[tokio::test]
async fn rename_to_taken_username_is_conflict() {
    let stores = setup_stores().await;
    seed_user(&stores, "alice").await;
    let bob = seed_user(&stores, "bob").await;

    let update = UserUpdate {
        username: Some("alice".to_string()),
        ..Default::default()
    };
    let err = stores.users.update(bob.id, &update).await.unwrap_err();
    assert!(err.is_conflict());

    let update = UserUpdate {
        full_name: Some("Robert".to_string()),
        ..Default::default()
    };
    let updated = stores.users.update(bob.id, &update).await.unwrap();
    assert_eq!(updated.full_name, "Robert");
    assert_eq!(updated.username, "bob");
}

#[tokio::test]
async fn verify_credentials() {
    let stores = setup_stores().await;
    let alice = seed_user(&stores, "alice").await;

    let ok = stores
        .users
        .verify_credentials("alice@example.com", "s3cret-pass")
        .await
        .unwrap();
    assert_eq!(ok.map(|u| u.id), Some(alice.id));

    let wrong = stores
        .users
        .verify_credentials("alice@example.com", "wrong-pass")
        .await
        .unwrap();
    assert!(wrong.is_none());

    let unknown = stores
        .users
        .verify_credentials("nobody@example.com", "s3cret-pass")
        .await
        .unwrap();
    assert!(unknown.is_none());
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let stores = setup_stores().await;
    let err = stores.users.get(404).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "记录未找到: users #404");
}
