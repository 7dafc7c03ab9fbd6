//! End to end resolution through the public API.

use std::collections::BTreeSet;
use std::sync::Arc;
use warden::application_impl::*;
use warden::application_port::*;
use warden::domain_model::*;
use warden::infra_memory::*;

fn service(repo: Arc<MemoryUserRepo>, provider: StaticAccessControlProvider) -> RealUserDetailsService {
    RealUserDetailsService::new(
        repo,
        Arc::new(UsernameRoleSource::new()),
        Arc::new(provider),
        Arc::new(NoOpPasswordEncoder::new()),
    )
}

#[tokio::test]
async fn alice_gets_read() {
    let repo = Arc::new(MemoryUserRepo::new());
    repo.insert(UserRecord::new(1, "alice", "secret")).await;
    let service = service(
        repo,
        StaticAccessControlProvider::new().with_group("alice", ["READ"]),
    );

    let principal = service.load_user_by_username("alice").await.unwrap();
    assert_eq!(
        principal,
        Principal {
            username: "alice".to_string(),
            password: EncodedPassword::new("noop", "secret"),
            authorities: BTreeSet::from([Authority::from("READ")]),
        }
    );
}

#[tokio::test]
async fn ghost_is_not_found() {
    let service = service(
        Arc::new(MemoryUserRepo::new()),
        StaticAccessControlProvider::new(),
    );

    match service.load_user_by_username("ghost").await {
        Err(AuthError::UserNotFound(username)) => assert_eq!(username, "ghost"),
        other => panic!("expected UserNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn users_added_later_are_seen() {
    let repo = Arc::new(MemoryUserRepo::new());
    let service = service(
        repo.clone(),
        StaticAccessControlProvider::new().with_group("zoe", ["READ"]),
    );
    assert!(service.resolve_user("zoe").await.is_err());

    repo.insert(UserRecord::new(9, "zoe", "pw")).await;
    let resolution = service.resolve_user("zoe").await.unwrap();
    assert!(resolution.principal.has_authority("READ"));
    assert!(resolution.warnings.is_empty());
}

#[tokio::test]
async fn authenticate_with_delegating_encoder() {
    let repo = Arc::new(MemoryUserRepo::from_records(vec![UserRecord::new(
        1, "alice", "secret",
    )]));
    let user_details_service = Arc::new(service(
        repo,
        StaticAccessControlProvider::new().with_group("alice", ["READ"]),
    ));
    let auth_service = RealAuthService::new(
        user_details_service,
        Arc::new(DelegatingPasswordEncoder::new().with(Arc::new(NoOpPasswordEncoder::new()))),
    );

    let principal = auth_service
        .authenticate(LoginInput {
            username: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(principal.username, "alice");
}
