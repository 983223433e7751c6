use std::sync::Arc;

use concierge::application::ports::SessionStore;
use concierge::domain::{Role, SessionId, Turn};
use concierge::infrastructure::persistence::InMemorySessionStore;

#[tokio::test]
async fn given_unknown_id_when_getting_session_then_creates_empty_session() {
    let store = InMemorySessionStore::new();
    let id = SessionId::new();

    let session = store.get_or_create(&id).await;

    assert_eq!(session.id, id);
    assert!(session.is_empty());
    assert_eq!(store.session_count().await, 1);
}

#[tokio::test]
async fn given_existing_session_when_getting_again_then_does_not_create_duplicate() {
    let store = InMemorySessionStore::new();
    let id = SessionId::new();

    store.get_or_create(&id).await;
    store.get_or_create(&id).await;

    assert_eq!(store.session_count().await, 1);
}

#[tokio::test]
async fn given_appended_turns_when_getting_session_then_preserves_order() {
    let store = InMemorySessionStore::new();
    let id = SessionId::new();

    store.append(&id, Turn::user("question")).await;
    store
        .append_all(&id, vec![Turn::assistant("answer"), Turn::user("follow-up")])
        .await;

    let session = store.get_or_create(&id).await;
    let roles: Vec<Role> = session.turns.iter().map(|t| t.role()).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
    assert_eq!(session.turns[2].content(), "follow-up");
}

#[tokio::test]
async fn given_snapshot_when_store_changes_then_snapshot_is_unaffected() {
    let store = InMemorySessionStore::new();
    let id = SessionId::new();
    let snapshot = store.get_or_create(&id).await;

    store.append(&id, Turn::user("later")).await;

    assert!(snapshot.is_empty());
    assert_eq!(store.get_or_create(&id).await.len(), 1);
}

#[tokio::test]
async fn given_concurrent_pair_appends_when_reading_then_pairs_never_interleave() {
    let store = Arc::new(InMemorySessionStore::new());
    let id = SessionId::new();

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = Arc::clone(&store);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            store
                .append_all(
                    &id,
                    vec![Turn::user(format!("q{i}")), Turn::assistant(format!("a{i}"))],
                )
                .await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let session = store.get_or_create(&id).await;
    assert_eq!(session.len(), 40);
    for pair in session.turns.chunks(2) {
        let question = pair[0].content().trim_start_matches('q');
        let answer = pair[1].content().trim_start_matches('a');
        assert_eq!(question, answer);
    }
}
