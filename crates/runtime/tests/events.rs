mod common;

use game_core::{CharacterId, PlayerId};
use runtime::MatchEvent;
use tokio::sync::broadcast::error::TryRecvError;

#[tokio::test]
async fn recorded_matches_are_broadcast() {
    let service = common::service();
    let mut events = service.subscribe();

    let record = service
        .simulate_with_seed(
            &PlayerId::from("alice"),
            &PlayerId::from("bob"),
            &CharacterId::from("alice-kyuu"),
            &CharacterId::from("bob-shimi"),
            11,
        )
        .unwrap();

    match events.recv().await.unwrap() {
        MatchEvent::Recorded(summary) => {
            assert_eq!(summary.match_id, record.id);
            assert_eq!(summary.digest, record.digest);
            assert_eq!(summary.winner, record.winner);
            assert_eq!(summary.challenger_character, CharacterId::from("alice-kyuu"));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    service.replay(record.id).unwrap();
    assert_eq!(
        events.recv().await.unwrap(),
        MatchEvent::Replayed {
            match_id: record.id,
            verified: true
        }
    );
}

#[tokio::test]
async fn rejected_requests_publish_nothing() {
    let service = common::service();
    let mut events = service.subscribe();

    let _ = service.challenge(&PlayerId::from("alice"), &PlayerId::from("alice"));
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn publishing_without_subscribers_is_harmless() {
    let service = common::service();
    service
        .challenge(&PlayerId::from("alice"), &PlayerId::from("bob"))
        .unwrap();

    let mut late = service.subscribe();
    assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));
}
