mod common;

use std::sync::Arc;
use std::thread;

use game_core::{CharacterId, PlayerId, StatBlock, StepKind, log_digest};
use runtime::{
    BattleService, InMemoryMatchRepository, MatchId, MatchRecord, MatchRepository, OracleManager,
    RuntimeError,
};

fn player(id: &str) -> PlayerId {
    PlayerId::from(id)
}

fn character(id: &str) -> CharacterId {
    CharacterId::from(id)
}

fn kyuu_vs_shimi(service: &BattleService, seed: u64) -> MatchRecord {
    service
        .simulate_with_seed(
            &player("alice"),
            &player("bob"),
            &character("alice-kyuu"),
            &character("bob-shimi"),
            seed,
        )
        .unwrap()
}

#[test]
fn records_a_match_with_its_digest() {
    let service = common::service();
    let record = kyuu_vs_shimi(&service, 9);

    assert_eq!(record.seed, 9);
    assert_eq!(record.challenger.name, "Kyuu");
    assert_eq!(record.opponent.name, "Shimi");
    assert!(record.rounds >= 1 && record.rounds <= 10);
    assert_eq!(record.digest, hex::encode(log_digest(&record.steps)));
    assert!(
        record.narration.starts_with("**Battle Chronicle: Kyuu vs Shimi**"),
        "{}",
        record.narration
    );
    let terminal = record.steps.last().map(|step| step.kind);
    match &record.winner {
        Some(winner) => {
            assert!(winner == &player("alice") || winner == &player("bob"));
            assert_ne!(terminal, Some(StepKind::Draw));
        }
        None => assert_eq!(terminal, Some(StepKind::Draw)),
    }
    assert_eq!(service.match_count().unwrap(), 1);
    assert_eq!(service.get_match(record.id).unwrap(), record);
}

#[test]
fn same_seed_reproduces_the_same_battle() {
    let service = common::service();
    let first = kyuu_vs_shimi(&service, 1234);
    let second = kyuu_vs_shimi(&service, 1234);

    assert_ne!(first.id, second.id);
    assert_eq!(first.steps, second.steps);
    assert_eq!(first.digest, second.digest);
    assert_eq!(first.winner, second.winner);
}

#[test]
fn the_regenerator_never_falls_to_a_knockout() {
    let service = common::service();
    for seed in 0..32 {
        let record = kyuu_vs_shimi(&service, seed);
        let kyuu_ko = record
            .steps
            .iter()
            .any(|step| step.kind == StepKind::Ko && step.description.starts_with("Kyuu"));
        assert!(!kyuu_ko, "seed {seed}");
    }
}

#[test]
fn rejects_characters_that_are_not_locked() {
    let service = common::service();
    let err = service
        .simulate_battle(
            &player("carol"),
            &player("bob"),
            &character("carol-ryn"),
            &character("bob-shimi"),
        )
        .unwrap_err();

    assert!(matches!(err, RuntimeError::NotLocked { .. }));
    assert_eq!(service.match_count().unwrap(), 0);
}

#[test]
fn rejects_characters_owned_by_someone_else() {
    let service = common::service();
    let err = service
        .simulate_battle(
            &player("bob"),
            &player("alice"),
            &character("alice-kyuu"),
            &character("alice-ryn"),
        )
        .unwrap_err();

    match err {
        RuntimeError::OwnershipMismatch { owner, claimed, .. } => {
            assert_eq!(owner, player("alice"));
            assert_eq!(claimed, player("bob"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_unknown_characters_and_bases() {
    let service = common::service();
    let err = service
        .simulate_battle(
            &player("alice"),
            &player("bob"),
            &character("alice-ghost"),
            &character("bob-shimi"),
        )
        .unwrap_err();
    assert!(matches!(err, RuntimeError::CharacterNotFound(_)));

    let mut orphan = service.character(&character("alice-ryn")).unwrap();
    orphan.base = "nobody".into();
    service.save_character(&orphan).unwrap();
    let err = service
        .simulate_battle(
            &player("alice"),
            &player("bob"),
            &character("alice-ryn"),
            &character("bob-shimi"),
        )
        .unwrap_err();
    assert!(matches!(err, RuntimeError::BaseCharacterNotFound { .. }));
    assert_eq!(service.match_count().unwrap(), 0);
}

#[test]
fn history_is_newest_first_and_capped_by_default() {
    let service = common::service();
    for seed in 0..12 {
        kyuu_vs_shimi(&service, seed);
    }
    service
        .simulate_with_seed(
            &player("dave"),
            &player("bob"),
            &character("dave-ryn"),
            &character("bob-shimi"),
            100,
        )
        .unwrap();

    let alice = service.match_history(&player("alice"), None).unwrap();
    let seeds: Vec<_> = alice.iter().map(|record| record.seed).collect();
    assert_eq!(seeds, (2..12).rev().collect::<Vec<_>>());

    let bob = service.match_history(&player("bob"), Some(2)).unwrap();
    assert_eq!(bob[0].seed, 100);
    assert_eq!(bob[1].seed, 11);
    assert!(
        service
            .match_history(&player("erin"), None)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn replay_verifies_the_recorded_digest() {
    let service = common::service();
    let record = kyuu_vs_shimi(&service, 77);

    // Training after the match does not change what gets replayed.
    let mut kyuu = service.character(&character("alice-kyuu")).unwrap();
    kyuu.stats = StatBlock::uniform(999);
    service.save_character(&kyuu).unwrap();

    let outcome = service.replay(record.id).unwrap();
    assert_eq!(hex::encode(outcome.digest), record.digest);
    assert_eq!(outcome.steps, record.steps);

    let missing = MatchId::new();
    assert!(matches!(
        service.replay(missing),
        Err(RuntimeError::MatchNotFound(id)) if id == missing
    ));
}

#[test]
fn replay_reports_a_tampered_record() {
    let content = common::content();
    let matches = Arc::new(InMemoryMatchRepository::new());
    let service = BattleService::builder()
        .oracles(OracleManager::from_content(&content))
        .matches(matches.clone())
        .build()
        .unwrap();
    for seed in &content.characters {
        let base = content.base_character(&seed.base).unwrap();
        service
            .save_character(&runtime::CharacterRecord::from_seed(seed, base))
            .unwrap();
    }

    let mut forged = kyuu_vs_shimi(&service, 5);
    forged.id = MatchId::new();
    forged.digest = "00".repeat(32);
    matches.save(&forged).unwrap();

    assert!(matches!(
        service.replay(forged.id),
        Err(RuntimeError::ReplayMismatch { .. })
    ));
}

#[test]
fn challenge_pits_active_characters() {
    let service = common::service();
    let record = service.challenge(&player("alice"), &player("bob")).unwrap();

    assert_eq!(record.challenger.character, character("alice-kyuu"));
    assert_eq!(record.opponent.character, character("bob-shimi"));
    assert!(matches!(
        service.challenge(&player("alice"), &player("alice")),
        Err(RuntimeError::SelfChallenge(_))
    ));
    assert!(matches!(
        service.challenge(&player("alice"), &player("dave")),
        Err(RuntimeError::NoActiveCharacter(p)) if p == player("dave")
    ));
}

#[test]
fn switching_the_active_character_clears_the_previous_one() {
    let service = common::service();
    service
        .set_active_character(&player("alice"), &character("alice-ryn"))
        .unwrap();

    let active: Vec<_> = service
        .collection(&player("alice"))
        .unwrap()
        .into_iter()
        .filter(|record| record.active)
        .map(|record| record.id)
        .collect();
    assert_eq!(active, vec![character("alice-ryn")]);

    assert!(matches!(
        service.set_active_character(&player("carol"), &character("carol-ryn")),
        Err(RuntimeError::NotLocked { .. })
    ));
}

#[test]
fn concurrent_switches_leave_one_active_character() {
    let service = common::service();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            let pick = if i % 2 == 0 { "alice-kyuu" } else { "alice-ryn" };
            thread::spawn(move || {
                for _ in 0..50 {
                    service
                        .set_active_character(&player("alice"), &character(pick))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let active = service
        .collection(&player("alice"))
        .unwrap()
        .into_iter()
        .filter(|record| record.active)
        .count();
    assert_eq!(active, 1);
    assert!(service.active_character(&player("alice")).is_ok());
}

#[test]
fn fixed_seed_makes_fresh_battles_repeatable() {
    let service = common::service_with(client_bootstrap::ArenaConfig {
        fixed_seed: Some(31337),
        ..Default::default()
    });
    let first = service.challenge(&player("alice"), &player("bob")).unwrap();
    let second = service.challenge(&player("alice"), &player("bob")).unwrap();

    assert_eq!(first.seed, 31337);
    assert_eq!(first.digest, second.digest);
}

#[test]
fn battles_run_concurrently() {
    let service = common::service();
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let service = Arc::clone(&service);
            thread::spawn(move || kyuu_vs_shimi(&service, seed).digest)
        })
        .collect();
    let digests: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(service.match_count().unwrap(), 4);
    assert_eq!(digests[0], kyuu_vs_shimi(&service, 0).digest);
}

#[test]
fn match_records_serialize_to_json() {
    let service = common::service();
    let record = kyuu_vs_shimi(&service, 3);

    let json = serde_json::to_string(&record).unwrap();
    let back: MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
