use std::sync::Arc;

use super::*;
use crate::ability::testing::{TestItems, build};
use crate::ability::{CharmDrainSnowball, RegenerationSealGated, TransformMultiGate};
use crate::combat::CheckKind;
use crate::record::StepPayload;
use crate::env::{FixedRng, PcgRng, ScriptedRng};
use crate::stats::{Attribute, StatBlock};

fn engine() -> BattleEngine {
    BattleEngine::builder()
        .items(Arc::new(TestItems::standard()))
        .build()
        .unwrap()
}

fn kyuu() -> CharacterBuild {
    build(
        "Kyuu",
        RegenerationSealGated::ID,
        StatBlock {
            str: 150,
            agi: 250,
            sta: 400,
            mag: 180,
            wit: 220,
            wil: 350,
            cha: 200,
            luk: 450,
        },
    )
}

fn bruiser(str: u32, wit: u32) -> CharacterBuild {
    build(
        "Kaji",
        "basic",
        StatBlock {
            str,
            agi: 200,
            sta: 250,
            mag: 100,
            wit,
            wil: 100,
            cha: 100,
            luk: 100,
        },
    )
}

#[test]
fn stalemate_ends_in_a_single_draw_at_the_round_cap() {
    let a = build("Yura", "basic", StatBlock::uniform(200));
    let b = build("Pon", "basic", StatBlock::uniform(200));
    let outcome = engine()
        .simulate(&a, &b, &mut FixedRng::fail_all())
        .unwrap();

    assert!(outcome.is_draw());
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.rounds, 10);
    assert_eq!(outcome.count(StepKind::Draw), 1);
    assert_eq!(outcome.steps.last().map(|s| s.kind), Some(StepKind::Draw));
    assert!(outcome.steps.iter().all(|s| s.round <= 10));
    // initiative + 2 attacks per round + draw
    assert_eq!(outcome.steps.len(), 1 + 20 + 1);
}

#[test]
fn regenerator_is_never_knocked_out() {
    // Every check favors the strictly higher magnitude.
    let challenger = build(
        "Kaji",
        "basic",
        StatBlock::uniform(150)
            .with(Attribute::Strength, 300)
            .with(Attribute::Agility, 200)
            .with(Attribute::Stamina, 250),
    );
    let outcome = engine()
        .simulate(&challenger, &kyuu(), &mut FixedRng::always(0.5))
        .unwrap();

    assert_eq!(outcome.count(StepKind::Ko), 0);
    if outcome.winning_side == Some(Side::Challenger) {
        assert!(outcome.position(StepKind::SealAttempt) < outcome.position(StepKind::Victory));
    }
}

#[test]
fn regenerator_falls_only_to_a_successful_seal() {
    let challenger = bruiser(600, 500);
    let outcome = engine()
        .simulate(&challenger, &kyuu(), &mut FixedRng::always(0.5))
        .unwrap();

    // Kyuu starts (agility 250 > 200). Its attacks (180 vs 250) miss; Kaji's
    // (600 vs 400) land for min(120, 90) = 90 against 40 regeneration per
    // round, downing Kyuu in round 8. Seal: 600 vs 570 succeeds.
    assert_eq!(outcome.winning_side, Some(Side::Challenger));
    assert_eq!(outcome.winner, Some(challenger.player.clone()));
    assert_eq!(outcome.rounds, 8);
    assert_eq!(outcome.count(StepKind::SealAttempt), 1);
    assert_eq!(outcome.count(StepKind::Ko), 0);
    assert!(outcome.position(StepKind::SealAttempt) < outcome.position(StepKind::Victory));
    assert_eq!(outcome.steps.last().map(|s| s.kind), Some(StepKind::Victory));
    assert_eq!(outcome.count(StepKind::Regeneration), 8);
}

#[test]
fn failed_seals_keep_the_regenerator_alive_until_a_draw() {
    let challenger = build(
        "Kaji",
        "basic",
        StatBlock::uniform(100)
            .with(Attribute::Strength, 999)
            .with(Attribute::Stamina, 999),
    );
    let mut rng = FixedRng::succeed_all().with(CheckKind::Seal, FixedRng::ALWAYS_FAIL);
    let outcome = engine().simulate(&challenger, &kyuu(), &mut rng).unwrap();

    // Kaji hits for 120 each round, Kyuu regenerates 40: downed in rounds 5, 7 and 9.
    assert!(outcome.is_draw());
    assert_eq!(outcome.count(StepKind::SealAttempt), 3);
    assert_eq!(outcome.count(StepKind::RegenerationSave), 3);
    assert_eq!(outcome.count(StepKind::Victory), 0);
    assert_eq!(outcome.count(StepKind::Draw), 1);

    for step in outcome
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::RegenerationSave)
    {
        assert_eq!(step.payload, Some(StepPayload::Restore { hp: 120 }));
    }
}

#[test]
fn knockout_of_a_plain_fighter_ends_the_battle() {
    let challenger = build("Kaji", "basic", StatBlock::uniform(100).with(Attribute::Strength, 999));
    let opponent = build("Yura", "basic", StatBlock::uniform(100));
    let mut rng = FixedRng::succeed_all();
    let outcome = engine().simulate(&challenger, &opponent, &mut rng).unwrap();

    // Kaji goes first and hits for min(30, 149) = 30; Yura answers for min(30, 15) = 15.
    assert_eq!(outcome.winning_side, Some(Side::Challenger));
    assert_eq!(outcome.rounds, 4);
    assert_eq!(outcome.count(StepKind::Ko), 1);
    assert_eq!(outcome.steps.last().unwrap().description, "Yura is defeated");
    assert_eq!(outcome.opponent_hp, 0);
}

#[test]
fn transform_sweep_wins_in_the_first_round() {
    let shimi = build("Shimi", TransformMultiGate::ID, StatBlock::uniform(250));
    let mut rng = FixedRng::succeed_all().with(CheckKind::AntiFlinch, FixedRng::ALWAYS_FAIL);
    let outcome = engine().simulate(&shimi, &kyuu(), &mut rng).unwrap();

    assert_eq!(outcome.winning_side, Some(Side::Challenger));
    assert_eq!(outcome.rounds, 1);
    assert_eq!(outcome.count(StepKind::BasicAttack), 0);
    assert_eq!(outcome.count(StepKind::TransformGate), 5);
    assert_eq!(
        outcome.steps.last().map(|s| s.kind),
        Some(StepKind::SignatureVictory)
    );
}

#[test]
fn item_stat_modifiers_are_applied_once_at_battle_start() {
    let shimi = build("Shimi", TransformMultiGate::ID, StatBlock::uniform(250));
    let guarded = kyuu().with_item("sealing_threads");
    let mut rng = FixedRng::succeed_all().with(CheckKind::AntiFlinch, FixedRng::ALWAYS_FAIL);
    let outcome = engine().simulate(&shimi, &guarded, &mut rng).unwrap();

    let will = outcome
        .steps
        .iter()
        .filter_map(|s| s.check())
        .find(|c| c.kind == CheckKind::TransformWill)
        .copied()
        .unwrap();
    // will 350 -> 385 at init; (385 + 220) = 605 -> 605 + floor(90.75) = 695
    assert_eq!(will.defender, 695);
    assert_eq!(outcome.count(StepKind::ItemEffect), 1);
}

#[test]
fn stamina_items_do_not_raise_max_hp() {
    let a = build("Yura", "basic", StatBlock::uniform(200));
    let b = build("Pon", "basic", StatBlock::uniform(200).with(Attribute::Stamina, 400))
        .with_item("iron_heart");
    let outcome = engine()
        .simulate(&a, &b, &mut FixedRng::fail_all())
        .unwrap();

    assert!(outcome.is_draw());
    assert_eq!(outcome.opponent_hp, 400);
    assert_eq!(outcome.challenger_hp, 200);
}

#[test]
fn every_logged_check_consumes_exactly_one_draw() {
    let dreymi = build(
        "Dreymi",
        CharmDrainSnowball::ID,
        StatBlock {
            str: 180,
            agi: 220,
            sta: 280,
            mag: 320,
            wit: 240,
            wil: 300,
            cha: 480,
            luk: 320,
        },
    );
    let mut rng = PcgRng::from_seed(2024);
    let outcome = engine().simulate(&dreymi, &kyuu(), &mut rng).unwrap();

    let checks = outcome.steps.iter().filter(|s| s.check().is_some()).count();
    assert_eq!(checks as u64, rng.draws());
}

#[test]
fn same_seed_replays_identically() {
    let shimi = build(
        "Shimi",
        TransformMultiGate::ID,
        StatBlock {
            str: 200,
            agi: 350,
            sta: 200,
            mag: 180,
            wit: 280,
            wil: 250,
            cha: 120,
            luk: 300,
        },
    );
    let engine = engine();
    let first = engine
        .simulate(&shimi, &kyuu(), &mut PcgRng::from_seed(77))
        .unwrap();
    let second = engine
        .simulate(&shimi, &kyuu(), &mut PcgRng::from_seed(77))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.digest, log_digest(&first.steps));
    assert!(first.rounds <= 10);
}

#[test]
fn invalid_build_is_rejected_before_any_draw() {
    let broken = build("Ghost", "basic", StatBlock::uniform(100).with(Attribute::Luck, 0));
    let mut rng = ScriptedRng::new(vec![0.3]);
    let result = engine().simulate(&broken, &kyuu(), &mut rng);

    assert!(matches!(
        result,
        Err(BattleError::AttributeOutOfRange {
            attribute: Attribute::Luck,
            value: 0,
            ..
        })
    ));
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn narration_names_both_combatants() {
    let a = build("Yura", "basic", StatBlock::uniform(200));
    let outcome = engine()
        .simulate(&a, &kyuu(), &mut PcgRng::from_seed(5))
        .unwrap();

    assert!(
        outcome
            .narration
            .starts_with("**Battle Chronicle: Yura vs Kyuu**")
    );
    // header + blank line + one line per step
    assert_eq!(outcome.narration.lines().count(), outcome.steps.len() + 2);
}

#[test]
fn builder_rejects_invalid_config() {
    let result = BattleEngine::builder()
        .config(BattleConfig::new().with_max_rounds(0))
        .build();
    assert!(result.is_err());
}
