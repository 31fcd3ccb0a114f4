#![allow(dead_code)]

use std::sync::Arc;

use client_bootstrap::{ArenaBuilder, ArenaConfig, InlineOracleFactory};
use game_content::{CharacterSeed, ContentBundle};
use game_core::{
    Attribute, BaseCharacter, BattleConfig, CharacterStatus, ItemDefinition, ItemEffect,
    StatBlock,
};
use runtime::BattleService;

fn base(id: &str, name: &str, signature: &str, stats: StatBlock) -> BaseCharacter {
    BaseCharacter {
        id: id.into(),
        name: name.into(),
        description: String::new(),
        signature: signature.into(),
        base_stats: stats,
    }
}

fn seed(id: &str, owner: &str, base: &str, status: CharacterStatus, active: bool) -> CharacterSeed {
    CharacterSeed {
        id: id.into(),
        owner: owner.into(),
        base: base.into(),
        status,
        stats: None,
        items: Vec::new(),
        active,
    }
}

pub fn content() -> ContentBundle {
    let threads = ItemDefinition::new("sealing_threads", "Sealing Threads")
        .with_effect(ItemEffect::StatPercent {
            stat: Attribute::Will,
            percent: 10,
        })
        .with_effect(ItemEffect::WillResistance { percent: 15 })
        .with_effect(ItemEffect::SealBoost { percent: 15 });

    let mut kyuu = seed("alice-kyuu", "alice", "kyuu", CharacterStatus::Locked, true);
    kyuu.items.push("sealing_threads".into());

    ContentBundle {
        config: BattleConfig::default(),
        roster: vec![
            base(
                "kyuu",
                "Kyuu",
                "regeneration_seal_gated",
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
            ),
            base(
                "shimi",
                "Shimi",
                "transform_multi_gate",
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
            ),
            base(
                "ryn",
                "Ryn",
                "physical_enhancement_tank",
                StatBlock {
                    str: 480,
                    agi: 280,
                    sta: 450,
                    mag: 200,
                    wit: 220,
                    wil: 380,
                    cha: 180,
                    luk: 220,
                },
            ),
        ],
        items: vec![threads],
        characters: vec![
            kyuu,
            seed("alice-ryn", "alice", "ryn", CharacterStatus::Locked, false),
            seed("bob-shimi", "bob", "shimi", CharacterStatus::Locked, true),
            seed("carol-ryn", "carol", "ryn", CharacterStatus::Training, false),
            seed("dave-ryn", "dave", "ryn", CharacterStatus::Locked, false),
        ],
    }
}

pub fn service_with(config: ArenaConfig) -> Arc<BattleService> {
    ArenaBuilder::new(config)
        .oracle_factory(InlineOracleFactory::new(content()))
        .build()
        .expect("arena should build from inline content")
        .service
}

pub fn service() -> Arc<BattleService> {
    service_with(ArenaConfig::default())
}
