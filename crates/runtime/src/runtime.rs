//! Battle service: the arena's entry point for running and recording PvP
//! matches.
//!
//! The service validates a challenge against the character store, snapshots
//! both builds, runs the pure engine with a fresh seed, appends the result to
//! the match history and announces it on the event bus.

use std::sync::Arc;

use tokio::sync::broadcast;

use game_core::{
    ArchetypeRegistry, BaseCharacter, BattleConfig, BattleEngine, BattleOutcome, CharacterBuild,
    CharacterId, PcgRng, PlayerId, RosterOracle,
};

use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, MatchEvent, MatchSummary};
use crate::oracle::OracleManager;
use crate::repository::{
    CharacterRecord, CharacterRepository, InMemoryCharacterRepository, InMemoryMatchRepository,
    MatchId, MatchRecord, MatchRepository,
};

/// Runtime configuration shared by the battle service.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Default number of matches returned by history queries.
    pub history_limit: usize,
    pub event_buffer_size: usize,
    /// Seed every battle with this value instead of a fresh random one.
    pub fixed_seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            event_buffer_size: 100,
            fixed_seed: None,
        }
    }
}

/// Runs, records and replays PvP matches.
///
/// The service is synchronous; share it behind an [`Arc`] to serve concurrent
/// requests. Battles never block each other beyond the repository locks.
pub struct BattleService {
    engine: BattleEngine,
    oracles: OracleManager,
    characters: Arc<dyn CharacterRepository>,
    matches: Arc<dyn MatchRepository>,
    events: EventBus,
    config: RuntimeConfig,
}

impl BattleService {
    pub fn builder() -> BattleServiceBuilder {
        BattleServiceBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Subscribe to match events.
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.events.subscribe()
    }

    /// Simulates and records a battle between two named characters.
    ///
    /// Both characters must exist, be locked and belong to the named players.
    /// Every check happens before the engine runs.
    pub fn simulate_battle(
        &self,
        challenger: &PlayerId,
        opponent: &PlayerId,
        challenger_character: &CharacterId,
        opponent_character: &CharacterId,
    ) -> Result<MatchRecord> {
        let seed = self.config.fixed_seed.unwrap_or_else(rand::random);
        self.simulate_with_seed(
            challenger,
            opponent,
            challenger_character,
            opponent_character,
            seed,
        )
    }

    /// Like [`simulate_battle`](Self::simulate_battle) with an explicit seed.
    pub fn simulate_with_seed(
        &self,
        challenger: &PlayerId,
        opponent: &PlayerId,
        challenger_character: &CharacterId,
        opponent_character: &CharacterId,
        seed: u64,
    ) -> Result<MatchRecord> {
        let challenger_build = self.resolve_build(challenger, challenger_character)?;
        let opponent_build = self.resolve_build(opponent, opponent_character)?;
        self.record(challenger_build, opponent_build, seed)
    }

    /// Battles the active characters of two players.
    pub fn challenge(&self, challenger: &PlayerId, opponent: &PlayerId) -> Result<MatchRecord> {
        if challenger == opponent {
            tracing::warn!(player = %challenger, "rejected self-challenge");
            return Err(RuntimeError::SelfChallenge(challenger.clone()));
        }
        let challenger_character = self.active_character(challenger)?;
        let opponent_character = self.active_character(opponent)?;
        self.simulate_battle(
            challenger,
            opponent,
            &challenger_character.id,
            &opponent_character.id,
        )
    }

    /// Runs a battle between two builds without recording it.
    pub fn preview(
        &self,
        challenger: &CharacterBuild,
        opponent: &CharacterBuild,
        seed: u64,
    ) -> Result<BattleOutcome> {
        let mut rng = PcgRng::from_seed(seed);
        Ok(self.engine.simulate(challenger, opponent, &mut rng)?)
    }

    /// Re-simulates a recorded match and checks the step digest.
    pub fn replay(&self, match_id: MatchId) -> Result<BattleOutcome> {
        let record = self
            .matches
            .get(match_id)?
            .ok_or(RuntimeError::MatchNotFound(match_id))?;

        let outcome = self.preview(&record.challenger, &record.opponent, record.seed)?;
        let replayed = hex::encode(outcome.digest);
        let verified = replayed == record.digest;
        self.events.publish(MatchEvent::Replayed { match_id, verified });

        if !verified {
            tracing::warn!(%match_id, recorded = %record.digest, %replayed, "replay diverged");
            return Err(RuntimeError::ReplayMismatch {
                match_id,
                recorded: record.digest,
                replayed,
            });
        }
        tracing::debug!(%match_id, "replay verified");
        Ok(outcome)
    }

    pub fn get_match(&self, match_id: MatchId) -> Result<MatchRecord> {
        self.matches
            .get(match_id)?
            .ok_or(RuntimeError::MatchNotFound(match_id))
    }

    /// Matches involving `player`, newest first. `None` uses the configured
    /// history limit.
    pub fn match_history(
        &self,
        player: &PlayerId,
        limit: Option<usize>,
    ) -> Result<Vec<MatchRecord>> {
        let limit = limit.unwrap_or(self.config.history_limit);
        Ok(self.matches.list_for_player(player, limit)?)
    }

    pub fn match_count(&self) -> Result<usize> {
        Ok(self.matches.count()?)
    }

    pub fn character(&self, id: &CharacterId) -> Result<CharacterRecord> {
        self.characters
            .get(id)?
            .ok_or_else(|| RuntimeError::CharacterNotFound(id.clone()))
    }

    /// Every character owned by `player`.
    pub fn collection(&self, player: &PlayerId) -> Result<Vec<CharacterRecord>> {
        Ok(self.characters.list_for_player(player)?)
    }

    pub fn active_character(&self, player: &PlayerId) -> Result<CharacterRecord> {
        self.characters
            .active_for_player(player)?
            .ok_or_else(|| RuntimeError::NoActiveCharacter(player.clone()))
    }

    /// Selects the player's active PvP character, clearing any previous one.
    pub fn set_active_character(
        &self,
        player: &PlayerId,
        character: &CharacterId,
    ) -> Result<CharacterRecord> {
        self.owned_battle_ready(player, character)?;
        let selected = self
            .characters
            .set_active(player, character)?
            .ok_or_else(|| RuntimeError::CharacterNotFound(character.clone()))?;

        tracing::info!(%player, %character, "active PvP character set");
        Ok(selected)
    }

    /// Insert or replace a character in the store.
    pub fn save_character(&self, record: &CharacterRecord) -> Result<()> {
        Ok(self.characters.save(record)?)
    }

    pub fn roster(&self) -> Vec<BaseCharacter> {
        self.oracles.roster().all_characters()
    }

    /// Snapshot of a character as a battle input, after every precondition.
    pub fn resolve_build(
        &self,
        player: &PlayerId,
        character: &CharacterId,
    ) -> Result<CharacterBuild> {
        let record = self.owned_battle_ready(player, character)?;
        let base = self
            .oracles
            .roster()
            .base_character(&record.base)
            .ok_or_else(|| RuntimeError::BaseCharacterNotFound {
                character: record.id.clone(),
                base: record.base.clone(),
            })
            .inspect_err(|err| tracing::warn!(%err, "rejected battle request"))?;
        Ok(record.to_build(&base))
    }

    fn owned_battle_ready(
        &self,
        player: &PlayerId,
        character: &CharacterId,
    ) -> Result<CharacterRecord> {
        let record = self.character(character)?;
        let result = if &record.owner != player {
            Err(RuntimeError::OwnershipMismatch {
                character: record.id.clone(),
                owner: record.owner.clone(),
                claimed: player.clone(),
            })
        } else if !record.status.can_battle() {
            Err(RuntimeError::NotLocked {
                character: record.id.clone(),
                status: record.status,
            })
        } else {
            Ok(record)
        };
        result.inspect_err(|err| tracing::warn!(%err, "rejected battle request"))
    }

    fn record(
        &self,
        challenger: CharacterBuild,
        opponent: CharacterBuild,
        seed: u64,
    ) -> Result<MatchRecord> {
        let outcome = self.preview(&challenger, &opponent, seed)?;
        let record = MatchRecord::from_outcome(challenger, opponent, seed, outcome);
        self.matches.save(&record)?;

        tracing::info!(
            match_id = %record.id,
            challenger = %record.challenger.character,
            opponent = %record.opponent.character,
            winner = record.winner.as_ref().map(|w| w.as_str()).unwrap_or("draw"),
            rounds = record.rounds,
            seed,
            "match recorded"
        );
        self.events
            .publish(MatchEvent::Recorded(MatchSummary::from(&record)));
        Ok(record)
    }
}

/// Builder for [`BattleService`].
pub struct BattleServiceBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    registry: Option<ArchetypeRegistry>,
    characters: Option<Arc<dyn CharacterRepository>>,
    matches: Option<Arc<dyn MatchRepository>>,
}

impl BattleServiceBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            registry: None,
            characters: None,
            matches: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Replace the default archetype registry.
    pub fn registry(mut self, registry: ArchetypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Character store (defaults to an empty in-memory store).
    pub fn characters(mut self, characters: Arc<dyn CharacterRepository>) -> Self {
        self.characters = Some(characters);
        self
    }

    /// Match recorder (defaults to an empty in-memory history).
    pub fn matches(mut self, matches: Arc<dyn MatchRepository>) -> Self {
        self.matches = Some(matches);
        self
    }

    pub fn build(self) -> Result<BattleService> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        let mut engine = BattleEngine::builder()
            .config(self.config.battle.clone())
            .items(oracles.items.clone());
        if let Some(registry) = self.registry {
            engine = engine.registry(registry);
        }
        let engine = engine.build()?;

        Ok(BattleService {
            engine,
            oracles,
            characters: self
                .characters
                .unwrap_or_else(|| Arc::new(InMemoryCharacterRepository::new())),
            matches: self
                .matches
                .unwrap_or_else(|| Arc::new(InMemoryMatchRepository::new())),
            events: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
        })
    }
}
