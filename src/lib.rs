//! # wildfire-engine
//!
//! Game-state engine for a cooperative wildfire containment board game
//! played on the map of Brazil.
//!
//! Players share one fate. Each holds a role with a special ability, moves
//! between connected regions, fights fires and trades cards. The team wins
//! by putting out every fire with the vegetation recovered; it loses when
//! the fire track maxes out, the vegetation is destroyed, the turn limit
//! is reached, or the player deck runs dry.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: The `Engine` owns the authoritative `GameState`.
//!    Callers only ever get snapshots.
//!
//! 2. **Injectable Randomness**: Every random decision goes through one
//!    `RandomSource`, so games replay exactly under a seed or a script.
//!
//! 3. **Configuration Over Constants**: The map, the event catalog and the
//!    rules constants are data supplied at construction.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`.
//!
//! - **No Errors For Expected Failures**: Illegal actions return `false`
//!   and explain themselves in the game log.
//!
//! ## Modules
//!
//! - `core`: Regions, players, state, actions, RNG, configuration, log
//! - `cards`: Deck/discard piles, shuffling, event cards
//! - `map`: Region graph and the built-in Brazilian map
//! - `effects`: Event resolution
//! - `rules`: The engine, wildfire spread, actions, win/loss evaluation

pub mod cards;
pub mod core;
pub mod effects;
pub mod map;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionKind, ActionRecord, ConfigError, EndReason, GameLog, GameRng,
    GameState, LogEntry, Outcome, Phase, Player, PlayerId, RandomSource, RegionGroup,
    RegionId, Role, RulesConfig, ScriptedRandom, WildfireState,
};

pub use crate::cards::{CardManager, Draw, EventCard, EventCatalog, EventKind, Pile};

pub use crate::map::{Region, RegionGraph};

pub use crate::effects::{DrawWildfire, EventResolver, LookupRegion, ResolverContext};

pub use crate::rules::{ActionRules, Engine, FireSpread};
