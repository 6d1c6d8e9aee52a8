//! Core engine types: regions, players, state, actions, RNG, configuration.
//!
//! These are the building blocks every other module works on. Rules are
//! tuned through `RulesConfig` rather than by modifying the core.

pub mod action;
pub mod config;
pub mod error;
pub mod log;
pub mod player;
pub mod region;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::RulesConfig;
pub use error::{ActionError, ConfigError};
pub use log::{GameLog, LogEntry};
pub use player::{Player, PlayerId, Role};
pub use region::{RegionGroup, RegionId};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use state::{EndReason, GameState, Outcome, Phase, WildfireState};
