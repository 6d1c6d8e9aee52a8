//! Game rules and the engine that runs them.
//!
//! - `Engine`: Owns the game state and runs the round pipeline
//! - `FireSpread`: Ignition, spread and the wildfire phase
//! - `ActionRules`: Legality and effects of player actions
//! - `outcome`: Win/loss evaluation
//!
//! The rule types borrow the map and the rules configuration; only the
//! engine owns state.

pub mod actions;
pub mod engine;
pub mod outcome;
pub mod wildfire;

pub use actions::ActionRules;
pub use engine::Engine;
pub use wildfire::FireSpread;
