//! Event effects.
//!
//! - `EventResolver`: Applies one event card to game state
//! - `DrawWildfire` / `LookupRegion`: Narrow capabilities the resolver is
//!   given instead of a handle on the engine
//! - `ResolverContext`: Bundles those capabilities with the rules
//!   constants, the random source and the game log

mod resolver;

pub use resolver::{DrawWildfire, EventResolver, LookupRegion, ResolverContext};
