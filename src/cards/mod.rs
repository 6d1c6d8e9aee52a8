//! Card system: decks, event cards, deck construction.
//!
//! ## Key Types
//!
//! - `Pile<T>`: A deck and its discard (draw front, discard back)
//! - `EventCard` / `EventKind`: Event definitions
//! - `EventCatalog`: Weighted multiset the event deck is built from
//! - `CardManager`: Builds shuffled decks from configuration data
//!
//! Player cards and wildfire cards carry no data beyond a region id, so
//! those decks are plain `Pile<RegionId>`.

pub mod deck;
pub mod event;
pub mod manager;

pub use deck::{shuffle, Draw, Pile};
pub use event::{EventCard, EventCatalog, EventKind};
pub use manager::CardManager;
