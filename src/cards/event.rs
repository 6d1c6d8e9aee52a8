//! Event cards and the event catalog.
//!
//! The catalog is a fixed multiset: duplicate entries weight how often an
//! event type turns up in a shuffled event deck.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Type of an event card.
///
/// Catalogs are external data, so unrecognized type names deserialize to
/// [`EventKind::Unknown`] instead of failing; resolving one is a logged
/// no-op.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Forces one extra wildfire draw.
    IntenseWildfire,
    /// Raises the fire track.
    ProlongedDrought,
    /// Douses one burning region and helps vegetation.
    BeneficialRain,
    /// Raises protection in one region.
    AwarenessCampaign,
    /// Grants extra actions to one player.
    EmergencyFunding,
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            EventKind::IntenseWildfire => "Intense Wildfire",
            EventKind::ProlongedDrought => "Prolonged Drought",
            EventKind::BeneficialRain => "Beneficial Rain",
            EventKind::AwarenessCampaign => "Awareness Campaign",
            EventKind::EmergencyFunding => "Emergency Funding",
            EventKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An event card: type plus flavor text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventCard {
    pub kind: EventKind,
    pub description: String,
}

impl EventCard {
    pub fn new(kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// The fixed multiset of event cards an event deck is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventCatalog {
    cards: Vec<EventCard>,
}

impl EventCatalog {
    /// Create a catalog from a list of cards.
    #[must_use]
    pub fn new(cards: Vec<EventCard>) -> Self {
        Self { cards }
    }

    /// Parse a catalog from a JSON array of `{kind, description}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The standard nine-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        use EventKind::*;

        Self::new(vec![
            EventCard::new(IntenseWildfire, "An unexpected wildfire breaks out in a new location."),
            EventCard::new(ProlongedDrought, "The risk of new wildfires rises in every region."),
            EventCard::new(BeneficialRain, "Rain lowers the fire in one location and helps the vegetation."),
            EventCard::new(AwarenessCampaign, "Environmental protection rises in one location."),
            EventCard::new(EmergencyFunding, "One player gains an extra action this turn."),
            EventCard::new(BeneficialRain, "Rain lowers the fire in one location and helps the vegetation."),
            EventCard::new(AwarenessCampaign, "Environmental protection rises in one location."),
            EventCard::new(EmergencyFunding, "Unexpected funding speeds up the firefighting effort."),
            EventCard::new(ProlongedDrought, "Adverse weather deepens the drought."),
        ])
    }

    /// All cards, in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[EventCard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of copies of an event type.
    #[must_use]
    pub fn count(&self, kind: &EventKind) -> usize {
        self.cards.iter().filter(|card| &card.kind == kind).count()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
