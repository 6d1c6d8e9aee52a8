//! Region identification.
//!
//! Regions are referenced everywhere by [`RegionId`]: player positions,
//! player-deck cards, wildfire-deck cards and wildfire state all carry the
//! id rather than a pointer into the map.
//!
//! ```
//! use wildfire_engine::core::{RegionGroup, RegionId};
//!
//! let am = RegionId::new("AM");
//! assert_eq!(am.as_str(), "AM");
//! assert_eq!(RegionGroup::ALL.len(), 5);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a region (a state or territory on the map).
///
/// Player cards and wildfire cards are region ids too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Create a region id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the five fixed geographic zones.
///
/// Used by the Governor's movement bonus and for moratorium scoping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionGroup {
    North,
    Northeast,
    CenterWest,
    Southeast,
    South,
}

impl RegionGroup {
    /// All groups in map order.
    pub const ALL: [RegionGroup; 5] = [
        RegionGroup::North,
        RegionGroup::Northeast,
        RegionGroup::CenterWest,
        RegionGroup::Southeast,
        RegionGroup::South,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RegionGroup::North => "North",
            RegionGroup::Northeast => "Northeast",
            RegionGroup::CenterWest => "Center-West",
            RegionGroup::Southeast => "Southeast",
            RegionGroup::South => "South",
        }
    }
}

impl std::fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_id_display() {
        let id = RegionId::from("DF");
        assert_eq!(format!("{}", id), "DF");
        assert_eq!(id, RegionId::new(String::from("DF")));
    }

    #[test]
    fn test_region_id_serializes_as_string() {
        let json = serde_json::to_string(&RegionId::new("SP")).unwrap();
        assert_eq!(json, "\"SP\"");

        let back: RegionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "SP");
    }

    #[test]
    fn test_group_names() {
        assert_eq!(RegionGroup::CenterWest.to_string(), "Center-West");
        let json = serde_json::to_string(&RegionGroup::Northeast).unwrap();
        assert_eq!(json, "\"Northeast\"");
    }
}
