//! Region graph: read-only adjacency lookup.
//!
//! Loaded once from a static region table and never mutated afterwards.
//! Lookups of unknown ids are a normal outcome (`None`, empty neighbor
//! list, not adjacent), never an error.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ConfigError, RegionGroup, RegionId};

use super::brazil;

/// A node of the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub group: RegionGroup,
    pub name: String,
    /// Neighbor ids as listed in the table.
    pub neighbors: SmallVec<[RegionId; 6]>,
}

impl Region {
    pub fn new(
        id: impl Into<RegionId>,
        group: RegionGroup,
        name: impl Into<String>,
        neighbors: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            group,
            name: name.into(),
            neighbors: neighbors.iter().map(|&n| RegionId::new(n)).collect(),
        }
    }
}

/// Immutable region table with id lookup.
///
/// ```
/// use wildfire_engine::core::RegionId;
/// use wildfire_engine::map::RegionGraph;
///
/// let graph = RegionGraph::brazil();
/// let df = RegionId::new("DF");
/// assert!(graph.are_adjacent(&df, &RegionId::new("GO")));
/// assert!(!graph.are_adjacent(&df, &RegionId::new("AM")));
/// assert!(graph.neighbors(&RegionId::new("XX")).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RegionGraph {
    regions: Vec<Region>,
    index: FxHashMap<RegionId, usize>,
}

impl RegionGraph {
    /// Build a graph from a region table.
    ///
    /// Rejects empty tables, duplicate ids and neighbors that name an
    /// unknown region. Adjacency is kept exactly as listed.
    pub fn new(regions: Vec<Region>) -> Result<Self, ConfigError> {
        if regions.is_empty() {
            return Err(ConfigError::EmptyMap);
        }

        let mut index = FxHashMap::default();
        for (i, region) in regions.iter().enumerate() {
            if index.insert(region.id.clone(), i).is_some() {
                return Err(ConfigError::DuplicateRegion(region.id.clone()));
            }
        }

        for region in &regions {
            if let Some(neighbor) = region.neighbors.iter().find(|n| !index.contains_key(*n)) {
                return Err(ConfigError::UnknownNeighbor {
                    region: region.id.clone(),
                    neighbor: neighbor.clone(),
                });
            }
        }

        Ok(Self { regions, index })
    }

    /// Parse a region table from a JSON array of
    /// `{id, group, name, neighbors}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let regions: Vec<Region> = serde_json::from_str(json)?;
        Self::new(regions)
    }

    /// The built-in 26-region map of Brazil.
    #[must_use]
    pub fn brazil() -> Self {
        let regions = brazil::regions();
        let index = regions
            .iter()
            .enumerate()
            .map(|(i, region)| (region.id.clone(), i))
            .collect();
        Self { regions, index }
    }

    /// Look up a region.
    #[must_use]
    pub fn get(&self, id: &RegionId) -> Option<&Region> {
        self.index.get(id).map(|&i| &self.regions[i])
    }

    /// Check whether a region exists.
    #[must_use]
    pub fn contains(&self, id: &RegionId) -> bool {
        self.index.contains_key(id)
    }

    /// Neighbors of a region; empty if the region is unknown.
    #[must_use]
    pub fn neighbors(&self, id: &RegionId) -> &[RegionId] {
        self.get(id).map_or(&[], |region| region.neighbors.as_slice())
    }

    /// Whether `b` is listed as a neighbor of `a`. False if either is
    /// unknown.
    #[must_use]
    pub fn are_adjacent(&self, a: &RegionId, b: &RegionId) -> bool {
        self.contains(b) && self.neighbors(a).contains(b)
    }

    /// Region group of a region.
    #[must_use]
    pub fn group_of(&self, id: &RegionId) -> Option<RegionGroup> {
        self.get(id).map(|region| region.group)
    }

    /// Whether both regions exist and share a region group.
    #[must_use]
    pub fn same_group(&self, a: &RegionId, b: &RegionId) -> bool {
        match (self.group_of(a), self.group_of(b)) {
            (Some(ga), Some(gb)) => ga == gb,
            _ => false,
        }
    }

    /// All regions in table order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All region ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = &RegionId> {
        self.regions.iter().map(|region| &region.id)
    }

    /// Regions belonging to a group, in table order.
    pub fn in_group(&self, group: RegionGroup) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |region| region.group == group)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
