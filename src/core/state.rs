//! Game state.
//!
//! ## GameState
//!
//! The single aggregate mutated by the engine:
//! - Players (hands, positions, remaining actions)
//! - Per-region wildfire state
//! - Player, wildfire and event deck/discard pairs
//! - Global tracks, turn counter, phase and outcome
//! - Prevention centers, moratoriums and action history
//!
//! Collections use `im` persistent data structures, so handing a clone to
//! the presentation layer is O(1) and the clone shares nothing mutable with
//! the engine's copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::player::{Player, PlayerId};
use super::region::{RegionGroup, RegionId};
use crate::cards::{EventCard, Pile};

/// Fire and protection metrics of one region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildfireState {
    pub region: RegionId,
    /// 0 = no fire, max (3 by default) = critical.
    pub fire_level: u8,
    /// 0..=100; reduces the chance of natural escalation.
    pub protection_level: u8,
    /// 0..=100; stored for display only.
    pub affected_population: u8,
}

impl WildfireState {
    /// A region with no fire and no protection.
    #[must_use]
    pub fn calm(region: RegionId) -> Self {
        Self {
            region,
            fire_level: 0,
            protection_level: 0,
            affected_population: 0,
        }
    }

    #[must_use]
    pub fn is_burning(&self) -> bool {
        self.fire_level > 0
    }
}

/// Stage of the round currently running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game started yet.
    Setup,
    /// Players take actions, seat by seat.
    PlayerActions,
    CardDraw,
    Wildfire,
    Event,
    VegetationUpdate,
    /// The game is over; see `outcome`.
    Ended,
}

/// Result of a finished game. The game is cooperative: everyone wins or
/// everyone loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// No fire on the board and vegetation recovered.
    FiresControlled,
    /// Every region group is under moratorium.
    AllGroupsProtected,
    TurnLimit,
    FireTrackMaxed,
    VegetationLost,
    PlayerDeckExhausted,
}

impl EndReason {
    /// Outcome implied by this reason.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            EndReason::FiresControlled | EndReason::AllGroupsProtected => Outcome::Win,
            _ => Outcome::Loss,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in seat order.
    pub players: Vector<Player>,

    /// One entry per region, in map order.
    pub wildfires: Vector<WildfireState>,

    /// Player cards (region ids).
    pub player_cards: Pile<RegionId>,

    /// Wildfire cards (region ids).
    pub wildfire_cards: Pile<RegionId>,

    /// Event cards.
    pub event_cards: Pile<EventCard>,

    /// 0..=100, aggregate danger.
    pub fire_track: u32,

    /// 0..=100, 0 = total deforestation.
    pub vegetation_track: u32,

    /// Round number (starts at 1 once a game is started).
    pub turn_number: u32,

    pub phase: Phase,

    /// Seat whose action sub-phase is running.
    pub active_seat: Option<PlayerId>,

    pub ended: bool,
    pub outcome: Option<Outcome>,
    pub end_reason: Option<EndReason>,

    /// Regions with a prevention center.
    pub prevention_centers: Vector<RegionId>,

    /// Region groups under moratorium.
    pub moratoriums: Vector<RegionGroup>,

    /// Successful actions, in order.
    pub action_history: Vector<ActionRecord>,

    action_sequence: u32,
}

impl GameState {
    /// Empty pre-game state.
    #[must_use]
    pub fn new(initial_vegetation: u32) -> Self {
        Self {
            players: Vector::new(),
            wildfires: Vector::new(),
            player_cards: Pile::default(),
            wildfire_cards: Pile::default(),
            event_cards: Pile::default(),
            fire_track: 0,
            vegetation_track: initial_vegetation,
            turn_number: 0,
            phase: Phase::Setup,
            active_seat: None,
            ended: false,
            outcome: None,
            end_reason: None,
            prevention_centers: Vector::new(),
            moratoriums: Vector::new(),
            action_history: Vector::new(),
            action_sequence: 0,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // === Wildfires ===

    #[must_use]
    pub fn wildfire(&self, region: &RegionId) -> Option<&WildfireState> {
        self.wildfires.iter().find(|w| &w.region == region)
    }

    pub fn wildfire_mut(&mut self, region: &RegionId) -> Option<&mut WildfireState> {
        let index = self.wildfires.iter().position(|w| &w.region == region)?;
        self.wildfires.get_mut(index)
    }

    /// Fire level of a region; 0 for unknown regions.
    #[must_use]
    pub fn fire_level(&self, region: &RegionId) -> u8 {
        self.wildfire(region).map_or(0, |w| w.fire_level)
    }

    /// Sum of fire levels over all regions.
    #[must_use]
    pub fn total_fire(&self) -> u32 {
        self.wildfires.iter().map(|w| u32::from(w.fire_level)).sum()
    }

    /// Whether no region is burning.
    #[must_use]
    pub fn all_fires_out(&self) -> bool {
        self.wildfires.iter().all(|w| !w.is_burning())
    }

    /// Ids of burning regions, in map order.
    #[must_use]
    pub fn burning_regions(&self) -> Vec<RegionId> {
        self.wildfires
            .iter()
            .filter(|w| w.is_burning())
            .map(|w| w.region.clone())
            .collect()
    }

    // === Prevention ===

    #[must_use]
    pub fn has_center(&self, region: &RegionId) -> bool {
        self.prevention_centers.contains(region)
    }

    #[must_use]
    pub fn is_locked(&self, group: RegionGroup) -> bool {
        self.moratoriums.contains(&group)
    }

    // === Progression ===

    /// End the game. Terminal: later calls are ignored.
    pub fn finish(&mut self, reason: EndReason) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.outcome = Some(reason.outcome());
        self.end_reason = Some(reason);
        self.phase = Phase::Ended;
    }

    /// Record a successful action in history.
    pub fn record_action(&mut self, player: PlayerId, action: super::action::Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.action_history.push_back(ActionRecord {
            player,
            action,
            turn: self.turn_number,
            sequence,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Role};

    fn with_regions(ids: &[&str]) -> GameState {
        let mut state = GameState::new(100);
        for id in ids {
            state.wildfires.push_back(WildfireState::calm(RegionId::new(*id)));
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(100);
        assert_eq!(state.turn_number, 0);
        assert_eq!(state.phase, Phase::Setup);
        assert!(!state.ended);
        assert_eq!(state.outcome, None);
        assert_eq!(state.vegetation_track, 100);
    }

    #[test]
    fn test_wildfire_lookup() {
        let mut state = with_regions(&["A", "B"]);
        state.wildfire_mut(&RegionId::new("B")).unwrap().fire_level = 2;

        assert_eq!(state.fire_level(&RegionId::new("B")), 2);
        assert_eq!(state.fire_level(&RegionId::new("Z")), 0);
        assert_eq!(state.total_fire(), 2);
        assert_eq!(state.burning_regions(), vec![RegionId::new("B")]);
        assert!(!state.all_fires_out());
    }

    #[test]
    fn test_finish_is_terminal() {
        let mut state = GameState::new(100);
        state.finish(EndReason::TurnLimit);
        state.finish(EndReason::FiresControlled);

        assert!(state.ended);
        assert_eq!(state.outcome, Some(Outcome::Loss));
        assert_eq!(state.end_reason, Some(EndReason::TurnLimit));
        assert_eq!(state.phase, Phase::Ended);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = with_regions(&["A"]);
        state.players.push_back(Player::new(PlayerId::new(0), "Ana", Role::Governor, RegionId::new("A"), 4));

        let mut copy = state.clone();
        copy.wildfire_mut(&RegionId::new("A")).unwrap().fire_level = 3;
        copy.player_mut(PlayerId::new(0)).unwrap().actions_remaining = 0;

        assert_eq!(state.fire_level(&RegionId::new("A")), 0);
        assert_eq!(state.player(PlayerId::new(0)).unwrap().actions_remaining, 4);
    }

    #[test]
    fn test_record_action_sequence() {
        let mut state = GameState::new(100);
        state.turn_number = 2;
        state.record_action(PlayerId::new(0), Action::Plan);
        state.record_action(PlayerId::new(1), Action::FightFire);

        let sequences: Vec<_> = state.action_history.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
        assert_eq!(state.action_history[1].turn, 2);
    }
}
