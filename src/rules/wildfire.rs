//! Wildfire rules: ignition, spread and the wildfire phase.
//!
//! ## Spread
//!
//! A region that would escalate past the maximum fire level surges
//! instead: the fire track jumps and every neighbor escalates by one.
//! Neighbors already at the maximum surge in turn. The map has cycles, so
//! one surge carries a visited set; each region surges at most once per
//! chain and recursion depth is bounded by the number of regions.

use rustc_hash::FxHashSet;

use crate::cards::Draw;
use crate::core::{EndReason, GameLog, GameState, RandomSource, RegionId, RulesConfig};
use crate::effects::DrawWildfire;
use crate::map::RegionGraph;

use super::outcome;

/// Fire rules bound to a map and a rules configuration.
#[derive(Clone, Copy)]
pub struct FireSpread<'a> {
    graph: &'a RegionGraph,
    config: &'a RulesConfig,
}

impl<'a> FireSpread<'a> {
    pub fn new(graph: &'a RegionGraph, config: &'a RulesConfig) -> Self {
        Self { graph, config }
    }

    /// Draw one wildfire card, discard it and escalate the region it names.
    ///
    /// The discard is reshuffled into the deck first if the deck is empty.
    /// Returns the drawn region, or `None` if deck and discard are both
    /// empty.
    pub fn ignite<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        rng: &mut R,
        log: &mut GameLog,
    ) -> Option<RegionId> {
        let turn = state.turn_number;
        let region = match state.wildfire_cards.draw_recycling(rng) {
            Draw::Card { card, reshuffled } => {
                if reshuffled {
                    log.push(turn, "Wildfire deck empty, reshuffling the discard.");
                }
                card
            }
            Draw::Exhausted => {
                log.push(turn, "Wildfire deck and discard are empty, no wildfire drawn.");
                return None;
            }
        };
        state.wildfire_cards.discard(region.clone());

        if let Some(level) = self.escalate(state, &region, log) {
            log.push(turn, format!("New wildfire drawn in {}. Fire level: {}.", region, level));
        }
        Some(region)
    }

    /// Raise a region's fire by one level, or surge if it is already at
    /// the maximum.
    ///
    /// Returns the new level when the region was raised; `None` when it
    /// surged or is not on the board.
    pub fn escalate(&self, state: &mut GameState, region: &RegionId, log: &mut GameLog) -> Option<u8> {
        let level = state.wildfire(region)?.fire_level;
        if level < self.config.max_fire_level {
            let wildfire = state.wildfire_mut(region)?;
            wildfire.fire_level += 1;
            Some(wildfire.fire_level)
        } else {
            let mut visited = FxHashSet::default();
            self.spread(state, region, &mut visited, log);
            None
        }
    }

    /// Surge from a saturated region.
    ///
    /// Raises the fire track by the surge amount once, then escalates every
    /// neighbor; saturated neighbors surge recursively with the same
    /// `visited` set. Protection is ignored.
    pub fn spread(
        &self,
        state: &mut GameState,
        region: &RegionId,
        visited: &mut FxHashSet<RegionId>,
        log: &mut GameLog,
    ) {
        if !visited.insert(region.clone()) {
            return;
        }
        if !self.graph.contains(region) {
            return;
        }

        let turn = state.turn_number;
        log.push(turn, format!("FIRE SURGE in {}!", region));
        state.fire_track =
            (state.fire_track + self.config.surge_fire_track_increase).min(self.config.max_fire_track);

        for neighbor in self.graph.neighbors(region) {
            let Some(level) = state.wildfire(neighbor).map(|w| w.fire_level) else {
                continue;
            };
            if level < self.config.max_fire_level {
                if let Some(wildfire) = state.wildfire_mut(neighbor) {
                    wildfire.fire_level += 1;
                    log.push(
                        turn,
                        format!("Fire spread to {}. Fire level: {}.", neighbor, wildfire.fire_level),
                    );
                }
            } else {
                self.spread(state, neighbor, visited, log);
            }
        }
    }

    /// Run the wildfire phase.
    ///
    /// 1. Ignite `wildfire_draws(fire_track)` cards.
    /// 2. Every burning region outside a moratorium rolls for natural
    ///    escalation; protection lowers the chance.
    /// 3. Recompute the fire track from the board. A maxed track ends the
    ///    game.
    pub fn run_phase<R: RandomSource + ?Sized>(&self, state: &mut GameState, rng: &mut R, log: &mut GameLog) {
        let turn = state.turn_number;
        log.push(turn, "Wildfire phase begins.");

        for _ in 0..self.config.wildfire_draws(state.fire_track) {
            self.ignite(state, rng, log);
        }

        let regions: Vec<RegionId> = state.wildfires.iter().map(|w| w.region.clone()).collect();
        for region in &regions {
            let Some(wildfire) = state.wildfire(region) else {
                continue;
            };
            if !wildfire.is_burning() {
                continue;
            }
            if self.graph.group_of(region).is_some_and(|group| state.is_locked(group)) {
                continue;
            }

            let chance = self.config.escalation_chance(wildfire.protection_level);
            if rng.chance(chance) {
                if let Some(level) = self.escalate(state, region, log) {
                    log.push(turn, format!("Fire in {} grew to level {} on its own.", region, level));
                }
            }
        }

        self.recompute_fire_track(state);
        log.push(turn, format!("Wildfire phase over. Fire track: {}.", state.fire_track));

        if state.fire_track >= self.config.max_fire_track {
            outcome::end_game(state, EndReason::FireTrackMaxed, self.config, log);
        }
    }

    /// Set the fire track from the board: total fire level times the
    /// scale, capped at the maximum.
    pub fn recompute_fire_track(&self, state: &mut GameState) {
        state.fire_track = state
            .total_fire()
            .saturating_mul(self.config.fire_track_scale)
            .min(self.config.max_fire_track);
    }
}

impl DrawWildfire for FireSpread<'_> {
    fn draw_wildfire(&mut self, state: &mut GameState, rng: &mut dyn RandomSource, log: &mut GameLog) {
        self.ignite(state, rng, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Pile;
    use crate::core::{RegionGroup, ScriptedRandom, WildfireState};
    use crate::map::Region;

    fn cycle_graph() -> RegionGraph {
        RegionGraph::new(vec![
            Region::new("A", RegionGroup::North, "Alpha", &["B"]),
            Region::new("B", RegionGroup::North, "Beta", &["A"]),
        ])
        .unwrap()
    }

    fn board(graph: &RegionGraph, levels: &[u8]) -> GameState {
        let mut state = GameState::new(100);
        state.turn_number = 1;
        for (region, level) in graph.ids().zip(levels) {
            let mut wildfire = WildfireState::calm(region.clone());
            wildfire.fire_level = *level;
            state.wildfires.push_back(wildfire);
        }
        state
    }

    #[test]
    fn test_ignite_raises_level_and_discards() {
        let graph = cycle_graph();
        let config = RulesConfig::default();
        let mut state = board(&graph, &[0, 0]);
        state.wildfire_cards = Pile::new(vec![RegionId::new("A")]);
        let mut log = GameLog::new(20);

        let drawn = FireSpread::new(&graph, &config).ignite(&mut state, &mut ScriptedRandom::constant(0.0), &mut log);

        assert_eq!(drawn, Some(RegionId::new("A")));
        assert_eq!(state.fire_level(&RegionId::new("A")), 1);
        assert_eq!(state.wildfire_cards.deck_len(), 0);
        assert_eq!(state.wildfire_cards.discard_len(), 1);
    }

    #[test]
    fn test_ignite_reshuffles_discard() {
        let graph = cycle_graph();
        let config = RulesConfig::default();
        let mut state = board(&graph, &[0, 0]);
        state.wildfire_cards.discard(RegionId::new("B"));
        let mut log = GameLog::new(20);

        let drawn = FireSpread::new(&graph, &config).ignite(&mut state, &mut ScriptedRandom::constant(0.0), &mut log);

        assert_eq!(drawn, Some(RegionId::new("B")));
        assert_eq!(state.wildfire_cards.total(), 1);
    }

    #[test]
    fn test_ignite_exhausted_is_noop() {
        let graph = cycle_graph();
        let config = RulesConfig::default();
        let mut state = board(&graph, &[0, 0]);
        let before = state.clone();
        let mut log = GameLog::new(20);

        let drawn = FireSpread::new(&graph, &config).ignite(&mut state, &mut ScriptedRandom::constant(0.0), &mut log);

        assert_eq!(drawn, None);
        assert_eq!(state, before);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_spread_terminates_on_saturated_cycle() {
        let graph = cycle_graph();
        let config = RulesConfig::default();
        let mut state = board(&graph, &[3, 3]);
        let mut log = GameLog::new(20);
        let mut visited = FxHashSet::default();

        FireSpread::new(&graph, &config).spread(&mut state, &RegionId::new("A"), &mut visited, &mut log);

        assert_eq!(visited.len(), 2);
        assert_eq!(state.fire_track, 20);
        assert_eq!(state.total_fire(), 6);
    }

    #[test]
    fn test_escalate_at_max_surges() {
        let graph = cycle_graph();
        let config = RulesConfig::default();
        let mut state = board(&graph, &[3, 0]);
        let mut log = GameLog::new(20);

        let raised = FireSpread::new(&graph, &config).escalate(&mut state, &RegionId::new("A"), &mut log);

        assert_eq!(raised, None);
        assert_eq!(state.fire_level(&RegionId::new("A")), 3);
        assert_eq!(state.fire_level(&RegionId::new("B")), 1);
        assert_eq!(state.fire_track, 10);
    }

    #[test]
    fn test_phase_recomputes_fire_track() {
        let graph = cycle_graph();
        let config = RulesConfig::default();
        let mut state = board(&graph, &[1, 0]);
        state.fire_track = 80;
        state.wildfire_cards = Pile::new(vec![RegionId::new("B")]);
        let mut log = GameLog::new(50);

        // 0.99 never passes an escalation roll; fire track 80 means 5 draws
        // but the deck recycles a single card.
        FireSpread::new(&graph, &config).run_phase(&mut state, &mut ScriptedRandom::constant(0.99), &mut log);

        // Draws 4 and 5 surge from B into A.
        assert_eq!(state.fire_level(&RegionId::new("B")), 3);
        assert_eq!(state.fire_level(&RegionId::new("A")), 3);
        assert_eq!(state.fire_track, 30);
        assert!(!state.ended);
    }

    #[test]
    fn test_phase_skips_locked_groups() {
        let graph = cycle_graph();
        let config = RulesConfig::default().with_natural_escalation_chance(1.0);
        let mut state = board(&graph, &[1, 1]);
        state.moratoriums.push_back(RegionGroup::North);
        let mut log = GameLog::new(50);

        FireSpread::new(&graph, &config).run_phase(&mut state, &mut ScriptedRandom::constant(0.0), &mut log);

        assert_eq!(state.total_fire(), 2);
        assert_eq!(state.fire_track, 10);
    }

    #[test]
    fn test_phase_full_track_loses() {
        let graph = cycle_graph();
        let mut config = RulesConfig::default().with_natural_escalation_chance(0.0);
        config.fire_track_scale = 20;
        let mut state = board(&graph, &[3, 3]);
        let mut log = GameLog::new(50);

        FireSpread::new(&graph, &config).run_phase(&mut state, &mut ScriptedRandom::constant(0.0), &mut log);

        assert_eq!(state.fire_track, 100);
        assert!(state.ended);
        assert_eq!(state.end_reason, Some(EndReason::FireTrackMaxed));
    }
}
