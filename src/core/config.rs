//! Rules configuration.
//!
//! Every tunable constant of the game lives in [`RulesConfig`]. The engine
//! never hardcodes a number; defaults reproduce the standard game.

use serde::{Deserialize, Serialize};

/// Tunable rules constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Highest fire level a region can reach (critical).
    pub max_fire_level: u8,

    /// Upper bound of the fire track. Reaching it loses the game.
    pub max_fire_track: u32,

    /// Upper bound of the vegetation track.
    pub max_vegetation: u32,

    /// Lower bound of the vegetation track. Reaching it loses the game.
    pub min_vegetation: u32,

    /// Vegetation track at game start.
    pub initial_vegetation: u32,

    /// Reaching this turn number loses the game.
    pub max_turns: u32,

    /// Actions granted to every player each round.
    pub actions_per_turn: u32,

    /// Player cards dealt to each player at game start.
    pub initial_cards_per_player: usize,

    /// Player cards drawn by each player at the start of every round.
    pub cards_drawn_per_turn: usize,

    /// Wildfire cards ignited at game start.
    pub initial_wildfires: usize,

    /// Base chance per region and wildfire phase of natural escalation,
    /// before protection is applied.
    pub natural_escalation_chance: f64,

    /// Fire track increase per spread surge.
    pub surge_fire_track_increase: u32,

    /// Fire track points per fire level on the board.
    pub fire_track_scale: u32,

    /// Fire track width covered by one extra wildfire draw.
    pub fire_track_per_extra_draw: u32,

    /// Vegetation gained per round while the fire track is low.
    pub vegetation_recovery: u32,

    /// Vegetation lost per round while the fire track is high.
    pub vegetation_decay: u32,

    /// Fire track below which vegetation recovers.
    pub vegetation_recovery_threshold: u32,

    /// Vegetation required (with no fire on the board) to win.
    pub win_vegetation_threshold: u32,

    /// Prolonged Drought: fire track increase.
    pub drought_fire_track_increase: u32,

    /// Beneficial Rain: fire levels removed from the chosen region.
    pub rain_fire_reduction: u8,

    /// Beneficial Rain: vegetation gained when a fire was doused.
    pub rain_vegetation_growth: u32,

    /// Beneficial Rain: vegetation gained when nothing was burning.
    pub rain_vegetation_growth_no_fire: u32,

    /// Awareness Campaign: protection added to the chosen region.
    pub awareness_protection_increase: u8,

    /// Emergency Funding: actions granted to the chosen player.
    pub emergency_funding_actions: u32,

    /// Environment Minister: chance of removing one extra fire level.
    pub minister_bonus_chance: f64,

    /// Environment Minister Plan: protection added at the current region.
    pub plan_protection_increase: u8,

    /// Capacity of the game log.
    pub max_log_entries: usize,

    /// Cards of one region group discarded to declare its moratorium.
    pub moratorium_cards_required: usize,

    /// Whether locking every region group also wins the game.
    pub moratorium_victory: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_fire_level: 3,
            max_fire_track: 100,
            max_vegetation: 100,
            min_vegetation: 0,
            initial_vegetation: 100,
            max_turns: 30,
            actions_per_turn: 4,
            initial_cards_per_player: 2,
            cards_drawn_per_turn: 2,
            initial_wildfires: 3,
            natural_escalation_chance: 0.2,
            surge_fire_track_increase: 10,
            fire_track_scale: 5,
            fire_track_per_extra_draw: 20,
            vegetation_recovery: 5,
            vegetation_decay: 5,
            vegetation_recovery_threshold: 50,
            win_vegetation_threshold: 80,
            drought_fire_track_increase: 15,
            rain_fire_reduction: 1,
            rain_vegetation_growth: 10,
            rain_vegetation_growth_no_fire: 5,
            awareness_protection_increase: 20,
            emergency_funding_actions: 1,
            minister_bonus_chance: 0.3,
            plan_protection_increase: 20,
            max_log_entries: 100,
            moratorium_cards_required: 4,
            moratorium_victory: false,
        }
    }
}

impl RulesConfig {
    /// Wildfire cards drawn in one wildfire phase at the given fire track.
    ///
    /// Non-decreasing in `fire_track`: one card, plus one for every full
    /// `fire_track_per_extra_draw` points.
    ///
    /// ```
    /// use wildfire_engine::core::RulesConfig;
    ///
    /// let config = RulesConfig::default();
    /// assert_eq!(config.wildfire_draws(0), 1);
    /// assert_eq!(config.wildfire_draws(19), 1);
    /// assert_eq!(config.wildfire_draws(20), 2);
    /// assert_eq!(config.wildfire_draws(100), 6);
    /// ```
    #[must_use]
    pub fn wildfire_draws(&self, fire_track: u32) -> usize {
        (fire_track / self.fire_track_per_extra_draw.max(1)) as usize + 1
    }

    /// Natural escalation chance for a region with the given protection.
    ///
    /// Reduced proportionally by protection; never negative.
    #[must_use]
    pub fn escalation_chance(&self, protection_level: u8) -> f64 {
        let protection = f64::from(protection_level.min(100)) / 100.0;
        (self.natural_escalation_chance * (1.0 - protection)).max(0.0)
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set the per-round action allotment.
    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u32) -> Self {
        self.actions_per_turn = actions;
        self
    }

    /// Set the number of wildfires ignited at game start.
    #[must_use]
    pub fn with_initial_wildfires(mut self, count: usize) -> Self {
        self.initial_wildfires = count;
        self
    }

    /// Set the base natural escalation chance.
    #[must_use]
    pub fn with_natural_escalation_chance(mut self, chance: f64) -> Self {
        self.natural_escalation_chance = chance;
        self
    }

    /// Set the game log capacity.
    #[must_use]
    pub fn with_max_log_entries(mut self, entries: usize) -> Self {
        self.max_log_entries = entries;
        self
    }

    /// Enable or disable the regional moratorium victory.
    #[must_use]
    pub fn with_moratorium_victory(mut self, enabled: bool) -> Self {
        self.moratorium_victory = enabled;
        self
    }
}
