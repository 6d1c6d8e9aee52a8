//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use wildfire_engine::cards::EventCatalog;
use wildfire_engine::core::{GameState, PlayerId, RegionGroup, RegionId, RulesConfig, ScriptedRandom};
use wildfire_engine::map::{Region, RegionGraph};
use wildfire_engine::rules::Engine;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Two regions listing each other: the smallest cyclic map.
pub fn pair_graph() -> RegionGraph {
    RegionGraph::new(vec![
        Region::new("A", RegionGroup::South, "Alpha", &["B"]),
        Region::new("B", RegionGroup::South, "Beta", &["A"]),
    ])
    .unwrap()
}

/// Brazil engine with a scripted random source.
pub fn scripted_engine(config: RulesConfig, value: f64) -> Engine<ScriptedRandom> {
    init_logging();
    Engine::with_rng(
        RegionGraph::brazil(),
        EventCatalog::standard(),
        config,
        ScriptedRandom::constant(value),
    )
}

/// Put a player somewhere, with a given action budget.
pub fn place(state: &mut GameState, seat: u8, region: &str, actions: u32) {
    let player = state.player_mut(PlayerId::new(seat)).unwrap();
    player.current_region = RegionId::new(region);
    player.actions_remaining = actions;
}

/// Set the fire level of every region to zero.
pub fn extinguish_all(state: &mut GameState) {
    for wildfire in state.wildfires.iter_mut() {
        wildfire.fire_level = 0;
    }
}

/// Check every bound the game promises to keep.
pub fn assert_bounds(state: &GameState, config: &RulesConfig) {
    for wildfire in state.wildfires.iter() {
        assert!(wildfire.fire_level <= config.max_fire_level, "{:?}", wildfire);
        assert!(wildfire.protection_level <= 100, "{:?}", wildfire);
    }
    assert!(state.fire_track <= config.max_fire_track);
    assert!(state.vegetation_track <= config.max_vegetation);
    assert!(state.vegetation_track >= config.min_vegetation);
}
