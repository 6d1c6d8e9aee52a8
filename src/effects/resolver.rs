//! Event resolution - applying a drawn event card to game state.
//!
//! The resolver never reaches into the engine. Everything beyond the
//! state itself (rules constants, randomness, the log, the ability to
//! draw a wildfire, region lookup) is handed over in a
//! [`ResolverContext`].

use crate::cards::{EventCard, EventKind};
use crate::core::{GameLog, GameState, RandomSource, RegionId, RulesConfig};
use crate::map::{Region, RegionGraph};

/// Capability: draw one wildfire card and ignite the region it names.
pub trait DrawWildfire {
    fn draw_wildfire(&mut self, state: &mut GameState, rng: &mut dyn RandomSource, log: &mut GameLog);
}

/// Capability: resolve a region id to its map entry.
pub trait LookupRegion {
    fn lookup_region(&self, id: &RegionId) -> Option<&Region>;
}

impl LookupRegion for RegionGraph {
    fn lookup_region(&self, id: &RegionId) -> Option<&Region> {
        self.get(id)
    }
}

/// Context for resolving events.
pub struct ResolverContext<'a> {
    pub config: &'a RulesConfig,
    pub rng: &'a mut dyn RandomSource,
    pub log: &'a mut GameLog,
    pub wildfires: &'a mut dyn DrawWildfire,
    pub regions: &'a dyn LookupRegion,
}

impl<'a> ResolverContext<'a> {
    pub fn new(
        config: &'a RulesConfig,
        rng: &'a mut dyn RandomSource,
        log: &'a mut GameLog,
        wildfires: &'a mut dyn DrawWildfire,
        regions: &'a dyn LookupRegion,
    ) -> Self {
        Self {
            config,
            rng,
            log,
            wildfires,
            regions,
        }
    }

    /// Display name of a region, falling back to its id.
    fn region_name(&self, id: &RegionId) -> String {
        self.regions
            .lookup_region(id)
            .map_or_else(|| id.to_string(), |region| region.name.clone())
    }
}

/// Resolves event cards on game state.
pub struct EventResolver;

impl EventResolver {
    /// Apply one event card.
    ///
    /// Writes exactly one log entry for the event itself. Entries written
    /// by the wildfire draw of an Intense Wildfire follow it.
    pub fn resolve(card: &EventCard, state: &mut GameState, ctx: &mut ResolverContext<'_>) {
        let turn = state.turn_number;
        let config = ctx.config;

        match card.kind {
            EventKind::IntenseWildfire => {
                ctx.log.push(
                    turn,
                    format!("Event {}: {} An extra wildfire is drawn.", card.kind, card.description),
                );
                ctx.wildfires.draw_wildfire(state, &mut *ctx.rng, &mut *ctx.log);
            }

            EventKind::ProlongedDrought => {
                state.fire_track = (state.fire_track + config.drought_fire_track_increase)
                    .min(config.max_fire_track);
                ctx.log.push(
                    turn,
                    format!(
                        "Event {}: {} Fire track rises to {}.",
                        card.kind, card.description, state.fire_track
                    ),
                );
            }

            EventKind::BeneficialRain => {
                let burning = state.burning_regions();
                if burning.is_empty() {
                    state.vegetation_track = (state.vegetation_track
                        + config.rain_vegetation_growth_no_fire)
                        .min(config.max_vegetation);
                    ctx.log.push(
                        turn,
                        format!(
                            "Event {}: no active fire to douse. Vegetation recovers to {}.",
                            card.kind, state.vegetation_track
                        ),
                    );
                    return;
                }

                let target = &burning[ctx.rng.next_index(burning.len())];
                let level = match state.wildfire_mut(target) {
                    Some(wildfire) => {
                        wildfire.fire_level = wildfire.fire_level.saturating_sub(config.rain_fire_reduction);
                        wildfire.fire_level
                    }
                    None => 0,
                };
                state.vegetation_track =
                    (state.vegetation_track + config.rain_vegetation_growth).min(config.max_vegetation);

                let name = ctx.region_name(target);
                ctx.log.push(
                    turn,
                    format!(
                        "Event {}: rain in {}. Fire level down to {}, vegetation recovers to {}.",
                        card.kind, name, level, state.vegetation_track
                    ),
                );
            }

            EventKind::AwarenessCampaign => {
                if state.wildfires.is_empty() {
                    ctx.log.push(turn, format!("Event {}: no region to protect.", card.kind));
                    return;
                }

                let index = ctx.rng.next_index(state.wildfires.len());
                let (region, protection) = match state.wildfires.get_mut(index) {
                    Some(wildfire) => {
                        wildfire.protection_level = wildfire
                            .protection_level
                            .saturating_add(config.awareness_protection_increase)
                            .min(100);
                        (wildfire.region.clone(), wildfire.protection_level)
                    }
                    None => return,
                };

                let name = ctx.region_name(&region);
                ctx.log.push(
                    turn,
                    format!(
                        "Event {}: campaign in {}. Environmental protection rises to {}.",
                        card.kind, name, protection
                    ),
                );
            }

            EventKind::EmergencyFunding => {
                if state.players.is_empty() {
                    ctx.log.push(turn, format!("Event {}: no player to fund.", card.kind));
                    return;
                }

                let index = ctx.rng.next_index(state.players.len());
                if let Some(player) = state.players.get_mut(index) {
                    player.actions_remaining += config.emergency_funding_actions;
                    let message = format!(
                        "Event {}: {} gains {} extra action(s).",
                        card.kind, player.name, config.emergency_funding_actions
                    );
                    ctx.log.push(turn, message);
                }
            }

            EventKind::Unknown => {
                tracing::warn!(description = %card.description, "unknown event kind");
                ctx.log.push(turn, format!("Unknown event type: {}", card.description));
            }
        }
    }
}
