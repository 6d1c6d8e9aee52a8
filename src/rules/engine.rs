//! The game engine: owner of the authoritative state.
//!
//! ## Round structure
//!
//! ```text
//! PlayerActions (seat by seat) -> CardDraw -> Wildfire -> Event
//!     -> VegetationUpdate -> end check -> PlayerActions ...
//! ```
//!
//! `perform_action` runs inside the action sub-phase; `advance_turn` runs
//! the rest of the round. `end_seat_turn` hands the action sub-phase to the
//! next seat and advances the round after the last one.
//!
//! Expected failures (illegal actions, unknown players, empty decks) never
//! surface as errors: the engine returns `false` or does nothing, and
//! explains why in the game log.

use crate::cards::{CardManager, Draw, EventCatalog};
use crate::core::{
    Action, ActionError, EndReason, GameLog, GameRng, GameState, LogEntry, Phase, Player, PlayerId,
    RandomSource, RegionId, Role, RulesConfig, WildfireState,
};
use crate::effects::{EventResolver, ResolverContext};
use crate::map::RegionGraph;

use super::actions::ActionRules;
use super::outcome;
use super::wildfire::FireSpread;

/// Cooperative wildfire game engine.
///
/// ```
/// use wildfire_engine::cards::EventCatalog;
/// use wildfire_engine::core::{GameRng, PlayerId, RulesConfig};
/// use wildfire_engine::map::RegionGraph;
/// use wildfire_engine::rules::Engine;
///
/// let mut engine = Engine::with_rng(
///     RegionGraph::brazil(),
///     EventCatalog::standard(),
///     RulesConfig::default(),
///     GameRng::new(42),
/// );
/// engine.start_game(&["Ana", "Bruno"]);
///
/// let state = engine.state();
/// assert_eq!(state.turn_number, 1);
/// assert_eq!(state.players.len(), 2);
/// assert_eq!(state.player(PlayerId::new(0)).unwrap().actions_remaining, 4);
/// ```
pub struct Engine<R: RandomSource = GameRng> {
    graph: RegionGraph,
    catalog: EventCatalog,
    config: RulesConfig,
    rng: R,
    state: GameState,
    log: GameLog,
}

impl Engine<GameRng> {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new(graph: RegionGraph, catalog: EventCatalog, config: RulesConfig) -> Self {
        Self::with_rng(graph, catalog, config, GameRng::from_entropy())
    }

    /// Create an engine with a fixed seed.
    #[must_use]
    pub fn seeded(graph: RegionGraph, catalog: EventCatalog, config: RulesConfig, seed: u64) -> Self {
        Self::with_rng(graph, catalog, config, GameRng::new(seed))
    }

    /// The standard game: Brazil map, standard catalog, default rules.
    #[must_use]
    pub fn brazil(seed: u64) -> Self {
        Self::seeded(
            RegionGraph::brazil(),
            EventCatalog::standard(),
            RulesConfig::default(),
            seed,
        )
    }
}

impl<R: RandomSource> Engine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(graph: RegionGraph, catalog: EventCatalog, config: RulesConfig, rng: R) -> Self {
        let state = GameState::new(config.initial_vegetation);
        let log = GameLog::new(config.max_log_entries);
        Self {
            graph,
            catalog,
            config,
            rng,
            state,
            log,
        }
    }

    // === Accessors ===

    /// Snapshot of the game state.
    ///
    /// The snapshot is independent of the engine: changing it has no
    /// effect on the game.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Game log, oldest entry first.
    #[must_use]
    pub fn log(&self) -> Vec<LogEntry> {
        self.log.to_vec()
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn graph(&self) -> &RegionGraph {
        &self.graph
    }

    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Replace the authoritative state with a snapshot to set up a
    /// position. Test builds only.
    ///
    /// An ended game stays ended: a snapshot that is not over is refused
    /// and `false` returned. Use `start_game` for a new game.
    #[cfg(any(test, feature = "test-support"))]
    pub fn load_state(&mut self, state: GameState) -> bool {
        if self.state.ended && !state.ended {
            self.log.push(self.state.turn_number, "The game is already over, the snapshot was not loaded.");
            return false;
        }
        self.state = state;
        true
    }

    // === Setup ===

    /// Start a new game, replacing any previous game and clearing the log.
    ///
    /// Roles are assigned by seat, cycling through the role list. Every
    /// player starts in a random region with a full action allotment.
    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) {
        self.log.clear();
        self.state = GameState::new(self.config.initial_vegetation);
        self.log.push(0, "Starting a new game of Red Alert!");

        let regions: Vec<RegionId> = self.graph.ids().cloned().collect();
        for (seat, name) in names.iter().take(u8::MAX as usize).enumerate() {
            let start = regions[self.rng.next_index(regions.len())].clone();
            let player = Player::new(
                PlayerId::new(seat as u8),
                name.as_ref(),
                Role::for_seat(seat),
                start,
                self.config.actions_per_turn,
            );
            self.state.players.push_back(player);
        }
        let roster: Vec<String> = self
            .state
            .players
            .iter()
            .map(|p| format!("{} ({})", p.name, p.role))
            .collect();
        self.log.push(0, format!("Players: {}", roster.join(", ")));

        self.state.player_cards = CardManager::build_region_deck(&self.graph, &mut self.rng);
        self.state.wildfire_cards = CardManager::build_region_deck(&self.graph, &mut self.rng);
        self.state.event_cards = CardManager::build_event_deck(&self.catalog, &mut self.rng);

        self.deal_initial_cards();

        self.state.wildfires = regions.into_iter().map(WildfireState::calm).collect();
        let fire = FireSpread::new(&self.graph, &self.config);
        for _ in 0..self.config.initial_wildfires {
            fire.ignite(&mut self.state, &mut self.rng, &mut self.log);
        }

        self.state.turn_number = 1;
        self.state.phase = Phase::PlayerActions;
        self.state.active_seat = (!self.state.players.is_empty()).then(|| PlayerId::new(0));
        self.log.push(1, "Game started! Let the fight against the wildfires begin!");
        tracing::info!(
            players = self.state.players.len(),
            regions = self.graph.len(),
            "game started"
        );
    }

    fn deal_initial_cards(&mut self) {
        for seat in 0..self.state.players.len() {
            for _ in 0..self.config.initial_cards_per_player {
                if !self.draw_player_card(seat) {
                    return;
                }
            }
            if let Some(player) = self.state.players.get(seat) {
                let message = format!("{} received their starting cards.", player.name);
                self.log.push(self.state.turn_number, message);
            }
        }
    }

    /// Draw one player card into a seat's hand, recycling the discard.
    ///
    /// Returns false if deck and discard are both empty.
    fn draw_player_card(&mut self, seat: usize) -> bool {
        let turn = self.state.turn_number;
        match self.state.player_cards.draw_recycling(&mut self.rng) {
            Draw::Card { card, reshuffled } => {
                if reshuffled {
                    self.log.push(turn, "Player deck empty, reshuffling the discard.");
                }
                if let Some(player) = self.state.players.get_mut(seat) {
                    let message = format!("{} drew card {}.", player.name, card);
                    player.hand.push_back(card);
                    self.log.push(turn, message);
                }
                true
            }
            Draw::Exhausted => {
                self.log.push(turn, "The player deck and discard are both empty.");
                false
            }
        }
    }

    // === Actions ===

    /// Perform an action for a player.
    ///
    /// Checks, in order: the game is not over, the player exists, the
    /// player has actions left, then the action's own preconditions. On
    /// success one action is spent, the action is recorded, and the end
    /// conditions are evaluated. Returns whether the action happened.
    pub fn perform_action(&mut self, actor: PlayerId, action: Action) -> bool {
        if self.state.ended {
            return self.reject(ActionError::GameOver);
        }
        let Some(player) = self.state.player(actor) else {
            return self.reject(ActionError::UnknownPlayer(actor.to_string()));
        };
        if player.actions_remaining == 0 {
            let name = player.name.clone();
            return self.reject(ActionError::NoActionsLeft(name));
        }

        let rules = ActionRules::new(&self.graph, &self.config);
        if let Err(err) = rules.apply(&mut self.state, actor, &action, &mut self.rng, &mut self.log) {
            return self.reject(err);
        }

        let turn = self.state.turn_number;
        if let Some(player) = self.state.player_mut(actor) {
            player.actions_remaining -= 1;
            let summary = format!(
                "{} performed {}. Actions remaining: {}",
                player.name,
                action.kind(),
                player.actions_remaining
            );
            self.log.push(turn, summary);
        }
        self.state.record_action(actor, action);
        self.check_end_conditions();
        true
    }

    /// Perform an action given as strings, e.g. from a UI:
    /// `perform_named_action("player-1", "Move", &["GO"])`.
    ///
    /// The player is checked before the action name. Unknown players,
    /// unknown action names and missing arguments are logged and return
    /// `false` without spending an action.
    pub fn perform_named_action(&mut self, player_id: &str, action: &str, args: &[&str]) -> bool {
        if self.state.ended {
            return self.reject(ActionError::GameOver);
        }
        let actor = match player_id.parse::<PlayerId>() {
            Ok(actor) if self.state.player(actor).is_some() => actor,
            _ => return self.reject(ActionError::UnknownPlayer(player_id.to_string())),
        };
        match Action::parse(action, args) {
            Ok(action) => self.perform_action(actor, action),
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: ActionError) -> bool {
        tracing::warn!(error = %err, "action rejected");
        self.log.push(self.state.turn_number, err.to_string());
        false
    }

    // === Round progression ===

    /// Hand the action sub-phase to the next seat. After the last seat,
    /// the round ends and `advance_turn` runs.
    pub fn end_seat_turn(&mut self) {
        if self.state.ended {
            self.log.push(self.state.turn_number, "The game is already over.");
            return;
        }
        if self.state.phase == Phase::Setup {
            self.log.push(self.state.turn_number, "No game in progress.");
            return;
        }

        let next = self.state.active_seat.map_or(0, |seat| seat.index() + 1);
        if next >= self.state.players.len() {
            self.advance_turn();
            return;
        }
        self.state.active_seat = Some(PlayerId::new(next as u8));
        if let Some(player) = self.state.players.get(next) {
            let message = format!("It is now {}'s turn.", player.name);
            self.log.push(self.state.turn_number, message);
        }
    }

    /// Run the rest of the round and start the next one.
    ///
    /// Card draw, wildfire phase, event phase, vegetation update, end
    /// check. Does nothing (but log) once the game is over.
    pub fn advance_turn(&mut self) {
        if self.state.ended {
            self.log.push(self.state.turn_number, "The game is already over, the turn cannot advance.");
            return;
        }
        if self.state.phase == Phase::Setup {
            self.log.push(self.state.turn_number, "No game in progress.");
            return;
        }

        self.state.turn_number += 1;
        let turn = self.state.turn_number;
        self.log.push(turn, format!("--- Turn {} begins ---", turn));

        self.state.phase = Phase::CardDraw;
        for seat in 0..self.state.players.len() {
            if let Some(player) = self.state.players.get_mut(seat) {
                player.actions_remaining = self.config.actions_per_turn;
            }
            for _ in 0..self.config.cards_drawn_per_turn {
                if !self.draw_player_card(seat) {
                    outcome::end_game(&mut self.state, EndReason::PlayerDeckExhausted, &self.config, &mut self.log);
                    return;
                }
            }
        }

        self.state.phase = Phase::Wildfire;
        FireSpread::new(&self.graph, &self.config).run_phase(&mut self.state, &mut self.rng, &mut self.log);
        if self.state.ended {
            return;
        }

        self.state.phase = Phase::Event;
        self.run_event_phase();

        self.state.phase = Phase::VegetationUpdate;
        self.update_vegetation();

        if self.check_end_conditions() {
            return;
        }
        self.state.phase = Phase::PlayerActions;
        self.state.active_seat = (!self.state.players.is_empty()).then(|| PlayerId::new(0));
        self.log.push(
            turn,
            format!(
                "Fire track: {}, vegetation track: {}",
                self.state.fire_track, self.state.vegetation_track
            ),
        );
    }

    fn run_event_phase(&mut self) {
        let turn = self.state.turn_number;
        self.log.push(turn, "Event phase begins.");

        let Some(card) = self.state.event_cards.draw() else {
            self.log.push(turn, "Event deck empty. No new events.");
            return;
        };
        self.state.event_cards.discard(card.clone());

        let mut fire = FireSpread::new(&self.graph, &self.config);
        let mut ctx = ResolverContext::new(&self.config, &mut self.rng, &mut self.log, &mut fire, &self.graph);
        EventResolver::resolve(&card, &mut self.state, &mut ctx);
    }

    fn update_vegetation(&mut self) {
        let config = &self.config;
        let turn = self.state.turn_number;
        if self.state.fire_track < config.vegetation_recovery_threshold {
            self.state.vegetation_track =
                (self.state.vegetation_track + config.vegetation_recovery).min(config.max_vegetation);
            self.log.push(turn, "The vegetation is recovering while the fires are under control.");
        } else {
            self.state.vegetation_track = self
                .state
                .vegetation_track
                .saturating_sub(config.vegetation_decay)
                .max(config.min_vegetation);
            self.log.push(turn, "The vegetation is degrading under heavy fires.");
        }
    }

    /// Evaluate the end conditions. Idempotent; returns whether the game
    /// is over.
    pub fn check_end_conditions(&mut self) -> bool {
        outcome::check_end_conditions(&mut self.state, &self.config, &mut self.log)
    }
}
