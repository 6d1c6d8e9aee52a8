//! Per-action legality and effects.
//!
//! Every handler validates completely before touching the state, so a
//! rejected action leaves the state as it was. Turn bookkeeping (the
//! action budget, history, end checks) belongs to the engine.

use smallvec::SmallVec;

use crate::cards::Draw;
use crate::core::{
    Action, ActionError, GameLog, GameState, Player, PlayerId, RandomSource, RegionGroup, RegionId,
    Role, RulesConfig,
};
use crate::map::RegionGraph;

/// Action rules bound to a map and a rules configuration.
#[derive(Clone, Copy)]
pub struct ActionRules<'a> {
    graph: &'a RegionGraph,
    config: &'a RulesConfig,
}

impl<'a> ActionRules<'a> {
    pub fn new(graph: &'a RegionGraph, config: &'a RulesConfig) -> Self {
        Self { graph, config }
    }

    /// Validate and apply one action for `actor`.
    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        action: &Action,
        rng: &mut R,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        match action {
            Action::Move { destination } => self.move_to(state, actor, destination, log),
            Action::FightFire => self.fight_fire(state, actor, rng, log),
            Action::Cooperate { target, card } => self.cooperate(state, actor, *target, card, log),
            Action::Plan => self.plan(state, actor, rng, log),
            Action::BuildCenter => self.build_center(state, actor, log),
            Action::DeclareMoratorium { cards } => self.declare_moratorium(state, actor, cards, log),
        }
    }

    fn region_name(&self, id: &RegionId) -> String {
        self.graph
            .get(id)
            .map_or_else(|| id.to_string(), |region| region.name.clone())
    }

    /// Move to an adjacent region. A Governor may also move anywhere in
    /// the current region group.
    pub fn move_to(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        destination: &RegionId,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        let player = actor_of(state, actor)?;
        if !self.graph.contains(destination) {
            return Err(ActionError::UnknownRegion(destination.clone()));
        }

        let from = player.current_region.clone();
        let adjacent = self.graph.are_adjacent(&from, destination);
        let within_group = player.role.moves_freely_within_group()
            && &from != destination
            && self.graph.same_group(&from, destination);
        if !adjacent && !within_group {
            return Err(ActionError::NotAdjacent {
                player: player.name.clone(),
                from,
                to: destination.clone(),
            });
        }

        let name = player.name.clone();
        if let Some(player) = state.player_mut(actor) {
            player.current_region = destination.clone();
        }
        log.push(
            state.turn_number,
            format!("{} moved to {}.", name, self.region_name(destination)),
        );
        Ok(())
    }

    /// Lower the fire at the current region by one level. An Environment
    /// Minister may remove a second level.
    pub fn fight_fire<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        rng: &mut R,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        let player = actor_of(state, actor)?;
        let name = player.name.clone();
        let role = player.role;
        let region = player.current_region.clone();

        let level = state.fire_level(&region);
        if level == 0 {
            return Err(ActionError::NoFireHere { player: name, region });
        }

        let bonus = role == Role::EnvironmentMinister
            && level > 1
            && rng.chance(self.config.minister_bonus_chance);
        let removed = if bonus { 2 } else { 1 };

        let turn = state.turn_number;
        if let Some(wildfire) = state.wildfire_mut(&region) {
            wildfire.fire_level = wildfire.fire_level.saturating_sub(removed);
            log.push(
                turn,
                format!("{} fought the fire in {}. Fire level: {}.", name, region, wildfire.fire_level),
            );
        }
        if bonus {
            log.push(turn, format!("{}'s experience put out an extra fire level.", name));
        }
        Ok(())
    }

    /// Hand one card to a player in the same region.
    pub fn cooperate(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        target: PlayerId,
        card: &RegionId,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        let player = actor_of(state, actor)?;
        let name = player.name.clone();
        if target == actor {
            return Err(ActionError::SelfCooperation { player: name });
        }
        let other = state
            .player(target)
            .ok_or_else(|| ActionError::UnknownPlayer(target.to_string()))?;
        if other.current_region != player.current_region {
            return Err(ActionError::NotTogether { player: name, other: target });
        }
        if !player.holds(card) {
            return Err(ActionError::CardNotHeld { player: name, card: card.clone() });
        }
        let other_name = other.name.clone();

        if let Some(player) = state.player_mut(actor) {
            player.remove_card(card);
        }
        if let Some(other) = state.player_mut(target) {
            other.hand.push_back(card.clone());
        }
        log.push(
            state.turn_number,
            format!("{} cooperated with {}, handing over card {}.", name, other_name, card),
        );
        Ok(())
    }

    /// Role-specific planning. Never rejected once the actor is valid.
    ///
    /// - Environment Minister: raise protection at the current region
    /// - Governor: lower the hottest fire of the current region group
    /// - Legislator: draw one extra player card
    pub fn plan<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        rng: &mut R,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        let player = actor_of(state, actor)?;
        let name = player.name.clone();
        let role = player.role;
        let region = player.current_region.clone();
        let turn = state.turn_number;

        match role {
            Role::EnvironmentMinister => {
                let increase = self.config.plan_protection_increase;
                if let Some(wildfire) = state.wildfire_mut(&region) {
                    wildfire.protection_level = wildfire.protection_level.saturating_add(increase).min(100);
                    log.push(
                        turn,
                        format!(
                            "{} planned prevention in {}. Environmental protection: {}.",
                            name, region, wildfire.protection_level
                        ),
                    );
                }
            }

            Role::Governor => {
                let hottest = self
                    .graph
                    .group_of(&region)
                    .and_then(|group| self.hottest_in_group(state, group));
                match hottest {
                    Some(target) => {
                        if let Some(wildfire) = state.wildfire_mut(&target) {
                            wildfire.fire_level -= 1;
                            log.push(
                                turn,
                                format!(
                                    "{} coordinated a regional response in {}. Fire level: {}.",
                                    name, target, wildfire.fire_level
                                ),
                            );
                        }
                    }
                    None => {
                        log.push(turn, format!("{} planned, but no fire burns in the region group.", name));
                    }
                }
            }

            Role::Legislator => match state.player_cards.draw_recycling(rng) {
                Draw::Card { card, reshuffled } => {
                    if reshuffled {
                        log.push(turn, "Player deck empty, reshuffling the discard.");
                    }
                    if let Some(player) = state.player_mut(actor) {
                        player.hand.push_back(card.clone());
                    }
                    log.push(turn, format!("{} passed a bill and drew card {}.", name, card));
                }
                Draw::Exhausted => {
                    log.push(turn, format!("{} planned, but there are no player cards left.", name));
                }
            },
        }
        Ok(())
    }

    /// Burning region of `group` with the highest fire level; the first in
    /// map order on ties.
    fn hottest_in_group(&self, state: &GameState, group: RegionGroup) -> Option<RegionId> {
        let mut best: Option<(u8, &RegionId)> = None;
        for wildfire in state.wildfires.iter().filter(|w| w.is_burning()) {
            if self.graph.group_of(&wildfire.region) != Some(group) {
                continue;
            }
            if best.map_or(true, |(level, _)| wildfire.fire_level > level) {
                best = Some((wildfire.fire_level, &wildfire.region));
            }
        }
        best.map(|(_, region)| region.clone())
    }

    /// Spend the current region's card to build a prevention center there.
    pub fn build_center(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        let player = actor_of(state, actor)?;
        let name = player.name.clone();
        let region = player.current_region.clone();

        if state.has_center(&region) {
            return Err(ActionError::CenterAlreadyBuilt { region });
        }
        if !player.holds(&region) {
            return Err(ActionError::CardNotHeld { player: name, card: region });
        }

        if let Some(player) = state.player_mut(actor) {
            player.remove_card(&region);
        }
        state.player_cards.discard(region.clone());
        state.prevention_centers.push_back(region.clone());
        log.push(
            state.turn_number,
            format!("{} built a prevention center in {}.", name, self.region_name(&region)),
        );
        Ok(())
    }

    /// Lock the current region group.
    ///
    /// Requires a prevention center here and `moratorium_cards_required`
    /// distinct cards of the group, or every card of the group when it has
    /// fewer regions than that. With no cards named, the first matching
    /// cards of the hand are used.
    pub fn declare_moratorium(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        cards: &[RegionId],
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        let player = actor_of(state, actor)?;
        let name = player.name.clone();
        let region = player.current_region.clone();

        if !state.has_center(&region) {
            return Err(ActionError::NoCenterHere { region });
        }
        let group = self
            .graph
            .group_of(&region)
            .ok_or_else(|| ActionError::UnknownRegion(region.clone()))?;
        if state.is_locked(group) {
            return Err(ActionError::MoratoriumAlreadyDeclared { group });
        }

        if let Some(card) = cards.iter().find(|card| !player.holds(card)) {
            return Err(ActionError::CardNotHeld { player: name, card: card.clone() });
        }

        let candidates: Vec<&RegionId> = if cards.is_empty() {
            player.hand.iter().collect()
        } else {
            cards.iter().collect()
        };
        let required = self
            .config
            .moratorium_cards_required
            .min(self.graph.in_group(group).count());
        let mut chosen: SmallVec<[RegionId; 4]> = SmallVec::new();
        for card in candidates {
            if chosen.len() == required {
                break;
            }
            if self.graph.group_of(card) == Some(group) && !chosen.contains(card) {
                chosen.push(card.clone());
            }
        }
        if chosen.len() < required {
            return Err(ActionError::NotEnoughGroupCards {
                group,
                required,
                offered: chosen.len(),
            });
        }

        if let Some(player) = state.player_mut(actor) {
            for card in &chosen {
                player.remove_card(card);
            }
        }
        for card in chosen {
            state.player_cards.discard(card);
        }
        state.moratoriums.push_back(group);
        log.push(
            state.turn_number,
            format!("{} declared a moratorium on the {} region group.", name, group),
        );
        Ok(())
    }
}

/// The acting player, cloned out of the state so the handler may mutate
/// the state afterwards.
fn actor_of(state: &GameState, actor: PlayerId) -> Result<Player, ActionError> {
    state
        .player(actor)
        .cloned()
        .ok_or_else(|| ActionError::UnknownPlayer(actor.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedRandom, WildfireState};

    struct Table {
        graph: RegionGraph,
        config: RulesConfig,
        state: GameState,
        log: GameLog,
    }

    impl Table {
        /// Brazil board, no fire; seat 0 is a Minister in AM, seat 1 a
        /// Governor in AM, seat 2 a Legislator in RS.
        fn new() -> Self {
            let graph = RegionGraph::brazil();
            let mut state = GameState::new(100);
            state.turn_number = 1;
            for id in graph.ids() {
                state.wildfires.push_back(WildfireState::calm(id.clone()));
            }
            let seats = [
                (Role::EnvironmentMinister, "AM"),
                (Role::Governor, "AM"),
                (Role::Legislator, "RS"),
            ];
            for (seat, (role, region)) in seats.into_iter().enumerate() {
                let id = PlayerId::new(seat as u8);
                state.players.push_back(Player::new(id, format!("P{}", seat), role, RegionId::new(region), 4));
            }
            Self {
                graph,
                config: RulesConfig::default(),
                state,
                log: GameLog::new(50),
            }
        }

        fn apply(&mut self, seat: u8, action: Action, rng: f64) -> Result<(), ActionError> {
            ActionRules::new(&self.graph, &self.config).apply(
                &mut self.state,
                PlayerId::new(seat),
                &action,
                &mut ScriptedRandom::constant(rng),
                &mut self.log,
            )
        }

        fn set_fire(&mut self, region: &str, level: u8) {
            self.state.wildfire_mut(&RegionId::new(region)).unwrap().fire_level = level;
        }

        fn give(&mut self, seat: u8, cards: &[&str]) {
            let player = self.state.player_mut(PlayerId::new(seat)).unwrap();
            for card in cards {
                player.hand.push_back(RegionId::new(*card));
            }
        }

        fn position(&self, seat: u8) -> &str {
            self.state.player(PlayerId::new(seat)).unwrap().current_region.as_str()
        }
    }

    fn go(to: &str) -> Action {
        Action::Move { destination: RegionId::new(to) }
    }

    #[test]
    fn test_move_adjacent() {
        let mut table = Table::new();
        assert!(table.apply(0, go("PA"), 0.0).is_ok());
        assert_eq!(table.position(0), "PA");
    }

    #[test]
    fn test_move_rejected_leaves_state() {
        let mut table = Table::new();
        let before = table.state.clone();
        let err = table.apply(0, go("RS"), 0.0).unwrap_err();
        assert!(matches!(err, ActionError::NotAdjacent { .. }));
        assert_eq!(table.state, before);
    }

    #[test]
    fn test_move_unknown_region() {
        let mut table = Table::new();
        let err = table.apply(0, go("XX"), 0.0).unwrap_err();
        assert_eq!(err, ActionError::UnknownRegion(RegionId::new("XX")));
    }

    #[test]
    fn test_governor_moves_within_group() {
        let mut table = Table::new();
        // AM and AC are both North but not adjacent.
        assert!(table.apply(1, go("AC"), 0.0).is_ok());
        assert_eq!(table.position(1), "AC");
        // Leaving the group still needs adjacency.
        assert!(table.apply(1, go("SP"), 0.0).is_err());
    }

    #[test]
    fn test_fight_fire() {
        let mut table = Table::new();
        table.set_fire("AM", 2);
        // Seat 1 is not a Minister, no bonus roll.
        assert!(table.apply(1, Action::FightFire, 0.0).is_ok());
        assert_eq!(table.state.fire_level(&RegionId::new("AM")), 1);
    }

    #[test]
    fn test_fight_fire_needs_fire() {
        let mut table = Table::new();
        let err = table.apply(0, Action::FightFire, 0.0).unwrap_err();
        assert!(matches!(err, ActionError::NoFireHere { .. }));
    }

    #[test]
    fn test_minister_bonus() {
        let mut table = Table::new();
        table.set_fire("AM", 3);
        assert!(table.apply(0, Action::FightFire, 0.0).is_ok());
        assert_eq!(table.state.fire_level(&RegionId::new("AM")), 1);

        table.set_fire("AM", 3);
        assert!(table.apply(0, Action::FightFire, 0.99).is_ok());
        assert_eq!(table.state.fire_level(&RegionId::new("AM")), 2);
    }

    #[test]
    fn test_cooperate() {
        let mut table = Table::new();
        table.give(0, &["SP"]);
        let action = Action::Cooperate { target: PlayerId::new(1), card: RegionId::new("SP") };
        assert!(table.apply(0, action, 0.0).is_ok());
        assert!(table.state.players[0].hand.is_empty());
        assert_eq!(table.state.players[1].hand.len(), 1);
    }

    #[test]
    fn test_cooperate_rejections() {
        let mut table = Table::new();
        table.give(0, &["SP"]);
        let card = RegionId::new("SP");

        let far = Action::Cooperate { target: PlayerId::new(2), card: card.clone() };
        assert!(matches!(table.apply(0, far, 0.0), Err(ActionError::NotTogether { .. })));

        let missing = Action::Cooperate { target: PlayerId::new(7), card: card.clone() };
        assert!(matches!(table.apply(0, missing, 0.0), Err(ActionError::UnknownPlayer(_))));

        let itself = Action::Cooperate { target: PlayerId::new(0), card };
        assert!(matches!(table.apply(0, itself, 0.0), Err(ActionError::SelfCooperation { .. })));

        let unheld = Action::Cooperate { target: PlayerId::new(1), card: RegionId::new("RJ") };
        assert!(matches!(table.apply(0, unheld, 0.0), Err(ActionError::CardNotHeld { .. })));
    }

    #[test]
    fn test_plan_minister_protection() {
        let mut table = Table::new();
        table.state.wildfire_mut(&RegionId::new("AM")).unwrap().protection_level = 95;
        assert!(table.apply(0, Action::Plan, 0.0).is_ok());
        assert_eq!(table.state.wildfire(&RegionId::new("AM")).unwrap().protection_level, 100);
    }

    #[test]
    fn test_plan_governor_hits_hottest_in_group() {
        let mut table = Table::new();
        table.set_fire("PA", 1);
        table.set_fire("RR", 3);
        table.set_fire("SP", 3);
        assert!(table.apply(1, Action::Plan, 0.0).is_ok());
        assert_eq!(table.state.fire_level(&RegionId::new("RR")), 2);
        assert_eq!(table.state.fire_level(&RegionId::new("PA")), 1);
        assert_eq!(table.state.fire_level(&RegionId::new("SP")), 3);
    }

    #[test]
    fn test_plan_governor_no_fire_still_succeeds() {
        let mut table = Table::new();
        assert!(table.apply(1, Action::Plan, 0.0).is_ok());
    }

    #[test]
    fn test_plan_legislator_draws() {
        let mut table = Table::new();
        table.state.player_cards = crate::cards::Pile::new(vec![RegionId::new("GO")]);
        assert!(table.apply(2, Action::Plan, 0.0).is_ok());
        assert_eq!(table.state.players[2].hand.len(), 1);

        // Nothing left: logged, still a success.
        assert!(table.apply(2, Action::Plan, 0.0).is_ok());
        assert_eq!(table.state.players[2].hand.len(), 1);
    }

    #[test]
    fn test_build_center() {
        let mut table = Table::new();
        let err = table.apply(0, Action::BuildCenter, 0.0).unwrap_err();
        assert!(matches!(err, ActionError::CardNotHeld { .. }));

        table.give(0, &["AM"]);
        assert!(table.apply(0, Action::BuildCenter, 0.0).is_ok());
        assert!(table.state.has_center(&RegionId::new("AM")));
        assert_eq!(table.state.player_cards.discard_len(), 1);

        table.give(0, &["AM"]);
        let err = table.apply(0, Action::BuildCenter, 0.0).unwrap_err();
        assert_eq!(err, ActionError::CenterAlreadyBuilt { region: RegionId::new("AM") });
    }

    #[test]
    fn test_declare_moratorium() {
        let mut table = Table::new();
        table.state.prevention_centers.push_back(RegionId::new("AM"));
        table.give(0, &["PA", "SP", "RR", "AC", "TO", "RO"]);

        assert!(table.apply(0, Action::DeclareMoratorium { cards: SmallVec::new() }, 0.0).is_ok());
        assert!(table.state.is_locked(RegionGroup::North));
        let hand: Vec<_> = table.state.players[0].hand.iter().map(RegionId::as_str).collect();
        assert_eq!(hand, vec!["SP", "RO"]);
        assert_eq!(table.state.player_cards.discard_len(), 4);

        let err = table.apply(0, Action::DeclareMoratorium { cards: SmallVec::new() }, 0.0).unwrap_err();
        assert_eq!(err, ActionError::MoratoriumAlreadyDeclared { group: RegionGroup::North });
    }

    #[test]
    fn test_moratorium_needs_enough_cards() {
        let mut table = Table::new();
        table.state.prevention_centers.push_back(RegionId::new("AM"));
        table.give(0, &["PA", "PA", "SP", "RR"]);
        let before = table.state.clone();

        let cards = ["PA", "PA", "SP", "RR"].iter().map(|c| RegionId::new(*c)).collect();
        let err = table.apply(0, Action::DeclareMoratorium { cards }, 0.0).unwrap_err();

        assert_eq!(
            err,
            ActionError::NotEnoughGroupCards {
                group: RegionGroup::North,
                required: 4,
                offered: 2,
            }
        );
        assert_eq!(table.state, before);
    }

    #[test]
    fn test_moratorium_in_small_group_takes_every_card() {
        let mut table = Table::new();
        table.state.prevention_centers.push_back(RegionId::new("RS"));
        table.give(2, &["PR", "SC", "RS"]);

        assert!(table.apply(2, Action::DeclareMoratorium { cards: SmallVec::new() }, 0.0).is_ok());
        assert!(table.state.is_locked(RegionGroup::South));
        assert!(table.state.players[2].hand.is_empty());
        assert_eq!(table.state.player_cards.discard_len(), 3);
    }

    #[test]
    fn test_moratorium_needs_center() {
        let mut table = Table::new();
        let err = table.apply(0, Action::DeclareMoratorium { cards: SmallVec::new() }, 0.0).unwrap_err();
        assert_eq!(err, ActionError::NoCenterHere { region: RegionId::new("AM") });
    }
}
