//! Win/loss evaluation.
//!
//! Conditions are checked in a fixed priority order and the first match
//! wins:
//!
//! 1. Win: no fire on the board and vegetation at the win threshold
//! 2. Win: every region group under moratorium (only with
//!    `moratorium_victory`)
//! 3. Loss: turn limit reached
//! 4. Loss: fire track at its maximum
//! 5. Loss: vegetation at its minimum
//! 6. Loss: player deck and discard both empty after the first round

use crate::core::{EndReason, GameLog, GameState, Outcome, RegionGroup, RulesConfig};

/// First end condition met by `state`, if any. Pure.
#[must_use]
pub fn evaluate(state: &GameState, config: &RulesConfig) -> Option<EndReason> {
    if state.all_fires_out() && state.vegetation_track >= config.win_vegetation_threshold {
        return Some(EndReason::FiresControlled);
    }
    if config.moratorium_victory && RegionGroup::ALL.iter().all(|&group| state.is_locked(group)) {
        return Some(EndReason::AllGroupsProtected);
    }
    if state.turn_number >= config.max_turns {
        return Some(EndReason::TurnLimit);
    }
    if state.fire_track >= config.max_fire_track {
        return Some(EndReason::FireTrackMaxed);
    }
    if state.vegetation_track <= config.min_vegetation {
        return Some(EndReason::VegetationLost);
    }
    if state.player_cards.is_exhausted() && state.turn_number > 1 {
        return Some(EndReason::PlayerDeckExhausted);
    }
    None
}

/// Evaluate and, on a match, end the game.
///
/// No-op on a game that has already ended. Returns whether the game is
/// over after the call.
pub fn check_end_conditions(state: &mut GameState, config: &RulesConfig, log: &mut GameLog) -> bool {
    if state.ended {
        return true;
    }
    match evaluate(state, config) {
        Some(reason) => {
            end_game(state, reason, config, log);
            true
        }
        None => false,
    }
}

/// End the game for `reason` and log it. Ignored if already ended.
pub fn end_game(state: &mut GameState, reason: EndReason, config: &RulesConfig, log: &mut GameLog) {
    if state.ended {
        return;
    }
    state.finish(reason);

    let turn = state.turn_number;
    log.push(turn, describe(reason, config));
    let result = match reason.outcome() {
        Outcome::Win => "VICTORY",
        Outcome::Loss => "DEFEAT",
    };
    log.push(turn, format!("GAME OVER! Result: {}", result));
    tracing::info!(turn, ?reason, outcome = result, "game over");
}

fn describe(reason: EndReason, config: &RulesConfig) -> String {
    match reason {
        EndReason::FiresControlled => {
            "Every fire is under control and the vegetation has recovered. VICTORY!".to_string()
        }
        EndReason::AllGroupsProtected => "Every region group is under moratorium. VICTORY!".to_string(),
        EndReason::TurnLimit => format!("The {} turn limit was reached. DEFEAT.", config.max_turns),
        EndReason::FireTrackMaxed => "The fire track reached its maximum. DEFEAT.".to_string(),
        EndReason::VegetationLost => "The vegetation was completely devastated. DEFEAT.".to_string(),
        EndReason::PlayerDeckExhausted => {
            "The player deck ran out of cards, none are left to draw. DEFEAT.".to_string()
        }
    }
}
