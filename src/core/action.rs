//! Player actions.
//!
//! An [`Action`] is the verb plus its arguments. The presentation layer
//! usually speaks in names and positional string arguments; use
//! [`Action::parse`] to turn those into a typed action.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ActionError;
use super::player::PlayerId;
use super::region::RegionId;

/// Kind of action, without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    FightFire,
    Cooperate,
    Plan,
    BuildCenter,
    DeclareMoratorium,
}

impl ActionKind {
    /// Every action kind.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Move,
        ActionKind::FightFire,
        ActionKind::Cooperate,
        ActionKind::Plan,
        ActionKind::BuildCenter,
        ActionKind::DeclareMoratorium,
    ];

    /// Name used in logs and by [`ActionKind::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Move => "Move",
            ActionKind::FightFire => "FightFire",
            ActionKind::Cooperate => "Cooperate",
            ActionKind::Plan => "Plan",
            ActionKind::BuildCenter => "BuildCenter",
            ActionKind::DeclareMoratorium => "DeclareMoratorium",
        }
    }

    /// Look up a kind by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ActionKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete player action.
///
/// ```
/// use wildfire_engine::core::{Action, ActionKind, RegionId};
///
/// let action = Action::parse("Move", &["GO"]).unwrap();
/// assert_eq!(action, Action::Move { destination: RegionId::new("GO") });
/// assert_eq!(action.kind(), ActionKind::Move);
///
/// assert!(Action::parse("Teleport", &[]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move to another region.
    Move { destination: RegionId },
    /// Lower the fire level of the current region.
    FightFire,
    /// Give a card to a player sharing the current region.
    Cooperate { target: PlayerId, card: RegionId },
    /// Role-specific planning.
    Plan,
    /// Build a prevention center at the current region.
    BuildCenter,
    /// Lock the current region group, discarding cards of that group.
    DeclareMoratorium { cards: SmallVec<[RegionId; 4]> },
}

impl Action {
    /// The kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move { .. } => ActionKind::Move,
            Action::FightFire => ActionKind::FightFire,
            Action::Cooperate { .. } => ActionKind::Cooperate,
            Action::Plan => ActionKind::Plan,
            Action::BuildCenter => ActionKind::BuildCenter,
            Action::DeclareMoratorium { .. } => ActionKind::DeclareMoratorium,
        }
    }

    /// Build an action from its name and positional arguments.
    ///
    /// - `Move <destination>`
    /// - `FightFire`
    /// - `Cooperate <player-id> <card>`
    /// - `Plan`
    /// - `BuildCenter`
    /// - `DeclareMoratorium <card>...`
    ///
    /// Extra arguments are ignored.
    pub fn parse(name: &str, args: &[&str]) -> Result<Action, ActionError> {
        let kind =
            ActionKind::from_name(name).ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;
        let arg = |index: usize, argument: &'static str| {
            args.get(index).copied().ok_or(ActionError::MissingArgument {
                action: kind.name(),
                argument,
            })
        };

        let action = match kind {
            ActionKind::Move => Action::Move {
                destination: RegionId::new(arg(0, "destination")?),
            },
            ActionKind::FightFire => Action::FightFire,
            ActionKind::Cooperate => {
                let target = arg(0, "target player")?;
                let target = target
                    .parse::<PlayerId>()
                    .map_err(|()| ActionError::UnknownPlayer(target.to_string()))?;
                Action::Cooperate {
                    target,
                    card: RegionId::new(arg(1, "card")?),
                }
            }
            ActionKind::Plan => Action::Plan,
            ActionKind::BuildCenter => Action::BuildCenter,
            ActionKind::DeclareMoratorium => Action::DeclareMoratorium {
                cards: args.iter().map(|&card| RegionId::new(card)).collect(),
            },
        };
        Ok(action)
    }
}

/// A successful action, as recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who took the action.
    pub player: PlayerId,
    /// The action taken.
    pub action: Action,
    /// Turn number when taken.
    pub turn: u32,
    /// Sequence number within the game.
    pub sequence: u32,
}
