//! Error types.
//!
//! Rejected actions are not surfaced as `Err` to callers of the engine;
//! their `Display` text becomes the game-log entry explaining the
//! rejection. Configuration errors are returned from table loaders.

use thiserror::Error;

use super::player::PlayerId;
use super::region::{RegionGroup, RegionId};

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game is already over, no action can be taken")]
    GameOver,
    #[error("player {0} not found")]
    UnknownPlayer(String),
    #[error("{0} has no actions left this turn")]
    NoActionsLeft(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("action {action} is missing its {argument} argument")]
    MissingArgument {
        action: &'static str,
        argument: &'static str,
    },
    #[error("region {0} does not exist")]
    UnknownRegion(RegionId),
    #[error("{player} cannot move directly from {from} to {to}")]
    NotAdjacent {
        player: String,
        from: RegionId,
        to: RegionId,
    },
    #[error("{player} found no active fire to fight in {region}")]
    NoFireHere { player: String, region: RegionId },
    #[error("{player} and {other} are not in the same region")]
    NotTogether { player: String, other: PlayerId },
    #[error("{player} cannot cooperate with themselves")]
    SelfCooperation { player: String },
    #[error("{player} does not hold card {card}")]
    CardNotHeld { player: String, card: RegionId },
    #[error("{region} already has a prevention center")]
    CenterAlreadyBuilt { region: RegionId },
    #[error("there is no prevention center in {region}")]
    NoCenterHere { region: RegionId },
    #[error("{group} is already under moratorium")]
    MoratoriumAlreadyDeclared { group: RegionGroup },
    #[error("a moratorium in {group} needs {required} distinct cards of the group, {offered} offered")]
    NotEnoughGroupCards {
        group: RegionGroup,
        required: usize,
        offered: usize,
    },
}

/// Invalid configuration data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("region {0} is defined more than once")]
    DuplicateRegion(RegionId),
    #[error("region {region} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { region: RegionId, neighbor: RegionId },
    #[error("the region table is empty")]
    EmptyMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        let err = ActionError::NotAdjacent {
            player: "Ana".into(),
            from: RegionId::new("RS"),
            to: RegionId::new("AM"),
        };
        assert_eq!(err.to_string(), "Ana cannot move directly from RS to AM");

        let err = ActionError::NotEnoughGroupCards {
            group: RegionGroup::South,
            required: 4,
            offered: 2,
        };
        assert!(err.to_string().contains("South"));
    }

    #[test]
    fn test_config_error_from_json() {
        let parse: Result<Vec<u8>, _> = serde_json::from_str("not json");
        let err: ConfigError = parse.unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
