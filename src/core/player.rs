//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat-based identifier. Seat 0 displays as `player-1`, matching the ids
//! handed out to the presentation layer.
//!
//! ## Player
//!
//! Name, role, hand of region cards, position and remaining actions.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::region::RegionId;

/// Player identifier (0-based seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.index() + 1)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = ();

    /// Parse the `player-<n>` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u16 = s.strip_prefix("player-").ok_or(())?.parse().map_err(|_| ())?;
        if number == 0 || number > u8::MAX as u16 {
            return Err(());
        }
        Ok(PlayerId((number - 1) as u8))
    }
}

/// Player role. Each role carries one special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Firefighting bonus; Plan raises local environmental protection.
    EnvironmentMinister,
    /// Free movement inside the current region group; Plan fights the
    /// worst fire of the group.
    Governor,
    /// Plan draws an extra card.
    Legislator,
}

impl Role {
    /// Roles in assignment order.
    pub const ALL: [Role; 3] = [Role::EnvironmentMinister, Role::Governor, Role::Legislator];

    /// Role for a seat. Cycles when there are more seats than roles.
    #[must_use]
    pub const fn for_seat(seat: usize) -> Role {
        Self::ALL[seat % Self::ALL.len()]
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::EnvironmentMinister => "Environment Minister",
            Role::Governor => "Governor",
            Role::Legislator => "Legislator",
        }
    }

    /// Whether Move may target any region of the current region group.
    #[must_use]
    pub const fn moves_freely_within_group(self) -> bool {
        matches!(self, Role::Governor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// Region cards held, in draw order.
    pub hand: Vector<RegionId>,
    pub current_region: RegionId,
    pub actions_remaining: u32,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        role: Role,
        current_region: RegionId,
        actions_remaining: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            hand: Vector::new(),
            current_region,
            actions_remaining,
        }
    }

    /// Check whether the player holds a card.
    #[must_use]
    pub fn holds(&self, card: &RegionId) -> bool {
        self.hand.contains(card)
    }

    /// Remove the first copy of a card from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_card(&mut self, card: &RegionId) -> bool {
        if let Some(pos) = self.hand.index_of(card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display_and_parse() {
        let p = PlayerId::new(2);
        assert_eq!(p.to_string(), "player-3");
        assert_eq!("player-3".parse::<PlayerId>(), Ok(p));
        assert!("player-0".parse::<PlayerId>().is_err());
        assert!("seat-1".parse::<PlayerId>().is_err());
        assert!("player-x".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_roles_cycle() {
        assert_eq!(Role::for_seat(0), Role::EnvironmentMinister);
        assert_eq!(Role::for_seat(1), Role::Governor);
        assert_eq!(Role::for_seat(2), Role::Legislator);
        assert_eq!(Role::for_seat(3), Role::EnvironmentMinister);
        assert!(Role::Governor.moves_freely_within_group());
        assert!(!Role::Legislator.moves_freely_within_group());
    }

    #[test]
    fn test_hand_operations() {
        let mut player = Player::new(PlayerId::new(0), "Ana", Role::Governor, RegionId::new("DF"), 4);
        player.hand.push_back(RegionId::new("AM"));
        player.hand.push_back(RegionId::new("PA"));

        assert!(player.holds(&RegionId::new("AM")));
        assert!(player.remove_card(&RegionId::new("AM")));
        assert!(!player.holds(&RegionId::new("AM")));
        assert!(!player.remove_card(&RegionId::new("AM")));
        assert_eq!(player.hand.len(), 1);
    }
}
