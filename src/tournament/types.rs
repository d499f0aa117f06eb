use serde::Serialize;

use crate::database::{Player, PlayerId};

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl From<Player> for StandingsEntry {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.full_name(),
            wins: player.wins,
            matches_played: player.matches_played(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairedPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl From<&StandingsEntry> for PairedPlayer {
    fn from(entry: &StandingsEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
        }
    }
}

/// A proposed match for the next round. `first` is the higher ranked player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub first: PairedPlayer,
    pub second: PairedPlayer,
}

impl Pairing {
    pub fn new(first: &StandingsEntry, second: &StandingsEntry) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.first.id, self.second.id]
    }
}
