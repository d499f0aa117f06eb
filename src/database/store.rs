use rusqlite::Connection;

use super::models::{Match, Player, PlayerId};
use super::{matches, players};
use crate::errors::Result;

/// Data access contract the tournament core runs against.
///
/// The SQLite implementation works on a plain [`Connection`], so it can be
/// driven through an open transaction (see [`super::Database::transaction`]).
pub trait TournamentStore {
    /// Registers a player, failing with [`crate::errors::Error::InvalidName`]
    /// when the name cannot be decomposed into first and last name.
    fn register_player(&self, full_name: &str) -> Result<Player>;

    fn count_players(&self) -> Result<usize>;

    /// Removes every player and, with them, every match.
    fn delete_players(&self) -> Result<()>;

    /// All players with their derived records, in registration order.
    fn fetch_all_players(&self) -> Result<Vec<Player>>;

    fn fetch_player(&self, player_id: PlayerId) -> Result<Option<Player>>;

    fn fetch_matches_involving(&self, player_id: PlayerId) -> Result<Vec<Match>>;

    /// Stores one match outcome. Win and loss counts are aggregated from the
    /// match rows, so this single insert is also the count update.
    fn insert_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match>;

    /// Clears the match history, which zeroes every player's record.
    fn delete_matches(&self) -> Result<()>;
}

impl TournamentStore for Connection {
    fn register_player(&self, full_name: &str) -> Result<Player> {
        players::insert_player(self, full_name)
    }

    fn count_players(&self) -> Result<usize> {
        players::count(self)
    }

    fn delete_players(&self) -> Result<()> {
        players::delete_all(self).map(|_| ())
    }

    fn fetch_all_players(&self) -> Result<Vec<Player>> {
        players::list_all(self)
    }

    fn fetch_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        players::find_by_id(self, player_id)
    }

    fn fetch_matches_involving(&self, player_id: PlayerId) -> Result<Vec<Match>> {
        matches::list_involving(self, player_id)
    }

    fn insert_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
        matches::insert_match(self, winner_id, loser_id)
    }

    fn delete_matches(&self) -> Result<()> {
        matches::delete_all(self).map(|_| ())
    }
}
