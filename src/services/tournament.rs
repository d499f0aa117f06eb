use log::info;

use crate::config::settings::AppConfig;
use crate::database::{Database, Match, Player, PlayerId, TournamentStore};
use crate::errors::Result;
use crate::tournament::{self, Pairing, StandingsEntry};

/// Entry point for every tournament operation.
///
/// Each method runs in its own transaction, so an operation either lands
/// completely or not at all.
pub struct TournamentService {
    db: Database,
}

impl TournamentService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Opens the configured database, creating the schema if it is missing.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let db = Database::open(&config.database)?;
        db.initialize_schema()?;
        Ok(Self::new(db))
    }

    pub fn reset_database(&self) -> Result<()> {
        self.db.reset()
    }

    pub fn register_player(&self, full_name: &str) -> Result<Player> {
        let player = self.db.transaction(|conn| conn.register_player(full_name))?;
        info!("Registered player {} ({})", player.id, player.full_name());
        Ok(player)
    }

    pub fn count_players(&self) -> Result<usize> {
        self.db.transaction(|conn| conn.count_players())
    }

    pub fn delete_players(&self) -> Result<()> {
        self.db.transaction(|conn| conn.delete_players())?;
        info!("Deleted all players and matches");
        Ok(())
    }

    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
        self.db
            .transaction(|conn| tournament::record_match(conn, winner_id, loser_id))
    }

    pub fn delete_matches(&self) -> Result<()> {
        self.db.transaction(|conn| tournament::reset_matches(conn))?;
        info!("Deleted all matches");
        Ok(())
    }

    pub fn opponent_match_wins(&self, player_id: PlayerId) -> Result<u32> {
        self.db
            .transaction(|conn| tournament::opponent_match_wins(conn, player_id))
    }

    pub fn player_standings(&self) -> Result<Vec<StandingsEntry>> {
        self.db.transaction(|conn| tournament::player_standings(conn))
    }

    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        self.db.transaction(|conn| tournament::swiss_pairings(conn))
    }
}
