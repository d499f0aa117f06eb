use log::debug;

use crate::database::{Match, Player, PlayerId, TournamentStore};
use crate::errors::{Error, Result};

/// Records that `winner_id` beat `loser_id`.
///
/// Both players must exist and must differ. Every call adds a new match row,
/// so reporting the same result twice counts it twice.
pub fn record_match<S>(store: &S, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match>
where
    S: TournamentStore + ?Sized,
{
    if winner_id == loser_id {
        return Err(Error::SelfMatch(winner_id));
    }
    require_player(store, winner_id)?;
    require_player(store, loser_id)?;

    let recorded = store.insert_match(winner_id, loser_id)?;
    debug!("Recorded match {}: {} beat {}", recorded.id, winner_id, loser_id);
    Ok(recorded)
}

/// Wipes the match history for a tournament restart. Players are kept.
pub fn reset_matches<S>(store: &S) -> Result<()>
where
    S: TournamentStore + ?Sized,
{
    store.delete_matches()
}

pub(crate) fn require_player<S>(store: &S, player_id: PlayerId) -> Result<Player>
where
    S: TournamentStore + ?Sized,
{
    store
        .fetch_player(player_id)?
        .ok_or(Error::UnknownPlayer(player_id))
}
