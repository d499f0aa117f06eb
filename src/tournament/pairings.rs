use crate::database::TournamentStore;
use crate::errors::{Error, Result};

use super::standings::player_standings;
use super::types::{Pairing, StandingsEntry};

/// Next-round pairings: first against second, third against fourth, and so on
/// down the current standings.
pub fn swiss_pairings<S>(store: &S) -> Result<Vec<Pairing>>
where
    S: TournamentStore + ?Sized,
{
    let standings = player_standings(store)?;
    pair_adjacent(&standings)
}

/// Pairs each entry with its neighbour. An odd count is rejected rather than
/// leaving the last player out.
pub fn pair_adjacent(standings: &[StandingsEntry]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(Error::OddPlayerCount(standings.len()));
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect())
}
