use crate::database::{PlayerId, TournamentStore};
use crate::errors::Result;

use super::ledger::require_player;

/// Opponent Match Wins: the sum of the current win totals of every opponent
/// `player_id` has faced, counted once per match played against them.
///
/// Opponent totals cover the whole tournament, not just the games against
/// `player_id`. Nothing is cached between calls.
pub fn opponent_match_wins<S>(store: &S, player_id: PlayerId) -> Result<u32>
where
    S: TournamentStore + ?Sized,
{
    require_player(store, player_id)?;

    store
        .fetch_matches_involving(player_id)?
        .iter()
        .filter_map(|played| played.opponent_of(player_id))
        .map(|opponent_id| require_player(store, opponent_id).map(|opponent| opponent.wins))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::tournament::record_match;
    use crate::tournament::test_support::store_with_players;

    #[test]
    fn test_no_matches_scores_zero() {
        let (store, ids) = store_with_players(&["Ann Smith", "Bo Jackson"]);
        assert_eq!(opponent_match_wins(&store, ids[0]).unwrap(), 0);
    }

    #[test]
    fn test_uses_opponents_total_wins() {
        let (store, ids) = store_with_players(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        record_match(&store, a, b).unwrap();
        record_match(&store, b, c).unwrap();
        record_match(&store, b, d).unwrap();
        record_match(&store, c, d).unwrap();

        // A only faced B, who has two wins, neither of them against A.
        assert_eq!(opponent_match_wins(&store, a).unwrap(), 2);
        // B faced A (1 win), C (1 win) and D (0 wins).
        assert_eq!(opponent_match_wins(&store, b).unwrap(), 2);
        // D faced B (2 wins) and C (1 win).
        assert_eq!(opponent_match_wins(&store, d).unwrap(), 3);
    }

    #[test]
    fn test_repeat_opponent_counts_once_per_match() {
        let (store, ids) = store_with_players(&["A", "B", "C"]);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        record_match(&store, b, c).unwrap();
        record_match(&store, a, b).unwrap();
        record_match(&store, b, a).unwrap();

        // B has 2 wins and A played B twice.
        assert_eq!(opponent_match_wins(&store, a).unwrap(), 4);
    }

    #[test]
    fn test_unknown_player() {
        let (store, ids) = store_with_players(&["A"]);
        let err = opponent_match_wins(&store, ids[0] + 1).unwrap_err();
        assert!(matches!(err, Error::UnknownPlayer(_)));
    }
}
