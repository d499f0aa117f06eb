use log::debug;

use crate::database::{PlayerId, TournamentStore};
use crate::errors::Result;

use super::strength::opponent_match_wins;
use super::types::StandingsEntry;

/// Current standings, best first: by wins, then by Opponent Match Wins.
pub fn player_standings<S>(store: &S) -> Result<Vec<StandingsEntry>>
where
    S: TournamentStore + ?Sized,
{
    let entries = store
        .fetch_all_players()?
        .into_iter()
        .map(StandingsEntry::from)
        .collect();

    rank(entries, |player_id| opponent_match_wins(store, player_id))
}

/// Orders `entries` by wins descending, breaking ties by the score from
/// `tie_break` (descending).
///
/// `tie_break` is only consulted for players that share their win count with
/// someone else. Players still tied after that keep their input order.
pub fn rank<F>(entries: Vec<StandingsEntry>, mut tie_break: F) -> Result<Vec<StandingsEntry>>
where
    F: FnMut(PlayerId) -> Result<u32>,
{
    let mut by_wins = entries;
    by_wins.sort_by(|a, b| b.wins.cmp(&a.wins));

    let mut ranked = Vec::with_capacity(by_wins.len());
    for block in by_wins.chunk_by(|a, b| a.wins == b.wins) {
        if block.len() < 2 {
            ranked.extend_from_slice(block);
        } else {
            debug!("Breaking a {}-way tie at {} wins", block.len(), block[0].wins);
            ranked.extend(break_tie(block, &mut tie_break)?);
        }
    }

    Ok(ranked)
}

fn break_tie<F>(block: &[StandingsEntry], tie_break: &mut F) -> Result<Vec<StandingsEntry>>
where
    F: FnMut(PlayerId) -> Result<u32>,
{
    let mut scored = block
        .iter()
        .map(|entry| tie_break(entry.id).map(|score| (score, entry.clone())))
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|(a, _), (b, _)| b.cmp(a));
    Ok(scored.into_iter().map(|(_, entry)| entry).collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::database::{Match, Player};
    use crate::errors::Error;
    use crate::tournament::record_match;
    use crate::tournament::test_support::store_with_players;

    fn entry(id: PlayerId, wins: u32) -> StandingsEntry {
        StandingsEntry {
            id,
            name: format!("Player {id}"),
            wins,
            matches_played: 3,
        }
    }

    fn ids(entries: &[StandingsEntry]) -> Vec<PlayerId> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_rank_sorts_by_wins() {
        let entries = vec![entry(1, 0), entry(2, 3), entry(3, 1)];
        let ranked = rank(entries, |_| panic!("no ties to break")).unwrap();
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_breaks_ties_inside_each_block_only() {
        let entries = vec![
            entry(1, 1),
            entry(2, 2),
            entry(3, 1),
            entry(4, 2),
            entry(5, 0),
        ];
        let scores = HashMap::from([(1, 1), (2, 0), (3, 5), (4, 3)]);
        let mut asked = Vec::new();

        let ranked = rank(entries, |id| {
            asked.push(id);
            Ok(scores[&id])
        })
        .unwrap();

        assert_eq!(ids(&ranked), vec![4, 2, 3, 1, 5]);
        asked.sort();
        assert_eq!(asked, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_keeps_input_order_for_residual_ties() {
        let entries = vec![entry(7, 1), entry(3, 1), entry(5, 1)];
        let ranked = rank(entries, |_| Ok(2)).unwrap();
        assert_eq!(ids(&ranked), vec![7, 3, 5]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new(), |_| Ok(0)).unwrap().is_empty());
    }

    #[test]
    fn test_zero_matches_gives_zero_records() {
        let (store, registered) = store_with_players(&["Ann Smith", "Bo Jackson", "Cy Young"]);
        let standings = player_standings(&store).unwrap();

        assert_eq!(ids(&standings), registered);
        assert!(standings.iter().all(|e| e.wins == 0 && e.matches_played == 0));
        assert_eq!(standings[0].name, "Ann Smith");
    }

    #[test]
    fn test_tie_break_scenario() {
        let (store, registered) = store_with_players(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (registered[0], registered[1], registered[2], registered[3]);

        record_match(&store, a, b).unwrap();
        record_match(&store, c, d).unwrap();
        let standings = player_standings(&store).unwrap();
        let first_round = ids(&standings);
        assert!(first_round[..2].contains(&a) && first_round[..2].contains(&c));
        assert!(first_round[2..].contains(&b) && first_round[2..].contains(&d));

        record_match(&store, a, c).unwrap();
        record_match(&store, d, b).unwrap();
        let standings = player_standings(&store).unwrap();
        let second_round = ids(&standings);
        assert_eq!(second_round[0], a);
        assert!(second_round[1..3].contains(&c) && second_round[1..3].contains(&d));
        assert_eq!(second_round[3], b);
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[0].matches_played, 2);
        assert!(standings.iter().all(|e| e.matches_played == 2));
    }

    #[test]
    fn test_stronger_schedule_ranks_higher() {
        let (store, registered) = store_with_players(&["A", "B", "C", "D", "E", "F"]);
        let (a, b, c, d, e, f) = (
            registered[0],
            registered[1],
            registered[2],
            registered[3],
            registered[4],
            registered[5],
        );
        record_match(&store, d, e).unwrap();
        record_match(&store, d, f).unwrap();
        // A and C both end on one win, but C beat D who has two wins of their own.
        record_match(&store, a, b).unwrap();
        record_match(&store, c, d).unwrap();

        let standings = player_standings(&store).unwrap();
        assert_eq!(standings[0].id, d);
        assert_eq!(standings[1].id, c);
        assert_eq!(standings[2].id, a);
    }

    struct BrokenMatchesStore {
        players: Vec<Player>,
    }

    impl TournamentStore for BrokenMatchesStore {
        fn register_player(&self, _full_name: &str) -> Result<Player> {
            unimplemented!()
        }

        fn count_players(&self) -> Result<usize> {
            Ok(self.players.len())
        }

        fn delete_players(&self) -> Result<()> {
            unimplemented!()
        }

        fn fetch_all_players(&self) -> Result<Vec<Player>> {
            Ok(self.players.clone())
        }

        fn fetch_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
            Ok(self.players.iter().find(|p| p.id == player_id).cloned())
        }

        fn fetch_matches_involving(&self, _player_id: PlayerId) -> Result<Vec<Match>> {
            Err(Error::Sql(rusqlite::Error::QueryReturnedNoRows))
        }

        fn insert_match(&self, _winner_id: PlayerId, _loser_id: PlayerId) -> Result<Match> {
            unimplemented!()
        }

        fn delete_matches(&self) -> Result<()> {
            unimplemented!()
        }
    }

    fn stored_player(id: PlayerId, wins: u32) -> Player {
        Player {
            id,
            first_name: format!("P{id}"),
            last_name: String::new(),
            wins,
            losses: 0,
            created_at: None,
        }
    }

    #[test]
    fn test_store_errors_propagate_unchanged() {
        let store = BrokenMatchesStore {
            players: vec![stored_player(1, 1), stored_player(2, 1)],
        };
        let err = player_standings(&store).unwrap_err();
        assert!(matches!(err, Error::Sql(rusqlite::Error::QueryReturnedNoRows)));
    }

    #[test]
    fn test_unique_win_counts_never_touch_matches() {
        let store = BrokenMatchesStore {
            players: vec![stored_player(1, 0), stored_player(2, 2), stored_player(3, 1)],
        };
        let standings = player_standings(&store).unwrap();
        assert_eq!(ids(&standings), vec![2, 3, 1]);
    }
}
