//! Swiss-system ranking: match ledger, opponent strength, standings and pairings.
//!
//! Every function takes the store explicitly and performs no transaction
//! handling of its own; callers decide the transaction scope (see
//! [`crate::services::tournament::TournamentService`]).

pub mod ledger;
pub mod pairings;
pub mod standings;
pub mod strength;
pub mod types;

pub use ledger::{record_match, reset_matches};
pub use pairings::{pair_adjacent, swiss_pairings};
pub use standings::{player_standings, rank};
pub use strength::opponent_match_wins;
pub use types::{PairedPlayer, Pairing, StandingsEntry};
