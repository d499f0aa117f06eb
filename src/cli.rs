use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-system tournament standings and pairings")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the database schema if it does not exist yet
    Init,
    /// Drop all tournament data and recreate the schema
    Reset,
    /// Register a player
    Register {
        /// Full name, e.g. "Ada Lovelace"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Print the number of registered players
    Count,
    /// Record the outcome of a match
    Report {
        /// Id of the winning player
        #[arg(short, long)]
        winner: i64,
        /// Id of the losing player
        #[arg(short, long)]
        loser: i64,
    },
    /// Print a player's Opponent Match Wins
    Owm {
        /// Player id
        player: i64,
    },
    /// Print the current standings
    Standings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the pairings for the next round
    Pairings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete every match result, keeping the players
    ResetMatches,
    /// Delete every player and their matches
    DeletePlayers,
}
