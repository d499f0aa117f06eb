use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::{
    handle_count, handle_delete_players, handle_init, handle_owm, handle_pairings,
    handle_register, handle_report, handle_reset, handle_reset_matches, handle_standings,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = AppConfig::new().with_database_path(cli.database);
    execute_command(&config, &cli.command)
}

fn execute_command(config: &AppConfig, command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(config),
        Command::Reset => handle_reset(config),
        Command::Register { name } => handle_register(config, name),
        Command::Count => handle_count(config),
        Command::Report { winner, loser } => handle_report(config, *winner, *loser),
        Command::Owm { player } => handle_owm(config, *player),
        Command::Standings { json } => handle_standings(config, *json),
        Command::Pairings { json } => handle_pairings(config, *json),
        Command::ResetMatches => handle_reset_matches(config),
        Command::DeletePlayers => handle_delete_players(config),
    }
}
