pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod render;
pub mod services;
pub mod tournament;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::PlayerId;
use crate::services::tournament::TournamentService;

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_service(config: &AppConfig) -> Result<TournamentService> {
    TournamentService::open(config)
        .with_context(|| format!("Failed to open database {}", config.database.path))
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    open_service(config)?;
    println!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service
        .reset_database()
        .context("Failed to reset database")?;
    println!("Database reset");
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &[String]) -> Result<()> {
    let service = open_service(config)?;
    let full_name = name.join(" ");
    let player = service
        .register_player(&full_name)
        .with_context(|| format!("Failed to register {full_name:?}"))?;
    println!("{}", player.id);
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: PlayerId, loser: PlayerId) -> Result<()> {
    let service = open_service(config)?;
    let recorded = service
        .report_match(winner, loser)
        .with_context(|| format!("Failed to record {winner} beating {loser}"))?;
    info!("Stored match {}", recorded.id);
    Ok(())
}

pub fn handle_owm(config: &AppConfig, player: PlayerId) -> Result<()> {
    let service = open_service(config)?;
    let owm = service
        .opponent_match_wins(player)
        .with_context(|| format!("Failed to compute opponent match wins for {player}"))?;
    println!("{owm}");
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let standings = service
        .player_standings()
        .context("Failed to compute standings")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        println!("{}", render::standings_table(&standings));
    }
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let pairings = service
        .swiss_pairings()
        .context("Failed to compute pairings")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
    } else {
        println!("{}", render::pairings_table(&pairings));
    }
    Ok(())
}

pub fn handle_reset_matches(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service
        .delete_matches()
        .context("Failed to delete matches")
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service
        .delete_players()
        .context("Failed to delete players")
}
