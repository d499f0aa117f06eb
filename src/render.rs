use colored::Colorize;

use crate::tournament::{Pairing, StandingsEntry};

pub fn standings_table(standings: &[StandingsEntry]) -> String {
    if standings.is_empty() {
        return "No players registered".dimmed().to_string();
    }

    let name_width = name_column_width(standings.iter().map(|e| e.name.as_str()));
    let mut lines = vec![
        format!(
            "{:>4}  {:>5}  {:<name_width$}  {:>4}  {:>7}",
            "Rank", "Id", "Name", "Wins", "Matches"
        )
        .bold()
        .to_string(),
    ];

    for (idx, entry) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>5}  {:<name_width$}  {:>4}  {:>7}",
            idx + 1,
            entry.id,
            entry.name,
            entry.wins,
            entry.matches_played
        );
        lines.push(if idx == 0 { line.green().to_string() } else { line });
    }

    lines.join("\n")
}

pub fn pairings_table(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings".dimmed().to_string();
    }

    let name_width = name_column_width(pairings.iter().map(|p| p.first.name.as_str()));
    pairings
        .iter()
        .enumerate()
        .map(|(idx, pairing)| {
            format!(
                "{:>3}. {:>5} {:<name_width$}  {}  {:>5} {}",
                idx + 1,
                pairing.first.id,
                pairing.first.name,
                "vs".cyan(),
                pairing.second.id,
                pairing.second.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn name_column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|name| name.chars().count()).max().unwrap_or(0).max(4)
}
