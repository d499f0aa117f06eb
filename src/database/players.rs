use rusqlite::{Connection, OptionalExtension, params};

use super::models::{Player, PlayerId};
use crate::errors::{Error, Result};

const SELECT_PLAYER_RECORDS: &str =
    "SELECT id, first_name, last_name, wins, losses, created_at FROM player_records";

/// Splits a full name into first and last name.
///
/// Whitespace runs collapse to a single space. The first token becomes the
/// first name and everything after it the last name, so middle names stay with
/// the last name and single-token names get an empty last name.
pub fn split_full_name(full_name: &str) -> Result<(String, String)> {
    if full_name.chars().any(char::is_control) {
        return Err(invalid_name(full_name, "name contains control characters"));
    }

    let mut tokens = full_name.split_whitespace();
    let first_name = tokens
        .next()
        .ok_or_else(|| invalid_name(full_name, "name is empty"))?;
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    Ok((first_name.to_string(), last_name))
}

fn invalid_name(name: &str, reason: &'static str) -> Error {
    Error::InvalidName {
        name: name.to_string(),
        reason,
    }
}

pub fn insert_player(conn: &Connection, full_name: &str) -> Result<Player> {
    let (first_name, last_name) = split_full_name(full_name)?;
    let sql = "INSERT INTO players (first_name, last_name) VALUES (?1, ?2) RETURNING id, first_name, last_name, 0, 0, created_at";

    let player = conn.query_row(sql, params![first_name, last_name], parse_player_row)?;
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        wins: row.get(3)?,
        losses: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("{SELECT_PLAYER_RECORDS} WHERE id = ?1");

    let player = conn
        .query_row(&sql, params![id], parse_player_row)
        .optional()?;
    Ok(player)
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!("{SELECT_PLAYER_RECORDS} ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
    Ok(count)
}

/// Removes every player along with the matches that reference them.
pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])?;
    let deleted = conn.execute("DELETE FROM players", [])?;
    Ok(deleted)
}
