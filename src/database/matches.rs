use rusqlite::{Connection, params};

use super::models::{Match, PlayerId};
use crate::errors::Result;

pub fn insert_match(conn: &Connection, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2) RETURNING id, winner_id, loser_id, created_at";

    let inserted = conn.query_row(sql, params![winner_id, loser_id], parse_match_row)?;
    Ok(inserted)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_involving(conn: &Connection, player_id: PlayerId) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner_id, loser_id, created_at FROM matches WHERE winner_id = ?1 OR loser_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count = conn.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
    Ok(count)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    let deleted = conn.execute("DELETE FROM matches", [])?;
    Ok(deleted)
}
