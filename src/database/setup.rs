use log::{debug, info};
use rusqlite::Connection;

use crate::errors::Result;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const TEARDOWN_SQL: &str = include_str!("teardown.sql");

/// Creates any missing tables, indexes and views. Safe to run against an
/// already provisioned database.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    execute_script(conn, SCHEMA_SQL)?;
    info!("Database schema initialized");
    Ok(())
}

/// Drops every tournament table and recreates the schema from scratch.
pub fn reset_database(conn: &Connection) -> Result<()> {
    execute_script(conn, TEARDOWN_SQL)?;
    execute_script(conn, SCHEMA_SQL)?;
    info!("Database schema reset successfully");
    Ok(())
}

fn execute_script(conn: &Connection, sql: &str) -> Result<()> {
    let statements = split_sql_statements(sql);

    for (idx, statement) in statements.iter().enumerate() {
        debug!("Executing schema statement {}", idx + 1);
        conn.execute(statement, [])?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
