//! SQLite schema definitions.

use rusqlite::Connection;

use crate::error::{RepositoryError, RepositoryResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> RepositoryResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> RepositoryResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error("Failed to create schema_version table", e))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> RepositoryResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| schema_error("Failed to clear schema_version", e))?;

    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| schema_error("Failed to set schema_version", e))?;

    Ok(())
}

fn create_schema_v1(conn: &Connection) -> RepositoryResult<()> {
    // Attributes are the advisor's JSON object minus the id
    conn.execute(
        "CREATE TABLE IF NOT EXISTS advisors (
            id INTEGER PRIMARY KEY,
            attributes TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error("Failed to create advisors table", e))?;

    Ok(())
}

fn schema_error(context: &str, e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Internal {
        backend_name: "sqlite".to_string(),
        message: format!("{}: {}", context, e),
        source: Some(Box::new(e)),
    }
}
