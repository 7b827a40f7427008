use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::models::*;

/// Opens the pool described by `config` and makes sure the schema exists.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Private in-memory database, used by tests.
///
/// Every connection to `sqlite::memory:` is its own database, so the pool is
/// pinned to one connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

// AUTOINCREMENT keeps ids from being handed out again after a delete
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
               id            INTEGER PRIMARY KEY AUTOINCREMENT,
               full_name     TEXT    NOT NULL CHECK (length(trim(full_name)) BETWEEN 1 AND 100),
               current_team  TEXT    CHECK (current_team IS NULL OR length(current_team) <= 50),
               position      TEXT    CHECK (position IS NULL OR length(position) <= 50),
               jersey_number INTEGER
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Player queries
pub async fn insert_player(conn: &mut SqliteConnection, player: &PlayerCreate) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players (full_name, current_team, position, jersey_number)
           VALUES (?, ?, ?, ?)
           RETURNING id, full_name, current_team, position, jersey_number"#
    )
    .bind(&player.full_name)
    .bind(&player.current_team)
    .bind(&player.position)
    .bind(player.jersey_number)
    .fetch_one(conn)
    .await
}

pub async fn list_players(conn: &mut SqliteConnection, skip: u32, limit: u32) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, full_name, current_team, position, jersey_number
           FROM players
           ORDER BY id
           LIMIT ? OFFSET ?"#
    )
    .bind(i64::from(limit))
    .bind(i64::from(skip))
    .fetch_all(conn)
    .await
}

pub async fn get_player_by_id(conn: &mut SqliteConnection, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, full_name, current_team, position, jersey_number
           FROM players
           WHERE id = ?"#
    )
    .bind(player_id)
    .fetch_optional(conn)
    .await
}

/// Overwrites every column of the row; `None` when no row has `player_id`.
pub async fn update_player(
    conn: &mut SqliteConnection,
    player_id: i64,
    player: &PlayerCreate,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players
           SET full_name = ?, current_team = ?, position = ?, jersey_number = ?
           WHERE id = ?
           RETURNING id, full_name, current_team, position, jersey_number"#
    )
    .bind(&player.full_name)
    .bind(&player.current_team)
    .bind(&player.position)
    .bind(player.jersey_number)
    .bind(player_id)
    .fetch_optional(conn)
    .await
}

/// Removes the row and returns it as it was before the delete.
pub async fn delete_player(conn: &mut SqliteConnection, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"DELETE FROM players
           WHERE id = ?
           RETURNING id, full_name, current_team, position, jersey_number"#
    )
    .bind(player_id)
    .fetch_optional(conn)
    .await
}
