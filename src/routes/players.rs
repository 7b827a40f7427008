use axum::{extract::State, response::Json};

use crate::db;
use crate::error::{ApiError, Result};
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::models::{ListPlayersQuery, Player, PlayerCreate};
use crate::routes::AppState;

// POST /players/ - Create a player
pub async fn create_player(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<PlayerCreate>,
) -> Result<Json<Player>> {
    let mut conn = state.session().await?;
    let player = db::insert_player(&mut conn, &payload).await?;

    tracing::info!(player_id = player.id, "player created");
    Ok(Json(player))
}

// GET /players/?skip=0&limit=100 - List players by ascending id
pub async fn list_players(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListPlayersQuery>,
) -> Result<Json<Vec<Player>>> {
    let mut conn = state.session().await?;
    let players = db::list_players(&mut conn, params.skip, params.limit).await?;

    tracing::debug!(skip = params.skip, limit = params.limit, count = players.len(), "players listed");
    Ok(Json(players))
}

// GET /players/{id} - Get player by ID
pub async fn get_player(
    State(state): State<AppState>,
    ValidPath(player_id): ValidPath<i64>,
) -> Result<Json<Player>> {
    let mut conn = state.session().await?;
    let player = db::get_player_by_id(&mut conn, player_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(player))
}

// PUT /players/{id} - Replace every field of a player
pub async fn update_player(
    State(state): State<AppState>,
    ValidPath(player_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<PlayerCreate>,
) -> Result<Json<Player>> {
    let mut conn = state.session().await?;
    let player = db::update_player(&mut conn, player_id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(player_id, "player updated");
    Ok(Json(player))
}

// DELETE /players/{id} - Delete a player, responding with the removed row
pub async fn delete_player(
    State(state): State<AppState>,
    ValidPath(player_id): ValidPath<i64>,
) -> Result<Json<Player>> {
    let mut conn = state.session().await?;
    let player = db::delete_player(&mut conn, player_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(player_id, "player deleted");
    Ok(Json(player))
}
