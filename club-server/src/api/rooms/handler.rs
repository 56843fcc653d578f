//! Room API Handlers
//!
//! 房间只在创建和读取时直接操作；占用状态由宾客分房的副作用更新，
//! 没有独立的占用修改端点 (无逆向同步)。

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::core::ServerState;
use crate::db::repository::room;
use crate::utils::{AppError, AppResult, validation};
use shared::models::{Room, RoomCreate};

/// GET /api/rooms - 获取所有房间
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = room::find_all(&state.pool).await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/:id - 获取单个房间
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    let room = room::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {}", id)))?;
    Ok(Json(room))
}

/// POST /api/rooms - 创建房间 (初始状态为 Vacant)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    validation::validate_required_text(
        &payload.room_number,
        "Room number",
        validation::MAX_SHORT_TEXT_LEN,
    )?;
    let room = room::create(&state.pool, payload).await?;
    info!(target: "api", "Room created: {}", room.room_number);
    Ok(Json(room))
}
