//! Room Repository

use super::{RepoError, RepoResult};
use shared::models::{Room, RoomCreate, RoomSync};
use sqlx::SqlitePool;

const ROOM_SELECT: &str = "SELECT id, room_number, room_type, status, current_guest, rfid_key, created_at, updated_at FROM room";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Room>> {
    let sql = format!("{ROOM_SELECT} ORDER BY room_number ASC");
    let rows = sqlx::query_as::<_, Room>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Room>> {
    let sql = format!("{ROOM_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Room>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_number(pool: &SqlitePool, room_number: &str) -> RepoResult<Option<Room>> {
    let sql = format!("{ROOM_SELECT} WHERE room_number = ?");
    let row = sqlx::query_as::<_, Room>(&sql)
        .bind(room_number)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: RoomCreate) -> RepoResult<Room> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    if find_by_number(pool, &data.room_number).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Room {} already exists",
            data.room_number
        )));
    }

    sqlx::query(
        "INSERT INTO room (id, room_number, room_type, status, created_at, updated_at) VALUES (?1, ?2, ?3, 'Vacant', ?4, ?4)",
    )
    .bind(id)
    .bind(&data.room_number)
    .bind(&data.room_type)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create room".into()))
}

/// Apply the occupancy update pushed by the guest room-sync side effect.
///
/// Fails with `NotFound` when the room number does not exist; the caller
/// surfaces this as a blocking error (no rollback of the guest record).
pub async fn sync_occupancy(
    pool: &SqlitePool,
    room_number: &str,
    sync: &RoomSync,
) -> RepoResult<Room> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE room SET status = ?1, current_guest = ?2, rfid_key = ?3, updated_at = ?4 WHERE room_number = ?5",
    )
    .bind(&sync.status)
    .bind(sync.current_guest)
    .bind(&sync.rfid_key)
    .bind(now)
    .bind(room_number)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Room {room_number} not found")));
    }
    find_by_number(pool, room_number)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Room {room_number} not found")))
}
