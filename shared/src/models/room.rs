//! Room Model

use serde::{Deserialize, Serialize};

/// Room occupancy status values
pub const ROOM_STATUS_VACANT: &str = "Vacant";
pub const ROOM_STATUS_OCCUPIED: &str = "Occupied";

/// Room entity (房间)
///
/// Occupancy fields are only mutated as a side effect of a guest
/// onboarding record's room assignment. There is no inverse sync:
/// clearing a guest's room does not vacate the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: Option<String>,
    /// "Vacant" | "Occupied"
    pub status: String,
    /// Guest onboarding record currently holding the room
    pub current_guest: Option<i64>,
    /// Access card code programmed for the current stay
    pub rfid_key: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub room_number: String,
    pub room_type: Option<String>,
}

/// Occupancy update pushed by the guest room-sync side effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSync {
    pub status: String,
    pub current_guest: i64,
    pub rfid_key: Option<String>,
}
