//! Guest Onboarding Model

use serde::{Deserialize, Serialize};

/// Guest stay status values, derived from the check-in/check-out handlers
pub const GUEST_STATUS_PENDING: &str = "Pending";
pub const GUEST_STATUS_CHECKED_IN: &str = "Checked In";
pub const GUEST_STATUS_CHECKED_OUT: &str = "Checked Out";

/// Guest onboarding record (入住登记)
///
/// `check_in_time` / `check_out_time` are `HH:MM:SS` strings; `status`
/// reflects whichever of the two handlers ran last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GuestOnboarding {
    pub id: i64,
    /// Guest display name
    pub guest: String,
    /// Linked customer record, if any
    pub customer_id: Option<i64>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub no_of_guests: i64,
    pub nationality: Option<String>,
    pub id_proof_type: Option<String>,
    pub id_proof_number: Option<String>,
    pub passport_number: Option<String>,
    pub visa_number: Option<String>,
    pub room_number: Option<String>,
    pub rfid_card_code: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    /// "Pending" | "Checked In" | "Checked Out"
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create guest onboarding payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestOnboardingCreate {
    pub guest: String,
    pub customer_id: Option<i64>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub no_of_guests: Option<i64>,
    pub nationality: Option<String>,
    pub id_proof_type: Option<String>,
    pub id_proof_number: Option<String>,
    pub passport_number: Option<String>,
    pub visa_number: Option<String>,
    pub rfid_card_code: Option<String>,
}
