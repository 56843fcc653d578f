//! Guest onboarding form handlers
//!
//! Explicit versions of the guest record's field-change hooks. Each handler
//! takes the current record, returns the updated record and any side-effect
//! commands. The two timestamp handlers are independent: a record can end
//! up with both timestamps set, and `status` reflects whichever handler ran
//! last. Clearing a timestamp is not a supported transition.

use chrono::NaiveTime;
use serde::Serialize;

use crate::utils::AppError;
use shared::models::{
    GUEST_STATUS_CHECKED_IN, GUEST_STATUS_CHECKED_OUT, GuestOnboarding, RoomSync,
    ROOM_STATUS_OCCUPIED,
};

/// Checkout past this time of day is charged one extra night
const LATE_CHECKOUT: &str = "11:00:00";

/// Side-effect command emitted by a form handler
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Push an occupancy update to the referenced room
    SyncRoom { room_number: String, sync: RoomSync },
}

/// Non-blocking notice surfaced to the user alongside a successful save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormNotice {
    pub message: String,
}

/// check_in_time set → status becomes "Checked In".
///
/// No validation that check-out comes after check-in (observed contract).
pub fn check_in(mut record: GuestOnboarding, time: String) -> (GuestOnboarding, Vec<SideEffect>) {
    record.check_in_time = Some(time);
    record.status = GUEST_STATUS_CHECKED_IN.to_string();
    (record, Vec::new())
}

/// check_out_time set → status becomes "Checked Out".
///
/// Allowed without a prior check-in; the handlers are independent.
pub fn check_out(mut record: GuestOnboarding, time: String) -> (GuestOnboarding, Vec<SideEffect>) {
    record.check_out_time = Some(time);
    record.status = GUEST_STATUS_CHECKED_OUT.to_string();
    (record, Vec::new())
}

/// room_number set → emit a three-field occupancy update for that room.
///
/// The room is marked occupied, linked to this guest, and programmed with
/// the guest's access card code. The executor surfaces failures as a
/// blocking error; the guest record itself is not rolled back.
pub fn assign_room(
    mut record: GuestOnboarding,
    room_number: String,
) -> (GuestOnboarding, Vec<SideEffect>) {
    record.room_number = Some(room_number.clone());
    let sync = RoomSync {
        status: ROOM_STATUS_OCCUPIED.to_string(),
        current_guest: record.id,
        rfid_key: record.rfid_card_code.clone(),
    };
    (record, vec![SideEffect::SyncRoom { room_number, sync }])
}

/// Pre-save validation.
///
/// Returns non-blocking notices (late checkout surcharge) or a blocking
/// validation error (missing passport/visa for non-Indian passport holders).
pub fn validate(record: &GuestOnboarding) -> Result<Vec<FormNotice>, AppError> {
    let mut notices = Vec::new();

    // Checkout after 11 AM → one extra day will be charged
    if let (Some(check_in), Some(check_out)) = (&record.check_in_time, &record.check_out_time)
        && let (Ok(_), Ok(out)) = (
            NaiveTime::parse_from_str(check_in, "%H:%M:%S"),
            NaiveTime::parse_from_str(check_out, "%H:%M:%S"),
        )
        && let Ok(late) = NaiveTime::parse_from_str(LATE_CHECKOUT, "%H:%M:%S")
        && out > late
    {
        notices.push(FormNotice {
            message: "Checkout after 11 AM — 1 extra day will be charged.".to_string(),
        });
    }

    // Passport and visa are mandatory for non-Indian guests using a
    // passport as ID proof
    if let Some(nationality) = &record.nationality {
        let n = nationality.to_lowercase();
        if n != "india"
            && n != "indian"
            && record.id_proof_type.as_deref() == Some("Passport")
            && (record.passport_number.is_none() || record.visa_number.is_none())
        {
            return Err(AppError::validation(
                "For Non-Indian Guests, Passport and Visa details are mandatory when ID Proof Type is Passport.",
            ));
        }
    }

    Ok(notices)
}
