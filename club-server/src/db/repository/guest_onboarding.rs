//! Guest Onboarding Repository

use super::{RepoError, RepoResult};
use shared::models::{GuestOnboarding, GuestOnboardingCreate};
use sqlx::SqlitePool;

const GUEST_SELECT: &str = "SELECT id, guest, customer_id, from_date, to_date, no_of_guests, nationality, id_proof_type, id_proof_number, passport_number, visa_number, room_number, rfid_card_code, check_in_time, check_out_time, status, created_at, updated_at FROM guest_onboarding";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<GuestOnboarding>> {
    let sql = format!("{GUEST_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, GuestOnboarding>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<GuestOnboarding>> {
    let sql = format!("{GUEST_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, GuestOnboarding>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: GuestOnboardingCreate) -> RepoResult<GuestOnboarding> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO guest_onboarding (id, guest, customer_id, from_date, to_date, no_of_guests, nationality, id_proof_type, id_proof_number, passport_number, visa_number, rfid_card_code, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, 'Pending', ?13, ?13)",
    )
    .bind(id)
    .bind(&data.guest)
    .bind(data.customer_id)
    .bind(&data.from_date)
    .bind(&data.to_date)
    .bind(data.no_of_guests.unwrap_or(1))
    .bind(&data.nationality)
    .bind(&data.id_proof_type)
    .bind(&data.id_proof_number)
    .bind(&data.passport_number)
    .bind(&data.visa_number)
    .bind(&data.rfid_card_code)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create guest onboarding".into()))
}

/// Persist the fields the form-state handlers touch (timestamps, status,
/// room assignment). Everything else is immutable after creation.
pub async fn save_form_state(
    pool: &SqlitePool,
    record: &GuestOnboarding,
) -> RepoResult<GuestOnboarding> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE guest_onboarding SET check_in_time = ?1, check_out_time = ?2, status = ?3, room_number = ?4, updated_at = ?5 WHERE id = ?6",
    )
    .bind(&record.check_in_time)
    .bind(&record.check_out_time)
    .bind(&record.status)
    .bind(&record.room_number)
    .bind(now)
    .bind(record.id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Guest onboarding {} not found",
            record.id
        )));
    }
    find_by_id(pool, record.id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Guest onboarding {} not found", record.id)))
}
