//! Customer Repository

use super::{RepoError, RepoResult};
use shared::models::Customer;
use sqlx::SqlitePool;

const CUSTOMER_SELECT: &str = "SELECT id, name, customer_name, email, phone, customer_group, customer_type, is_active, created_at, updated_at FROM customer";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE is_active = 1 ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Lookup by email — the duplicate check runs before every insert.
/// Uniqueness is enforced only here, not by a DB constraint.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE email = ? AND is_active = 1");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub struct NewCustomer {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub customer_group: String,
    pub customer_type: String,
}

pub async fn create(pool: &SqlitePool, data: NewCustomer) -> RepoResult<Customer> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let name = format!("CUST-{id}");
    sqlx::query(
        "INSERT INTO customer (id, name, customer_name, email, phone, customer_group, customer_type, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?8)",
    )
    .bind(id)
    .bind(&name)
    .bind(&data.customer_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.customer_group)
    .bind(&data.customer_type)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}
