//! Service Item Repository

use super::{RepoError, RepoResult};
use shared::models::{ServiceItem, ServiceItemCreate};
use sqlx::SqlitePool;

const ITEM_SELECT: &str = "SELECT id, item_code, item_name, item_group, description, rate, is_active, created_at, updated_at FROM service_item";

pub async fn find_by_group(pool: &SqlitePool, item_group: &str) -> RepoResult<Vec<ServiceItem>> {
    let sql = format!("{ITEM_SELECT} WHERE item_group = ? AND is_active = 1 ORDER BY item_name ASC");
    let rows = sqlx::query_as::<_, ServiceItem>(&sql)
        .bind(item_group)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ServiceItem>> {
    let sql = format!("{ITEM_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, ServiceItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_code(pool: &SqlitePool, item_code: &str) -> RepoResult<Option<ServiceItem>> {
    let sql = format!("{ITEM_SELECT} WHERE item_code = ?");
    let row = sqlx::query_as::<_, ServiceItem>(&sql)
        .bind(item_code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ServiceItemCreate) -> RepoResult<ServiceItem> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    if find_by_code(pool, &data.item_code).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Service item {} already exists",
            data.item_code
        )));
    }

    sqlx::query(
        "INSERT INTO service_item (id, item_code, item_name, item_group, description, rate, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.item_code)
    .bind(&data.item_name)
    .bind(data.item_group.as_deref().unwrap_or("Services"))
    .bind(&data.description)
    .bind(data.rate.unwrap_or(0.0))
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create service item".into()))
}
