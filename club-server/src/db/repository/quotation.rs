//! Quotation Repository

use super::{RepoError, RepoResult};
use shared::models::{Quotation, QuotationCreate, QuotationItem, QuotationWithItems};
use sqlx::SqlitePool;

const QUOTATION_SELECT: &str = "SELECT id, name, customer_id, customer_name, transaction_date, valid_till, grand_total, status, created_at, updated_at FROM quotation";

const ITEM_SELECT: &str = "SELECT id, quotation_id, item_code, item_name, description, qty, rate, amount, idx FROM quotation_item";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Quotation>> {
    let sql = format!("{QUOTATION_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Quotation>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Quotation>> {
    let sql = format!("{QUOTATION_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Quotation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_items(pool: &SqlitePool, quotation_id: i64) -> RepoResult<Vec<QuotationItem>> {
    let sql = format!("{ITEM_SELECT} WHERE quotation_id = ? ORDER BY idx ASC");
    let rows = sqlx::query_as::<_, QuotationItem>(&sql)
        .bind(quotation_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_with_items(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<QuotationWithItems>> {
    let Some(quotation) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let items = find_items(pool, id).await?;
    Ok(Some(QuotationWithItems { quotation, items }))
}

pub async fn create(pool: &SqlitePool, data: QuotationCreate) -> RepoResult<QuotationWithItems> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let name = format!("QTN-{id}");
    let grand_total: f64 = data.items.iter().map(|i| i.qty * i.rate).sum();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO quotation (id, name, customer_id, customer_name, transaction_date, valid_till, grand_total, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'Draft', ?8, ?8)",
    )
    .bind(id)
    .bind(&name)
    .bind(data.customer_id)
    .bind(&data.customer_name)
    .bind(&data.transaction_date)
    .bind(&data.valid_till)
    .bind(grand_total)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for (idx, item) in data.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO quotation_item (id, quotation_id, item_code, item_name, description, qty, rate, amount, idx) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(shared::util::snowflake_id())
        .bind(id)
        .bind(&item.item_code)
        .bind(&item.item_name)
        .bind(&item.description)
        .bind(item.qty)
        .bind(item.rate)
        .bind(item.qty * item.rate)
        .bind(idx as i64 + 1)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_with_items(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create quotation".into()))
}
