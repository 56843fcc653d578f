//! Membership Agreement Repository

use super::{RepoError, RepoResult};
use shared::models::{
    MembershipAgreement, MembershipAgreementDraft, MembershipAgreementItem,
    MembershipAgreementWithItems,
};
use sqlx::SqlitePool;

const AGREEMENT_SELECT: &str = "SELECT id, name, quotation_id, customer_id, customer_name, agreement_date, valid_till, grand_total, status, created_at, updated_at FROM membership_agreement";

const ITEM_SELECT: &str = "SELECT id, agreement_id, item_code, item_name, description, qty, rate, amount, idx FROM membership_agreement_item";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MembershipAgreement>> {
    let sql = format!("{AGREEMENT_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, MembershipAgreement>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MembershipAgreement>> {
    let sql = format!("{AGREEMENT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, MembershipAgreement>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_items(
    pool: &SqlitePool,
    agreement_id: i64,
) -> RepoResult<Vec<MembershipAgreementItem>> {
    let sql = format!("{ITEM_SELECT} WHERE agreement_id = ? ORDER BY idx ASC");
    let rows = sqlx::query_as::<_, MembershipAgreementItem>(&sql)
        .bind(agreement_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_with_items(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<MembershipAgreementWithItems>> {
    let Some(agreement) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let items = find_items(pool, id).await?;
    Ok(Some(MembershipAgreementWithItems { agreement, items }))
}

/// Find a customer's agreement that is not cancelled.
/// Used by the one-active-agreement rule before saving a draft.
///
/// Keys on the customer link when present; the display-name fallback only
/// applies to drafts that carry no customer_id, so two customers sharing a
/// name cannot block each other.
pub async fn find_active_for_customer(
    pool: &SqlitePool,
    customer_id: Option<i64>,
    customer_name: &str,
) -> RepoResult<Option<MembershipAgreement>> {
    let row = if let Some(id) = customer_id {
        let sql = format!(
            "{AGREEMENT_SELECT} WHERE customer_id = ? AND status != 'Cancelled' ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, MembershipAgreement>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
    } else {
        let sql = format!(
            "{AGREEMENT_SELECT} WHERE customer_name = ? AND status != 'Cancelled' ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, MembershipAgreement>(&sql)
            .bind(customer_name)
            .fetch_optional(pool)
            .await?
    };
    Ok(row)
}

/// Persist a draft the client explicitly saved.
pub async fn create(
    pool: &SqlitePool,
    draft: MembershipAgreementDraft,
) -> RepoResult<MembershipAgreementWithItems> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let name = format!("MA-{id}");

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO membership_agreement (id, name, quotation_id, customer_id, customer_name, agreement_date, valid_till, grand_total, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 'Draft', ?9, ?9)",
    )
    .bind(id)
    .bind(&name)
    .bind(draft.quotation_id)
    .bind(draft.customer_id)
    .bind(&draft.customer_name)
    .bind(&draft.agreement_date)
    .bind(&draft.valid_till)
    .bind(draft.grand_total)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for (idx, item) in draft.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO membership_agreement_item (id, agreement_id, item_code, item_name, description, qty, rate, amount, idx) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(shared::util::snowflake_id())
        .bind(id)
        .bind(&item.item_code)
        .bind(&item.item_name)
        .bind(&item.description)
        .bind(item.qty)
        .bind(item.rate)
        .bind(item.amount)
        .bind(idx as i64 + 1)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_with_items(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create membership agreement".into()))
}
