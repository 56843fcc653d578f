//! Membership Agreement API Handlers
//!
//! 协议由客户端显式保存 (报价单草稿或手工构造的草稿)。保存前执行
//! 单一有效协议规则：同一客户已有未取消的协议时拒绝保存。

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::core::ServerState;
use crate::db::repository::membership_agreement;
use crate::utils::{AppError, AppResult};
use shared::models::{
    MembershipAgreement, MembershipAgreementDraft, MembershipAgreementWithItems,
};

/// GET /api/agreements - 获取所有会籍协议
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MembershipAgreement>>> {
    let agreements = membership_agreement::find_all(&state.pool).await?;
    Ok(Json(agreements))
}

/// GET /api/agreements/:id - 获取协议 (含行项目)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MembershipAgreementWithItems>> {
    let agreement = membership_agreement::find_with_items(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Membership agreement {}", id)))?;
    Ok(Json(agreement))
}

/// POST /api/agreements - 保存协议草稿
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<MembershipAgreementDraft>,
) -> AppResult<Json<MembershipAgreementWithItems>> {
    if draft.customer_name.trim().is_empty() {
        return Err(AppError::validation("Customer name is required"));
    }

    // One active agreement per customer
    if let Some(existing) = membership_agreement::find_active_for_customer(
        &state.pool,
        draft.customer_id,
        &draft.customer_name,
    )
    .await?
    {
        return Err(AppError::business_rule(format!(
            "Customer {} already has an active membership agreement: {}",
            draft.customer_name, existing.name
        )));
    }

    let created = membership_agreement::create(&state.pool, draft).await?;
    info!(target: "api", "Membership agreement created: {}", created.agreement.name);
    Ok(Json(created))
}
