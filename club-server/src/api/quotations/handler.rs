//! Quotation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::core::ServerState;
use crate::db::repository::quotation;
use crate::forms::quotation::agreement_draft_from;
use crate::utils::{AppError, AppResult, validation};
use shared::models::{
    MembershipAgreementDraft, Quotation, QuotationCreate, QuotationWithItems,
};

/// GET /api/quotations - 获取所有报价单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Quotation>>> {
    let quotations = quotation::find_all(&state.pool).await?;
    Ok(Json(quotations))
}

/// GET /api/quotations/:id - 获取报价单 (含行项目)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<QuotationWithItems>> {
    let quotation = quotation::find_with_items(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Quotation {}", id)))?;
    Ok(Json(quotation))
}

/// POST /api/quotations - 创建报价单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<QuotationCreate>,
) -> AppResult<Json<QuotationWithItems>> {
    validation::validate_required_text(
        &payload.customer_name,
        "Customer name",
        validation::MAX_NAME_LEN,
    )?;
    let created = quotation::create(&state.pool, payload).await?;
    info!(target: "api", "Quotation created: {}", created.quotation.name);
    Ok(Json(created))
}

/// POST /api/quotations/:id/agreement-draft - 生成会籍协议草稿
///
/// 纯复制操作：返回未保存的草稿，客户端通过 `POST /api/agreements`
/// 显式保存。
pub async fn agreement_draft(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MembershipAgreementDraft>> {
    let source = quotation::find_with_items(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Quotation {}", id)))?;
    let draft = agreement_draft_from(&source.quotation, &source.items);
    Ok(Json(draft))
}
