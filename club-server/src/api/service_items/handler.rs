//! Service Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::info;

use crate::core::ServerState;
use crate::db::repository::service_item;
use crate::utils::{AppError, AppResult, validation};
use shared::models::{ServiceItem, ServiceItemCreate};

#[derive(Debug, Deserialize)]
pub struct GroupQuery {
    pub group: Option<String>,
}

/// GET /api/service-items?group=xxx - 按分组获取服务项目
///
/// 分组缺省为 "Services"，与原目录查询保持一致。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<GroupQuery>,
) -> AppResult<Json<Vec<ServiceItem>>> {
    let group = query.group.as_deref().unwrap_or("Services");
    let items = service_item::find_by_group(&state.pool, group).await?;
    Ok(Json(items))
}

/// GET /api/service-items/:id - 获取单个服务项目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ServiceItem>> {
    let item = service_item::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service item {}", id)))?;
    Ok(Json(item))
}

/// POST /api/service-items - 创建服务项目
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceItemCreate>,
) -> AppResult<Json<ServiceItem>> {
    validation::validate_required_text(
        &payload.item_code,
        "Item code",
        validation::MAX_SHORT_TEXT_LEN,
    )?;
    validation::validate_required_text(&payload.item_name, "Item name", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(
        &payload.description,
        "Description",
        validation::MAX_NOTE_LEN,
    )?;
    let item = service_item::create(&state.pool, payload).await?;
    info!(target: "api", "Service item created: {}", item.item_code);
    Ok(Json(item))
}
