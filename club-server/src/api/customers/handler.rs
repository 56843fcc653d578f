//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::{info, warn};
use validator::ValidateEmail;

use crate::core::ServerState;
use crate::db::repository::customer::{self, NewCustomer};
use crate::utils::{AppError, AppResult};
use shared::models::{Customer, CustomerCreate, CustomerSummary};
use shared::response::MethodResponse;

/// Method endpoint payload: success and failure share the envelope,
/// only the fields differ
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MethodResult {
    Ok {
        success: bool,
        message: String,
        customer: CustomerSummary,
    },
    Err {
        success: bool,
        error: String,
    },
}

impl MethodResult {
    fn ok(message: impl Into<String>, customer: CustomerSummary) -> Self {
        Self::Ok {
            success: true,
            message: message.into(),
            customer,
        }
    }

    fn err(error: impl Into<String>) -> Self {
        Self::Err {
            success: false,
            error: error.into(),
        }
    }
}

/// GET /api/customers - 获取所有活跃客户
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer::find_all(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/customers/:id - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = customer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {}", id)))?;
    Ok(Json(customer))
}

/// POST /api/method/club_management.api.create_customer - 访客注册入口
///
/// 始终返回 HTTP 200；校验失败、重复邮箱、持久化错误都降级为
/// `{"message": {"success": false, "error": "..."}}`。
pub async fn create_customer(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> Json<MethodResponse<MethodResult>> {
    Json(MethodResponse::new(
        try_create_customer(&state, payload).await,
    ))
}

async fn try_create_customer(state: &ServerState, payload: CustomerCreate) -> MethodResult {
    // Required-field presence, checked in a fixed order
    let Some(full_name) = non_empty(payload.full_name) else {
        return MethodResult::err("Full Name is required");
    };
    let Some(email) = non_empty(payload.email) else {
        return MethodResult::err("Email is required");
    };
    let Some(phone) = non_empty(payload.phone) else {
        return MethodResult::err("Phone is required");
    };

    // Email is normalized before syntax check and duplicate lookup
    let email = email.to_lowercase();
    if !email.validate_email() {
        warn!(target: "api", "Invalid email format: {}", email);
        return MethodResult::err("Invalid email format");
    }

    match customer::find_by_email(&state.pool, &email).await {
        Ok(Some(_)) => {
            warn!(target: "api", "Customer already exists with email: {}", email);
            return MethodResult::err("A customer with this email already exists");
        }
        Ok(None) => {}
        Err(e) => return MethodResult::err(e.to_string()),
    }

    let data = NewCustomer {
        customer_name: full_name,
        email,
        phone,
        customer_group: non_empty(payload.customer_group)
            .unwrap_or_else(|| "Individual".to_string()),
        customer_type: non_empty(payload.customer_type)
            .unwrap_or_else(|| "Individual".to_string()),
    };

    match customer::create(&state.pool, data).await {
        Ok(created) => {
            info!(target: "api", "Customer created successfully: {}", created.name);
            MethodResult::ok("Customer created successfully", CustomerSummary::from(&created))
        }
        // Persistence failures surface in the same error payload shape
        Err(e) => MethodResult::err(e.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 连通性探针响应
#[derive(Debug, Serialize)]
pub struct TestConnectionResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub server: &'static str,
}

/// GET|POST /api/method/club_management.api.test_connection - 连通性探针
pub async fn test_connection() -> Json<MethodResponse<TestConnectionResponse>> {
    info!(target: "api", "Test connection endpoint called");
    Json(MethodResponse::new(TestConnectionResponse {
        success: true,
        message: "Connection successful",
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        server: "Club Server",
    }))
}
