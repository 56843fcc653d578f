//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`customers`] - 客户接口 (含 `/api/method/...` RPC 端点)
//! - [`bookings`] - 服务预订接口 (购物车 → 报价单草稿)
//! - [`guests`] - 宾客入住登记接口
//! - [`rooms`] - 房间接口
//! - [`quotations`] - 报价单接口
//! - [`agreements`] - 会籍协议接口
//! - [`service_items`] - 服务项目接口
//!
//! 所有路由均为访客可达 (无认证)，符合本应用的对外契约。

use axum::Router;
use http::{HeaderName, HeaderValue, Method, header};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod agreements;
pub mod bookings;
pub mod customers;
pub mod guests;
pub mod health;
pub mod quotations;
pub mod rooms;
pub mod service_items;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// 开发前端来源白名单
const ALLOWED_ORIGINS: [&str; 6] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:5174",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:5174",
];

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .map(|o| HeaderValue::from_static(o))
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(customers::router())
        .merge(bookings::router())
        .merge(guests::router())
        .merge(rooms::router())
        .merge(quotations::router())
        .merge(agreements::router())
        .merge(service_items::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the integration tests
pub fn build_app() -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - fixed allow-list of local dev origins
        .layer(cors_layer())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
