//! Customer API 模块
//!
//! 含 REST 读取路由与 `/api/method/...` RPC 端点 (对外注册表单使用，
//! 访客可达，响应始终为 HTTP 200 并包裹在 `message` 键中)。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/customers", routes())
        .merge(method_routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}

/// RPC 风格端点，路径沿用前端已固化的方法名
fn method_routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/method/club_management.api.create_customer",
            post(handler::create_customer),
        )
        .route(
            "/api/method/club_management.api.test_connection",
            get(handler::test_connection).post(handler::test_connection),
        )
}
