//! Guest Onboarding API 模块
//!
//! 入住登记的动作路由 (check-in / check-out / 分房) 调用 `forms` 模块的
//! 纯处理函数，再由这里持久化记录并执行副作用命令。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/guests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/check-in", post(handler::check_in))
        .route("/{id}/check-out", post(handler::check_out))
        .route("/{id}/room", post(handler::assign_room))
}
