//! Service Booking API 模块
//!
//! 对外预订入口：从服务项目购物车生成一张报价单 (草稿)，数量按
//! 起止日期的天数计算。与 `create_customer` 一样走 `/api/method/...`
//! 方法路径，访客可达。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/method/club_management.api.create_service_booking",
        post(handler::create_service_booking),
    )
}
