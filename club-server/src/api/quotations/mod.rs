//! Quotation API 模块
//!
//! `/{id}/agreement-draft` 对应原界面上的 "创建会籍协议" 按钮：
//! 从报价单复制表头与行项目，返回未保存的草稿。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/quotations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/agreement-draft", post(handler::agreement_draft))
}
