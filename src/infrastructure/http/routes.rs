//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping        GET     健康检查
//! - /api/cards       GET     获取卡片列表
//! - /api/cards       POST    创建卡片（multipart: text + 可选 audio）
//! - /api/cards/{id}  PUT     更新卡片（multipart: text + 可选 audio）
//! - /api/cards/{id}  DELETE  删除卡片
//! - /uploads/*       GET     音频 Blob 静态文件（绕过 JSON API）

use axum::{
    routing::{get, put},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::domain::card::UPLOADS_MOUNT;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(uploads_dir: impl AsRef<Path>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .nest_service(UPLOADS_MOUNT, ServeDir::new(uploads_dir))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/cards",
            get(handlers::list_cards).post(handlers::create_card),
        )
        .route(
            "/cards/:card_id",
            put(handlers::update_card).delete(handlers::delete_card),
        )
}
