//! REST APIハンドラー
//!
//! ルーター構築とルート定義

use crate::{ui, web, AppState};
use axum::{
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// APIエラーレスポンス型
pub mod error;

/// ウェブサイト管理API
pub mod websites;

/// GET /health - 死活監視
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// アプリケーション全体のルーターを構築
///
/// REST API、UIフラグメント、静的アセットをひとつのaxum Routerにまとめる。
/// CORSは全許可。
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // REST API
        .route("/health", get(health))
        .route(
            "/websites",
            get(websites::list_websites).post(websites::create_website),
        )
        .route("/websites/check-status", get(websites::check_status_by_url))
        .route(
            "/websites/:id",
            patch(websites::update_website).delete(websites::delete_website),
        )
        .route("/websites/:id/check-status", get(websites::check_status_by_id))
        // UIフラグメント
        .route("/ui/status-check", get(ui::routes::status_check))
        .route(
            "/ui/saved-websites",
            get(ui::routes::saved_websites).post(ui::routes::save_website),
        )
        // 静的シェル
        .route("/", get(web::index))
        .route("/static/*path", get(web::static_asset))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
