//! 应用层

pub mod product;

use std::time::Duration;

use axum::{
    extract::State,
    http::Uri,
    middleware,
    response::{Json, Redirect},
    routing::get,
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use product::handler::{AppState, LIST_PATH};

/// 组装完整的路由、中间件和共享状态
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(LIST_PATH) }))
        .route("/health", get(health_check))
        .merge(product::router())
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "products": state.product_service.find_all().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路径 {} 不存在", uri.path()))
}
