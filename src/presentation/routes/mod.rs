// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{analyze_handler, report_handler};
use crate::presentation::middleware::rate_limit_middleware::{
    rate_limit_middleware, ApiRateLimiter,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 创建应用路由
///
/// 公开路由（健康检查、版本）不限速；
/// 分析类路由挂载速率限制中间件。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(rate_limiter: Arc<ApiRateLimiter>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route("/v1/analyze", post(analyze_handler::analyze))
        .route("/v1/analyze/batch", post(analyze_handler::analyze_batch))
        .route("/v1/lead-score", post(analyze_handler::lead_score))
        .route("/v1/report", post(report_handler::report))
        .layer(axum::middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
