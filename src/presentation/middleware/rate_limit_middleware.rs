// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::warn;

/// API速率限制器
///
/// 按客户端IP限制每分钟请求数，状态保存在进程内存中
pub struct ApiRateLimiter {
    limiter: RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>,
    enabled: bool,
}

impl ApiRateLimiter {
    /// 创建新的速率限制器实例
    ///
    /// # 参数
    ///
    /// * `enabled` - 是否启用限制
    /// * `requests_per_minute` - 每分钟请求数上限
    pub fn new(enabled: bool, requests_per_minute: u32) -> Self {
        let quota = Quota::per_minute(
            NonZeroU32::new(requests_per_minute.max(1)).unwrap_or(NonZeroU32::MIN),
        );
        Self {
            limiter: RateLimiter::keyed(quota),
            enabled,
        }
    }

    /// 检查指定客户端是否超出限制
    pub fn check(&self, client: IpAddr) -> bool {
        !self.enabled || self.limiter.check_key(&client).is_ok()
    }
}

/// 速率限制中间件
///
/// 未知来源（无连接信息，如测试环境）按回环地址计
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<ApiRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

    if limiter.check(client) {
        next.run(request).await
    } else {
        warn!("Rate limit exceeded for {}", client);
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "success": false,
                "error": "Too many requests"
            })),
        )
            .into_response()
    }
}
