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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
///
/// 抓取失败对单个URL是终态，不做重试。
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 非2xx响应
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    /// 被URL安全校验拦截
    #[error("Blocked by URL validation: {0}")]
    Blocked(String),
}

/// 抓取到的页面
pub struct FetchedPage {
    /// 重定向后的最终URL
    pub final_url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 页面内容
    pub content: String,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取特质
///
/// 实现方必须补全缺失的协议前缀、跟随重定向，
/// 并在非2xx/超时/网络错误时返回失败。
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取单个页面
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
