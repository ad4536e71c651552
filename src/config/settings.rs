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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、抓取器、批量分析、速率限制和存储等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取器配置
    pub fetcher: FetcherSettings,
    /// 批量分析配置
    pub batch: BatchSettings,
    /// 速率限制配置
    pub rate_limiting: RateLimitingSettings,
    /// 报告存储配置
    pub storage: StorageSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 单页抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 请求User-Agent
    pub user_agent: String,
    /// 是否允许访问私有网段目标（仅用于本地开发和测试）
    pub allow_private_targets: bool,
}

/// 批量分析配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    /// 单次批量请求的URL数量上限
    pub max_urls: usize,
    /// 批量分析的并发度
    pub concurrency: usize,
}

/// 速率限制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitingSettings {
    /// 是否启用速率限制
    pub enabled: bool,
    /// 默认每分钟请求数限制
    pub default_rpm: u32,
}

/// 报告存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 本地报告存储路径
    pub local_path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default Fetcher settings
            .set_default("fetcher.timeout_secs", 15)?
            .set_default(
                "fetcher.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            )?
            .set_default("fetcher.allow_private_targets", false)?
            // Default Batch settings
            .set_default("batch.max_urls", 5)?
            .set_default("batch.concurrency", 3)?
            // Default Rate Limiting settings
            .set_default("rate_limiting.enabled", true)?
            .set_default("rate_limiting.default_rpm", 60)?
            // Default Storage settings
            .set_default("storage.local_path", "./reports")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PROSPECTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::new().unwrap();

        assert_eq!(settings.batch.max_urls, 5);
        assert_eq!(settings.fetcher.timeout_secs, 15);
        assert!(!settings.fetcher.allow_private_targets);
    }
}
