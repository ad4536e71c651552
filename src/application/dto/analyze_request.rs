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

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 单URL分析请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct AnalyzeRequestDto {
    /// 要分析的网站URL
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// 批量分析请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct BatchAnalyzeRequestDto {
    /// 要分析的URL列表
    #[validate(length(min = 1, message = "URLs array is required"))]
    pub urls: Vec<String>,
}

/// 报告生成请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ReportRequestDto {
    /// 要分析的网站URL
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    /// 输出格式（json/markdown），默认markdown
    pub format: Option<String>,
    /// 是否保存报告到本地存储
    pub store: Option<bool>,
}
