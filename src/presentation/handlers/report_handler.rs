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
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::application::dto::analyze_request::ReportRequestDto;
use crate::application::use_cases::analyze_use_case::AnalyzeUseCase;
use crate::infrastructure::reports::{self, ReportFormat};
use crate::infrastructure::storage::{LocalReportStorage, ReportStorage};
use crate::presentation::errors::AppError;

/// 报告生成端点
///
/// 分析URL并渲染为请求的格式，可选地保存到本地存储。
pub async fn report(
    Extension(use_case): Extension<Arc<AnalyzeUseCase>>,
    Extension(storage): Extension<Arc<LocalReportStorage>>,
    Json(payload): Json<ReportRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let format = match payload.format.as_deref() {
        None => ReportFormat::Markdown,
        Some(name) => match ReportFormat::parse(name) {
            Some(format) => format,
            None => {
                return Ok((
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "success": false,
                        "error": format!("Unsupported report format: {}", name)
                    })),
                )
                    .into_response());
            }
        },
    };

    let analysis = use_case.analyze(&payload.url).await?;
    let rendered = reports::render(&analysis, format)?;

    let stored_as = if payload.store.unwrap_or(false) {
        let host = analysis
            .url
            .replace("https://", "")
            .replace("http://", "")
            .replace(['/', ':'], "_");
        let key = format!("{}_{}.{}", host, analysis.id, format.extension());
        storage.save(&key, rendered.as_bytes()).await?;
        info!("Report stored as {}", key);
        Some(key)
    } else {
        None
    };

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "format": format,
            "report": rendered,
            "stored_as": stored_as
        })),
    )
        .into_response())
}
