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
use tracing::error;
use validator::Validate;

use crate::application::dto::analyze_request::{AnalyzeRequestDto, BatchAnalyzeRequestDto};
use crate::application::dto::analyze_response::{
    AnalyzeResponseDto, BatchEntryDto, BatchResponseDto, BatchSummaryDto, LeadScoreSummaryDto,
};
use crate::application::use_cases::analyze_use_case::{AnalyzeError, AnalyzeUseCase};
use crate::engines::traits::FetchError;

fn error_status(error: &AnalyzeError) -> StatusCode {
    match error {
        AnalyzeError::Validation(_) => StatusCode::BAD_REQUEST,
        AnalyzeError::BatchLimitExceeded(_) => StatusCode::BAD_REQUEST,
        AnalyzeError::Fetch(FetchError::Blocked(_)) => StatusCode::BAD_REQUEST,
        AnalyzeError::Fetch(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_body(message: String) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": false,
        "error": message
    }))
}

/// 单URL分析端点
pub async fn analyze(
    Extension(use_case): Extension<Arc<AnalyzeUseCase>>,
    Json(payload): Json<AnalyzeRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, error_body(e.to_string())).into_response();
    }

    match use_case.analyze(&payload.url).await {
        Ok(report) => (
            StatusCode::OK,
            Json(AnalyzeResponseDto {
                success: true,
                data: report,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Analysis failed for {}: {}", payload.url, e);
            (
                error_status(&e),
                error_body(format!("Analysis failed for {}: {}", payload.url, e)),
            )
                .into_response()
        }
    }
}

/// 批量分析端点
///
/// 超出URL数量上限的请求整体拒绝，批内失败按条目隔离。
pub async fn analyze_batch(
    Extension(use_case): Extension<Arc<AnalyzeUseCase>>,
    Json(payload): Json<BatchAnalyzeRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, error_body(e.to_string())).into_response();
    }

    match use_case.analyze_batch(&payload.urls).await {
        Ok(items) => {
            let results: Vec<BatchEntryDto> = items
                .into_iter()
                .map(|item| match item.result {
                    Ok(report) => BatchEntryDto {
                        url: item.url,
                        success: true,
                        data: Some(report),
                        error: None,
                    },
                    Err(e) => BatchEntryDto {
                        url: item.url,
                        success: false,
                        data: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();

            let successful = results.iter().filter(|entry| entry.success).count();
            let summary = BatchSummaryDto {
                total_urls: results.len(),
                successful,
                failed: results.len() - successful,
            };

            (
                StatusCode::OK,
                Json(BatchResponseDto {
                    success: true,
                    results,
                    summary,
                }),
            )
                .into_response()
        }
        Err(e) => (error_status(&e), error_body(e.to_string())).into_response(),
    }
}

/// 线索评分端点
///
/// 返回评分摘要，不含完整检测数据
pub async fn lead_score(
    Extension(use_case): Extension<Arc<AnalyzeUseCase>>,
    Json(payload): Json<AnalyzeRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, error_body(e.to_string())).into_response();
    }

    match use_case.analyze(&payload.url).await {
        Ok(report) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "data": LeadScoreSummaryDto::from_report(&report)
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Lead scoring failed for {}: {}", payload.url, e);
            (
                error_status(&e),
                error_body(format!("Analysis failed for {}: {}", payload.url, e)),
            )
                .into_response()
        }
    }
}
