// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::analyze_use_case::AnalyzeError;
use crate::engines::traits::FetchError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let status = match self.0.downcast_ref::<AnalyzeError>() {
            Some(AnalyzeError::Validation(_)) => StatusCode::BAD_REQUEST,
            Some(AnalyzeError::BatchLimitExceeded(_)) => StatusCode::BAD_REQUEST,
            Some(AnalyzeError::Fetch(FetchError::Blocked(_))) => StatusCode::BAD_REQUEST,
            Some(AnalyzeError::Fetch(_)) => StatusCode::BAD_GATEWAY,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(json!({
                "success": false,
                "error": error_message
            })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
