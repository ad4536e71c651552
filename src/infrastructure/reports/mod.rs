// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::AnalysisReport;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Markdown报告渲染
pub mod markdown;

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl ReportFormat {
    /// 从格式名解析，未知格式返回None
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }

    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

/// 报告渲染错误类型
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON序列化失败
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 渲染分析结果为指定格式的文本
///
/// 渲染器只读消费分析结果，不做任何计算。
pub fn render(report: &AnalysisReport, format: ReportFormat) -> Result<String, RenderError> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Markdown => Ok(markdown::render(report)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(ReportFormat::parse("json"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("Markdown"), Some(ReportFormat::Markdown));
        assert_eq!(ReportFormat::parse("md"), Some(ReportFormat::Markdown));
        assert_eq!(ReportFormat::parse("xml"), None);
    }
}
