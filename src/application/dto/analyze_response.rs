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

use crate::domain::models::analysis::AnalysisReport;
use crate::domain::models::lead_score::CategoryScores;
use serde::{Deserialize, Serialize};

/// 单URL分析响应
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponseDto {
    pub success: bool,
    pub data: AnalysisReport,
}

/// 批量分析中单个URL的结果
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntryDto {
    /// 请求的URL
    pub url: String,
    /// 该URL是否分析成功
    pub success: bool,
    /// 成功时的分析结果
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalysisReport>,
    /// 失败时的错误描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 批量分析汇总
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummaryDto {
    pub total_urls: usize,
    pub successful: usize,
    pub failed: usize,
}

/// 批量分析响应
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponseDto {
    pub success: bool,
    pub results: Vec<BatchEntryDto>,
    pub summary: BatchSummaryDto,
}

/// 线索评分摘要（不含完整检测数据）
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadScoreSummaryDto {
    pub url: String,
    pub overall_score: u32,
    pub lead_quality: String,
    pub category_scores: CategoryScores,
    pub deal_size_estimate: String,
    pub sales_cycle_estimate: String,
    pub conversion_probability: String,
    pub sales_priority: String,
}

impl LeadScoreSummaryDto {
    /// 从完整分析结果提取评分摘要
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            url: report.url.clone(),
            overall_score: report.lead_score.overall,
            lead_quality: report.lead_score.tier.name().to_string(),
            category_scores: report.lead_score.categories,
            deal_size_estimate: report.lead_score.deal_size_estimate.clone(),
            sales_cycle_estimate: report.lead_score.sales_cycle_estimate.clone(),
            conversion_probability: report.lead_score.conversion_probability.clone(),
            sales_priority: report.lead_score.sales_priority.clone(),
        }
    }
}
