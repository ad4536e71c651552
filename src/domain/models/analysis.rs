// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::Detections;
use crate::domain::models::detection::Opportunity;
use crate::domain::models::lead_score::LeadScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 分析结果聚合根
///
/// 一次分析调用结束时构建，之后不可变。是系统边界
/// （API、文件、文本报告）之间传递的唯一单元。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 报告ID
    pub id: Uuid,
    /// 分析的URL
    pub url: String,
    /// 抓取时间
    pub fetched_at: DateTime<Utc>,
    /// 全部检测结果
    pub detections: Detections,
    /// 自动化机会总分（0-100）
    pub automation_score: u32,
    /// 线索评分
    pub lead_score: LeadScore,
    /// 按优先级排序的建议列表
    pub recommendations: Vec<Opportunity>,
}

// Equality ignores id and fetch timestamp: same document, same verdict
impl PartialEq for AnalysisReport {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.detections == other.detections
            && self.automation_score == other.automation_score
            && self.lead_score == other.lead_score
            && self.recommendations == other.recommendations
    }
}
