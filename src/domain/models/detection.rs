// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 改进建议优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// 高优先级
    High,
    /// 中优先级
    Medium,
    /// 低优先级
    Low,
}

impl Priority {
    /// 优先级排序权重，数值越小越靠前
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// 改进建议
///
/// 单条可执行的优化建议。`category`由建议聚合器回填，
/// 检测器自身不感知所属类别。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// 优先级
    pub priority: Priority,
    /// 建议内容
    pub recommendation: String,
    /// 实施方式
    pub implementation: String,
    /// 预期影响
    pub impact: String,
    /// 来源类别（由聚合器回填）
    #[serde(default)]
    pub category: String,
}

impl Opportunity {
    /// 创建一条未归类的建议
    pub fn new(
        priority: Priority,
        recommendation: impl Into<String>,
        implementation: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            recommendation: recommendation.into(),
            implementation: implementation.into(),
            impact: impact.into(),
            category: String::new(),
        }
    }
}

/// 成熟度标签
///
/// 检测器按固定分界点将子分数归入定性档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    /// 成熟
    Advanced,
    /// 发展中
    Developing,
    /// 起步
    Basic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_ordering() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_opportunity_starts_uncategorized() {
        let opp = Opportunity::new(Priority::High, "Add live chat", "Install widget", "Faster response");
        assert!(opp.category.is_empty());
    }
}
