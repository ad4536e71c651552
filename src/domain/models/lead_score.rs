// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 公司画像类别满分
pub const COMPANY_PROFILE_MAX: u32 = 25;
/// 社交媒体类别满分
pub const SOCIAL_MAX: u32 = 20;
/// 技术栈类别满分
pub const TECHNOLOGY_MAX: u32 = 20;
/// 预算信号类别满分
pub const BUDGET_MAX: u32 = 25;
/// 联系可达性类别满分
pub const CONTACT_MAX: u32 = 10;

/// 五个固定类别的得分
///
/// 每个类别得分不超过其满分，总分即各类别之和
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// 公司画像（满分25）
    pub company_profile: u32,
    /// 社交媒体（满分20）
    pub social: u32,
    /// 技术栈（满分20）
    pub technology: u32,
    /// 预算信号（满分25）
    pub budget: u32,
    /// 联系可达性（满分10）
    pub contact: u32,
}

impl CategoryScores {
    /// 各类别得分之和
    pub fn total(&self) -> u32 {
        self.company_profile + self.social + self.technology + self.budget + self.contact
    }
}

/// 线索质量档位
///
/// 由总分经固定阈值划分，阈值覆盖[0,100]全区间且互不重叠
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTier {
    /// 总分>=80
    Premium,
    /// 总分[60,80)
    Qualified,
    /// 总分[40,60)
    Potential,
    /// 总分<40
    Nurture,
}

impl LeadTier {
    /// 按固定阈值从总分映射档位
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            LeadTier::Premium
        } else if score >= 60 {
            LeadTier::Qualified
        } else if score >= 40 {
            LeadTier::Potential
        } else {
            LeadTier::Nurture
        }
    }

    /// 档位名称
    pub fn name(&self) -> &'static str {
        match self {
            LeadTier::Premium => "premium",
            LeadTier::Qualified => "qualified",
            LeadTier::Potential => "potential",
            LeadTier::Nurture => "nurture",
        }
    }

    /// 预估成交金额区间
    pub fn deal_size_estimate(&self) -> &'static str {
        match self {
            LeadTier::Premium => "$10,000-$100,000+",
            LeadTier::Qualified => "$5,000-$25,000",
            LeadTier::Potential => "$2,000-$10,000",
            LeadTier::Nurture => "$500-$5,000",
        }
    }

    /// 预估销售周期
    pub fn sales_cycle_estimate(&self) -> &'static str {
        match self {
            LeadTier::Premium => "1-3 months",
            LeadTier::Qualified => "2-6 months",
            LeadTier::Potential => "3-12 months",
            LeadTier::Nurture => "6-18+ months",
        }
    }

    /// 转化概率标签
    pub fn conversion_probability(&self) -> &'static str {
        match self {
            LeadTier::Premium => "high",
            LeadTier::Qualified => "medium-high",
            LeadTier::Potential => "medium",
            LeadTier::Nurture => "low",
        }
    }

    /// 销售跟进优先级
    pub fn sales_priority(&self) -> &'static str {
        match self {
            LeadTier::Premium => "immediate",
            LeadTier::Qualified => "high",
            LeadTier::Potential => "medium",
            LeadTier::Nurture => "low",
        }
    }
}

/// 线索评分
///
/// 由各类别得分一次性计算得出的纯函数结果，不含隐藏状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScore {
    /// 总分（0-100）
    pub overall: u32,
    /// 各类别得分
    pub categories: CategoryScores,
    /// 质量档位
    pub tier: LeadTier,
    /// 预估成交金额区间
    pub deal_size_estimate: String,
    /// 预估销售周期
    pub sales_cycle_estimate: String,
    /// 转化概率
    pub conversion_probability: String,
    /// 销售跟进优先级
    pub sales_priority: String,
    /// 总分解释文本
    pub explanation: String,
    /// 得分优势
    pub strengths: Vec<String>,
    /// 待改进项
    pub improvement_areas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_partition_is_total_and_exclusive() {
        for score in 0..=100u32 {
            let tier = LeadTier::from_score(score);
            let expected = match score {
                80..=100 => LeadTier::Premium,
                60..=79 => LeadTier::Qualified,
                40..=59 => LeadTier::Potential,
                _ => LeadTier::Nurture,
            };
            assert_eq!(tier, expected, "score {} mapped to wrong tier", score);
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(LeadTier::from_score(80), LeadTier::Premium);
        assert_eq!(LeadTier::from_score(79), LeadTier::Qualified);
        assert_eq!(LeadTier::from_score(60), LeadTier::Qualified);
        assert_eq!(LeadTier::from_score(59), LeadTier::Potential);
        assert_eq!(LeadTier::from_score(40), LeadTier::Potential);
        assert_eq!(LeadTier::from_score(39), LeadTier::Nurture);
        assert_eq!(LeadTier::from_score(0), LeadTier::Nurture);
    }

    #[test]
    fn test_category_total() {
        let categories = CategoryScores {
            company_profile: 20,
            social: 16,
            technology: 12,
            budget: 25,
            contact: 7,
        };
        assert_eq!(categories.total(), 80);
    }
}
