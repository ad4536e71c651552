// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 结构化数据审计结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaAudit {
    /// JSON-LD数据块数量
    pub json_ld_count: usize,
    /// 声明的schema类型（小写）
    pub schema_types: Vec<String>,
    /// Microdata itemtype值
    pub microdata: Vec<String>,
    /// RDFa typeof值
    pub rdfa: Vec<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

impl SchemaAudit {
    /// 是否存在任意结构化数据（JSON-LD或Microdata）
    pub fn has_structured_data(&self) -> bool {
        self.json_ld_count > 0 || !self.microdata.is_empty()
    }
}

/// 审计结构化数据与schema标注
pub fn audit(page: &PageDocument) -> SchemaAudit {
    let mut result = SchemaAudit {
        json_ld_count: page.json_ld.len(),
        schema_types: page.schema_types.clone(),
        microdata: page.microdata_types.clone(),
        rdfa: page.rdfa_types.clone(),
        opportunities: Vec::new(),
    };

    if result.json_ld_count == 0 && result.microdata.is_empty() && result.rdfa.is_empty() {
        result.opportunities.push(Opportunity::new(
            Priority::High,
            "Add structured data markup",
            "Implement JSON-LD schema for organization, local business, or relevant content type",
            "Improve search result appearance with rich snippets",
        ));
    }

    let local_signals = ["hours", "phone", "address"]
        .iter()
        .any(|word| page.text_lower.contains(word));
    if local_signals && !result.schema_types.iter().any(|t| t == "localbusiness") {
        result.opportunities.push(Opportunity::new(
            Priority::Medium,
            "Add LocalBusiness schema markup",
            "Implement LocalBusiness schema with address, phone, and hours",
            "Improve local search visibility and Google My Business integration",
        ));
    }

    result
}
