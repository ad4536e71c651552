// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::detectors::tables::{BOOKING_IFRAME_MARKERS, BOOKING_KEYWORDS, BOOKING_VENDORS};
use crate::domain::models::detection::{Opportunity, Priority};
use crate::domain::models::page::PageDocument;
use serde::{Deserialize, Serialize};

/// 预约系统检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFinding {
    /// 是否存在预约能力
    pub has_booking: bool,
    /// 识别出的预约服务商
    pub booking_system: Option<String>,
    /// 预约类型
    pub booking_types: Vec<String>,
    /// 改进建议
    pub opportunities: Vec<Opportunity>,
}

/// 检测在线预约与日程安排系统
pub fn detect(page: &PageDocument) -> BookingFinding {
    let mut finding = BookingFinding {
        has_booking: false,
        booking_system: None,
        booking_types: Vec::new(),
        opportunities: Vec::new(),
    };

    if BOOKING_KEYWORDS
        .iter()
        .any(|keyword| page.text_lower.contains(keyword))
    {
        finding.has_booking = true;
    }

    for src in &page.script_srcs {
        for (marker, vendor) in BOOKING_VENDORS {
            if src.contains(marker) {
                finding.booking_system = Some(vendor.to_string());
                finding.has_booking = true;
            }
        }
    }

    for src in &page.iframe_srcs {
        if BOOKING_IFRAME_MARKERS.iter().any(|m| src.contains(m)) {
            finding.has_booking = true;
        }
    }

    if page.text_lower.contains("appointment") {
        finding.booking_types.push("appointments".to_string());
    }
    if page.text_lower.contains("reservation") {
        finding.booking_types.push("reservations".to_string());
    }
    if page.text_lower.contains("consultation") {
        finding.booking_types.push("consultations".to_string());
    }

    if !finding.has_booking {
        finding.opportunities.push(Opportunity::new(
            Priority::High,
            "Add online booking system",
            "Integrate Calendly, Acuity Scheduling, or custom booking solution",
            "Automate appointment scheduling and reduce admin work",
        ));
    }

    finding
}
