// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 覆盖REST接口、抓取引擎与端到端分析流水线
mod api_test;
mod fetch_engine_test;
mod helpers;
mod pipeline_test;
