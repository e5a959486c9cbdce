// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 API 与工作器之间以及对外的 JSON 结构
pub mod batch_request;
pub mod batch_response;
pub mod results_query;
