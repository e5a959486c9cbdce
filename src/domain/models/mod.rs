// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 抓取结果（page_result）：一次抓取尝试的结果，成功或失败
/// - URL 批次（url_batch）：一次提交的、已校验的 URL 列表
pub mod page_result;
pub mod url_batch;
