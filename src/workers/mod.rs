// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 抓取流水线：限流、抓取、提取、记录，按批次顺序执行
pub mod scrape_worker;

pub use scrape_worker::ScrapeWorker;
