// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个API端点的具体处理逻辑
pub mod batch_handler;
pub mod enqueue_handler;
pub mod health_handler;
pub mod metrics_handler;
pub mod results_handler;
