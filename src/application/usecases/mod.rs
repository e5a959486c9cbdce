// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用用例模块
///
/// - 入队（enqueue_batch）：校验 URL 批次并同步转发给工作器
pub mod enqueue_batch;
