// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含数据传输对象和用例实现，负责在 HTTP 层和领域层之间转换
pub mod dto;
pub mod usecases;
