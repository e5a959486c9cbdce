// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page_result::{MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
use crate::utils::text_processing::truncate_chars;
use scraper::{Html, Selector};

/// 页面元数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// 第一个 title 元素的文本，去除首尾空白
    pub title: Option<String>,
    /// 第一个 name="description" 的 meta 元素的 content 属性
    pub description: Option<String>,
}

/// 提取服务
///
/// 负责从 HTML 内容中提取标题和描述
pub struct ExtractionService;

impl ExtractionService {
    /// 提取页面元数据
    ///
    /// 仅处理 `text/html` 开头的内容类型，其它类型返回空结果。
    /// 解析是容错的：残缺的标记只会得到空字段，不会报错。
    ///
    /// # 参数
    ///
    /// * `content_type` - 响应的 Content-Type 头
    /// * `body` - 响应正文
    pub fn extract(content_type: &str, body: &str) -> PageMetadata {
        if !content_type.starts_with("text/html") {
            return PageMetadata::default();
        }

        let document = Html::parse_document(body);

        PageMetadata {
            title: Self::extract_title(&document),
            description: Self::extract_description(&document),
        }
    }

    fn extract_title(document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let element = document.select(&selector).next()?;
        let text = element.text().collect::<String>();
        Some(truncate_chars(text.trim(), MAX_TITLE_CHARS))
    }

    fn extract_description(document: &Html) -> Option<String> {
        let selector = Selector::parse("meta").ok()?;
        // Exact, case-sensitive match on the name attribute
        let element = document
            .select(&selector)
            .find(|e| e.value().attr("name") == Some("description"))?;
        let content = element.value().attr("content").unwrap_or_default();
        Some(truncate_chars(content, MAX_DESCRIPTION_CHARS))
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
