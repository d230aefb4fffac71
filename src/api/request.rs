// api/request.rs - 搜索请求类型
//! 定义搜索请求的结构化类型

use serde::{Deserialize, Serialize};
use crate::query::QueryOptions;

/// 搜索请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// 原始查询文本
    pub query: String,

    /// 每个文档的片段上限，不填则使用引擎配置
    #[serde(default)]
    pub snippet_cap: Option<usize>,

    /// 上下文半径，不填则使用引擎配置
    #[serde(default)]
    pub context_radius: Option<usize>,

    /// 是否高亮匹配内容
    #[serde(default = "default_true")]
    pub highlight: bool,
}

fn default_true() -> bool { true }

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            snippet_cap: None,
            context_radius: None,
            highlight: true,
        }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_snippet_cap(mut self, cap: usize) -> Self {
        self.snippet_cap = Some(cap);
        self
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = Some(radius);
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// 在引擎默认选项上叠加本次请求的覆盖项
    pub fn to_query_options(&self, base: &QueryOptions) -> QueryOptions {
        QueryOptions {
            snippet_cap: self.snippet_cap.unwrap_or(base.snippet_cap),
            context_radius: self.context_radius.unwrap_or(base.context_radius),
            highlight: self.highlight && base.highlight,
            ..base.clone()
        }
    }
}
