// api/response.rs - 搜索响应类型
//! 定义搜索结果的结构化响应类型

use serde::{Deserialize, Serialize};

/// 搜索响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// 查询信息
    pub query: QueryInfo,

    /// 按文档分组的搜索结果
    pub results: Vec<MatchResult>,

    /// 命中的文档数
    pub total: usize,

    /// 参与搜索的文档数
    pub searched: usize,

    /// 搜索耗时（毫秒）
    pub took_ms: u64,
}

impl SearchResponse {
    pub fn new(query: QueryInfo, results: Vec<MatchResult>, searched: usize) -> Self {
        Self {
            total: results.len(),
            query,
            results,
            searched,
            took_ms: 0,
        }
    }

    pub fn with_took(mut self, took_ms: u64) -> Self {
        self.took_ms = took_ms;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// 查询信息（用于调试和展示）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryInfo {
    /// 原始查询文本
    pub raw_query: String,

    /// 切分后的关键词
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tokens: Vec<String>,
}

impl QueryInfo {
    pub fn new(raw_query: impl Into<String>) -> Self {
        Self {
            raw_query: raw_query.into(),
            tokens: Vec::new(),
        }
    }

    pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
        self.tokens = tokens;
        self
    }
}

/// 单个文档的匹配结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 文档名
    pub document_name: String,

    /// 首个命中处推导出的标题，推导失败时为文档名
    pub title: String,

    /// 带高亮标记的上下文片段，按行序排列
    pub snippets: Vec<String>,

    /// 片段是否被截断（为 true 时最后一项是 read more 提示）
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl MatchResult {
    pub fn new(document_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            title: title.into(),
            snippets: Vec::new(),
            truncated: false,
        }
    }

    pub fn with_snippets(mut self, snippets: Vec<String>) -> Self {
        self.snippets = snippets;
        self
    }

    /// 追加 read more 提示并标记截断
    pub fn mark_truncated(mut self, read_more_text: impl Into<String>) -> Self {
        if !self.truncated {
            self.snippets.push(read_more_text.into());
            self.truncated = true;
        }
        self
    }

    /// 不含 read more 提示的真实片段
    pub fn real_snippets(&self) -> &[String] {
        if self.truncated {
            &self.snippets[..self.snippets.len().saturating_sub(1)]
        } else {
            &self.snippets
        }
    }
}
