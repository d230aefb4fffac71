// query/types.rs - 查询相关类型定义
//! 定义解析后的查询和搜索选项

use serde::{Serialize, Deserialize};

/// 每个文档默认最多返回的片段数
pub const DEFAULT_SNIPPET_CAP: usize = 5;
/// 默认上下文半径（命中行前后各一行）
pub const DEFAULT_CONTEXT_RADIUS: usize = 1;
pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";
/// 片段达到上限且仍有命中时追加的提示
pub const READ_MORE_TEXT: &str = "... read more";

/// 解析后的查询请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// 原始查询文本（已去除首尾空白）
    pub raw_text: String,
    /// 按空白切分的关键词，保持输入顺序
    pub tokens: Vec<String>,
}

impl ParsedQuery {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// 查询选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// 每个文档最多返回的片段数
    pub snippet_cap: usize,
    /// 命中行前后各取几行
    pub context_radius: usize,
    /// 是否高亮匹配内容
    pub highlight: bool,
    pub highlight_open: String,
    pub highlight_close: String,
    pub read_more_text: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            snippet_cap: DEFAULT_SNIPPET_CAP,
            context_radius: DEFAULT_CONTEXT_RADIUS,
            highlight: true,
            highlight_open: HIGHLIGHT_OPEN.to_string(),
            highlight_close: HIGHLIGHT_CLOSE.to_string(),
            read_more_text: READ_MORE_TEXT.to_string(),
        }
    }
}

impl QueryOptions {
    /// 从显示配置构建
    pub fn from_display(display: &crate::config::DisplayConfig) -> Self {
        Self {
            snippet_cap: display.snippet_cap,
            context_radius: display.context_radius,
            highlight: true,
            highlight_open: display.highlight_open.clone(),
            highlight_close: display.highlight_close.clone(),
            read_more_text: display.read_more_text.clone(),
        }
    }
}
