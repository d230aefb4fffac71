// query/parser.rs - 查询解析器
//! 把用户输入切分为关键词
//!
//! - 大小写不敏感
//! - 按空白切分，多个关键词之间是 AND 关系（文档级别，不要求出现在同一行）
//! - 空查询在扫描前直接报错

use super::types::*;

/// 查询解析错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Query is empty")]
    Empty,
}

/// 查询解析器
#[derive(Debug, Clone, Default)]
pub struct QueryParser;

impl QueryParser {
    /// 创建新的解析器
    pub fn new() -> Self {
        Self
    }

    /// 解析查询字符串
    pub fn parse(&self, input: &str) -> Result<ParsedQuery, QueryError> {
        let raw_text = input.trim();
        if raw_text.is_empty() {
            return Err(QueryError::Empty);
        }

        let tokens = raw_text
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Ok(ParsedQuery { raw_text: raw_text.to_string(), tokens })
    }
}
