// engine/core.rs - 搜索引擎核心
//! 对内存中的文档做大小写不敏感的关键词搜索。
//!
//! 引擎本身不持有文档：每次调用都传入当前加载的文档集合，
//! 结果只取决于 (文档, 查询)。

use std::time::Instant;

use crate::api::{MatchResult, QueryInfo, SearchRequest, SearchResponse};
use crate::extract::{context_text, derive_title};
use crate::models::Document;
use crate::query::{ParsedQuery, QueryError, QueryOptions, QueryParser, TokenSet};

/// 搜索引擎错误类型
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Matcher error: {0}")]
    Matcher(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<QueryError> for EngineError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Empty => EngineError::EmptyQuery,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// 搜索引擎
#[derive(Debug, Clone)]
pub struct SearchEngine {
    pub(crate) parser: QueryParser,
    pub(crate) options: QueryOptions,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            parser: QueryParser::new(),
            options: QueryOptions::default(),
        }
    }
}

impl SearchEngine {
    /// 引擎默认选项
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// 执行搜索，结果按文档传入顺序排列
    pub fn search(&self, documents: &[Document], query: &str) -> EngineResult<Vec<MatchResult>> {
        let parsed = self.parser.parse(query)?;
        self.search_parsed(documents, &parsed, &self.options)
    }

    /// 执行结构化请求
    pub fn execute(&self, documents: &[Document], request: &SearchRequest) -> EngineResult<SearchResponse> {
        let start = Instant::now();

        let parsed = self.parser.parse(&request.query)?;
        let options = request.to_query_options(&self.options);
        if options.snippet_cap == 0 {
            return Err(EngineError::Config("snippet_cap must be at least 1".to_string()));
        }

        let results = self.search_parsed(documents, &parsed, &options)?;
        let query_info = QueryInfo::new(&parsed.raw_text).with_tokens(parsed.tokens.clone());

        let took_ms = start.elapsed().as_millis() as u64;

        Ok(SearchResponse::new(query_info, results, documents.len()).with_took(took_ms))
    }

    // === 私有方法 ===

    fn search_parsed(
        &self,
        documents: &[Document],
        parsed: &ParsedQuery,
        options: &QueryOptions,
    ) -> EngineResult<Vec<MatchResult>> {
        // 每次搜索只编译一次
        let tokens = TokenSet::compile(parsed)?;

        let results: Vec<MatchResult> = documents
            .iter()
            .filter_map(|doc| self.search_document(doc, &tokens, options))
            .collect();

        log::debug!(
            "[Search] '{}' -> {} / {} documents",
            parsed.raw_text,
            results.len(),
            documents.len()
        );

        Ok(results)
    }

    fn search_document(
        &self,
        doc: &Document,
        tokens: &TokenSet,
        options: &QueryOptions,
    ) -> Option<MatchResult> {
        if !tokens.all_match(&doc.content) {
            return None;
        }

        // 只按 '\n' 切分，CRLF 行保留 '\r'，去掉高亮后与原文一致
        let lines: Vec<&str> = doc.content.split('\n').collect();
        let mut hits = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| tokens.any_match(line))
            .map(|(i, _)| i);

        let first = hits.next()?;

        let title = derive_title(&lines, first);
        let title = if title.is_empty() { doc.name.clone() } else { title };

        let snippets = std::iter::once(first)
            .chain(hits.by_ref().take(options.snippet_cap.saturating_sub(1)))
            .map(|i| self.render_snippet(&lines, i, tokens, options))
            .collect();

        let result = MatchResult::new(&doc.name, title).with_snippets(snippets);

        if hits.next().is_some() {
            Some(result.mark_truncated(&options.read_more_text))
        } else {
            Some(result)
        }
    }

    fn render_snippet(&self, lines: &[&str], hit: usize, tokens: &TokenSet, options: &QueryOptions) -> String {
        let text = context_text(lines, hit, options.context_radius);
        if options.highlight {
            tokens.highlight(&text, &options.highlight_open, &options.highlight_close)
        } else {
            text
        }
    }
}

/// 使用默认选项搜索
pub fn search(documents: &[Document], query: &str) -> EngineResult<Vec<MatchResult>> {
    SearchEngine::default().search(documents, query)
}
