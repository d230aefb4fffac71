// engine/builder.rs - 搜索引擎构建器
//! 使用 Builder 模式构建 SearchEngine

use crate::config::AppConfig;
use crate::query::{QueryOptions, QueryParser};

use super::core::{SearchEngine, EngineError, EngineResult};

/// 搜索引擎构建器
#[derive(Debug, Clone, Default)]
pub struct SearchEngineBuilder {
    options: QueryOptions,
}

impl SearchEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置文件的 [display] 段初始化
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            options: QueryOptions::from_display(&config.display),
        }
    }

    /// 设置每个文档的片段上限
    pub fn with_snippet_cap(mut self, cap: usize) -> Self {
        self.options.snippet_cap = cap;
        self
    }

    /// 设置上下文半径
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.options.context_radius = radius;
        self
    }

    /// 设置高亮标记
    pub fn with_highlight_tags(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.options.highlight_open = open.into();
        self.options.highlight_close = close.into();
        self
    }

    /// 是否高亮
    pub fn with_highlight(mut self, enable: bool) -> Self {
        self.options.highlight = enable;
        self
    }

    /// 设置截断提示
    pub fn with_read_more_text(mut self, text: impl Into<String>) -> Self {
        self.options.read_more_text = text.into();
        self
    }

    /// 构建搜索引擎
    pub fn build(self) -> EngineResult<SearchEngine> {
        if self.options.snippet_cap == 0 {
            return Err(EngineError::Config("snippet_cap must be at least 1".to_string()));
        }
        if self.options.highlight && self.options.highlight_open.is_empty() {
            return Err(EngineError::Config("highlight_open must not be empty".to_string()));
        }

        Ok(SearchEngine {
            parser: QueryParser::new(),
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    #[test]
    fn test_builder() {
        let engine = SearchEngineBuilder::new()
            .with_snippet_cap(2)
            .with_context_radius(2)
            .with_read_more_text("[more]")
            .build()
            .unwrap();

        assert_eq!(engine.options().snippet_cap, 2);
        assert_eq!(engine.options().context_radius, 2);
        assert_eq!(engine.options().read_more_text, "[more]");
    }

    #[test]
    fn test_builder_from_config() {
        let mut config = AppConfig::default();
        config.display.snippet_cap = 3;
        config.display.highlight_open = "<b>".to_string();
        config.display.highlight_close = "</b>".to_string();

        let engine = SearchEngineBuilder::from_config(&config).build().unwrap();
        let results = engine
            .search(&[Document::new("a.md", "Thyroid")], "thyroid")
            .unwrap();
        assert_eq!(results[0].snippets, vec!["<b>Thyroid</b>".to_string()]);
    }

    #[test]
    fn test_builder_rejects_invalid_options() {
        assert!(SearchEngineBuilder::new().with_snippet_cap(0).build().is_err());
        assert!(SearchEngineBuilder::new().with_highlight_tags("", "").build().is_err());
        assert!(SearchEngineBuilder::new()
            .with_highlight(false)
            .with_highlight_tags("", "")
            .build()
            .is_ok());
    }
}
