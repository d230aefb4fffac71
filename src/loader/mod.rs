// loader/mod.rs - 文档加载
//! 从内容源列出文档，按列表顺序逐个拉取，返回内存中的文档序列。
//!
//! 任何一次列表或拉取失败都会中止整个加载，不保留部分结果。

mod github;
mod memory;

pub use github::*;
pub use memory::*;

use std::collections::HashSet;

use crate::models::{Document, ListingEntry};

/// 加载错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Listing error: {0}")]
    Listing(String),

    #[error("Fetch error for '{name}': {reason}")]
    Fetch { name: String, reason: String },

    #[error("Duplicate document name: {0}")]
    DuplicateName(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// 内容源：列出文档并按地址拉取原文
pub trait ContentSource {
    fn list(&self) -> LoadResult<Vec<ListingEntry>>;

    fn fetch(&self, entry: &ListingEntry) -> LoadResult<String>;
}

/// 加载进度通知，只做展示用
pub trait ProgressSink {
    fn on_progress(&mut self, message: &str);
}

impl<F: FnMut(&str)> ProgressSink for F {
    fn on_progress(&mut self, message: &str) {
        self(message)
    }
}

/// 把进度写入日志
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&mut self, message: &str) {
        log::info!("[Loader] {}", message);
    }
}

/// 文档加载器
#[derive(Debug, Clone)]
pub struct ContentLoader<S> {
    source: S,
    /// 小写、不含点号；为空时不过滤
    extensions: Vec<String>,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source, extensions: Vec::new() }
    }

    /// 只加载指定扩展名的文件
    pub fn with_extensions<I, T>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 加载全部文档，保持列表顺序
    pub fn load(&self, progress: &mut dyn ProgressSink) -> LoadResult<Vec<Document>> {
        progress.on_progress("Fetching listing...");

        let entries = self.source.list().inspect_err(|e| {
            log::error!("[Loader] 获取文件列表失败: {}", e);
        })?;
        let listed = entries.len();

        let entries: Vec<ListingEntry> = entries
            .into_iter()
            .filter(|entry| self.accepts(entry))
            .collect();
        log::info!("[Loader] 列表共 {} 项，其中 {} 个待加载", listed, entries.len());

        let mut seen = HashSet::new();
        if let Some(dup) = entries.iter().find(|e| !seen.insert(e.name.as_str())) {
            let err = LoadError::DuplicateName(dup.name.clone());
            log::error!("[Loader] {}", err);
            return Err(err);
        }

        let mut documents = Vec::with_capacity(entries.len());
        for entry in &entries {
            progress.on_progress(&format!("Processing file: {}", entry.name));

            let content = self.source.fetch(entry).inspect_err(|e| {
                log::error!("[Loader] 拉取失败，终止加载: {}", e);
            })?;
            log::debug!("[Loader] {} ({} bytes)", entry.name, content.len());

            documents.push(Document::new(&entry.name, content));
        }

        progress.on_progress("Done");
        log::info!("[Loader] 加载完成，共 {} 个文档", documents.len());

        Ok(documents)
    }

    fn accepts(&self, entry: &ListingEntry) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        entry
            .extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_source() -> MemorySource {
        MemorySource::new()
            .with_file("b.md", "Beta content")
            .with_file("image.png", "binary")
            .with_file("a.MD", "Alpha content")
            .with_file("notes.txt", "Plain notes")
    }

    #[test]
    fn test_load_preserves_listing_order() {
        let loader = ContentLoader::new(sample_source());
        let docs = loader.load(&mut LogProgress).unwrap();

        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b.md", "image.png", "a.MD", "notes.txt"]);
        assert_eq!(docs[0].content, "Beta content");
    }

    #[test]
    fn test_load_filters_extensions() {
        let loader = ContentLoader::new(sample_source()).with_extensions([".md", "TXT"]);
        let docs = loader.load(&mut LogProgress).unwrap();

        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b.md", "a.MD", "notes.txt"]);
        assert_eq!(loader.source().fetched(), vec!["b.md", "a.MD", "notes.txt"]);
    }

    #[test]
    fn test_progress_messages() {
        let loader = ContentLoader::new(sample_source()).with_extensions(["md"]);
        let mut messages = Vec::new();
        let mut sink = |m: &str| messages.push(m.to_string());
        loader.load(&mut sink).unwrap();

        assert_eq!(
            messages,
            vec![
                "Fetching listing...",
                "Processing file: b.md",
                "Processing file: a.MD",
                "Done",
            ]
        );
    }

    #[test]
    fn test_listing_failure_aborts() {
        let loader = ContentLoader::new(sample_source().with_listing_failure("HTTP 503"));
        let err = loader.load(&mut LogProgress).unwrap_err();

        assert_eq!(err, LoadError::Listing("HTTP 503".to_string()));
        assert!(loader.source().fetched().is_empty());
    }

    #[test]
    fn test_fetch_failure_aborts_whole_load() {
        let loader = ContentLoader::new(sample_source().with_fetch_failure("image.png"));
        let mut messages = Vec::new();
        let mut sink = |m: &str| messages.push(m.to_string());
        let err = loader.load(&mut sink).unwrap_err();

        assert!(matches!(err, LoadError::Fetch { ref name, .. } if name == "image.png"));
        // 失败后不再继续拉取，也没有 Done
        assert_eq!(loader.source().fetched(), vec!["b.md", "image.png"]);
        assert_eq!(messages.last().map(String::as_str), Some("Processing file: image.png"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let source = MemorySource::new()
            .with_file("a.md", "one")
            .with_file("a.md", "two");
        let err = ContentLoader::new(source).load(&mut LogProgress).unwrap_err();
        assert_eq!(err, LoadError::DuplicateName("a.md".to_string()));
    }

    #[test]
    fn test_empty_listing() {
        let docs = ContentLoader::new(MemorySource::new()).load(&mut LogProgress).unwrap();
        assert!(docs.is_empty());
    }
}
