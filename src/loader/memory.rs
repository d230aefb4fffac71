// loader/memory.rs - 内存内容源
// 用于测试和演示，可注入列表或拉取失败

use std::cell::RefCell;
use std::collections::HashSet;

use crate::models::ListingEntry;

use super::{ContentSource, LoadError, LoadResult};

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<(String, String)>,
    listing_failure: Option<String>,
    fetch_failures: HashSet<String>,
    /// 已拉取的文件名，按拉取顺序
    fetched: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((name.into(), content.into()));
        self
    }

    /// 列表请求直接失败
    pub fn with_listing_failure(mut self, reason: impl Into<String>) -> Self {
        self.listing_failure = Some(reason.into());
        self
    }

    /// 拉取指定文件时失败
    pub fn with_fetch_failure(mut self, name: impl Into<String>) -> Self {
        self.fetch_failures.insert(name.into());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }
}

impl ContentSource for MemorySource {
    fn list(&self) -> LoadResult<Vec<ListingEntry>> {
        if let Some(reason) = &self.listing_failure {
            return Err(LoadError::Listing(reason.clone()));
        }

        Ok(self.files
            .iter()
            .enumerate()
            .map(|(i, (name, _))| ListingEntry::new(i.to_string(), format!("memory://{}", i), name))
            .collect())
    }

    fn fetch(&self, entry: &ListingEntry) -> LoadResult<String> {
        self.fetched.borrow_mut().push(entry.name.clone());

        if self.fetch_failures.contains(&entry.name) {
            return Err(LoadError::Fetch {
                name: entry.name.clone(),
                reason: "injected failure".to_string(),
            });
        }

        entry.id
            .parse::<usize>()
            .ok()
            .and_then(|i| self.files.get(i))
            .map(|(_, content)| content.clone())
            .ok_or_else(|| LoadError::Fetch {
                name: entry.name.clone(),
                reason: format!("not found: {}", entry.locator),
            })
    }
}
