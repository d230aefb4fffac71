// loader/github.rs - GitHub contents API 内容源
//! 列表: GET {api_base}/repos/{owner}/{repo}/contents/{path}?ref={branch}
//! 内容: GET download_url
//!
//! 任何非 2xx 状态或网络错误都视为该次请求失败。

use std::time::Duration;

use serde::Deserialize;

use crate::config::{AppConfig, SourceConfig};
use crate::models::ListingEntry;

use super::{ContentSource, LoadError, LoadResult};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// contents API 返回的一项
#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    sha: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

impl ContentItem {
    fn into_entry(self) -> Option<ListingEntry> {
        if self.kind != "file" {
            return None;
        }
        let url = self.download_url?;
        Some(ListingEntry::new(self.sha, url, self.name))
    }
}

pub struct GitHubSource {
    agent: ureq::Agent,
    source: SourceConfig,
}

impl GitHubSource {
    pub fn new(source: SourceConfig, timeout: Duration, user_agent: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build();
        Self { agent, source }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.source.clone(),
            Duration::from_secs(config.loader.timeout_secs),
            &config.loader.user_agent,
        )
    }

    pub fn listing_url(&self) -> String {
        let s = &self.source;
        let base = format!(
            "{}/repos/{}/{}/contents",
            s.api_base.trim_end_matches('/'),
            s.owner,
            s.repo
        );
        let path = s.path.trim_matches('/');
        if path.is_empty() { base } else { format!("{}/{}", base, path) }
    }

    fn get(&self, url: &str, api: bool) -> Result<ureq::Response, String> {
        let mut request = self.agent.get(url);
        if api {
            request = request.set("Accept", GITHUB_ACCEPT);
            if !self.source.branch.is_empty() {
                request = request.query("ref", &self.source.branch);
            }
            if let Some(token) = &self.source.token {
                request = request.set("Authorization", &format!("Bearer {}", token));
            }
        }

        match request.call() {
            Ok(response) if (200..300).contains(&response.status()) => Ok(response),
            Ok(response) => Err(format!("HTTP {} from {}", response.status(), url)),
            Err(ureq::Error::Status(code, _)) => Err(format!("HTTP {} from {}", code, url)),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl ContentSource for GitHubSource {
    fn list(&self) -> LoadResult<Vec<ListingEntry>> {
        let url = self.listing_url();
        log::debug!("[GitHub] 列表: {}", url);

        let items: Vec<ContentItem> = self
            .get(&url, true)
            .map_err(LoadError::Listing)?
            .into_json()
            .map_err(|e| LoadError::Listing(format!("invalid listing from {}: {}", url, e)))?;

        Ok(items.into_iter().filter_map(ContentItem::into_entry).collect())
    }

    fn fetch(&self, entry: &ListingEntry) -> LoadResult<String> {
        let fetch_error = |reason: String| LoadError::Fetch {
            name: entry.name.clone(),
            reason,
        };

        self.get(&entry.locator, false)
            .map_err(fetch_error)?
            .into_string()
            .map_err(|e| fetch_error(e.to_string()))
    }
}
