// src/lib.rs
pub mod config;
pub mod models;
pub mod extract;
pub mod query;
pub mod loader;
pub mod engine;
pub mod api;

pub use config::*;
pub use models::*;
pub use extract::*;
pub use loader::{ContentLoader, ContentSource, LoadError, LoadResult, ProgressSink};
pub use engine::{search, SearchEngine, SearchEngineBuilder, EngineError, EngineResult};
pub use api::{MatchResult, SearchRequest, SearchResponse};
