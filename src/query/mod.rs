// query/mod.rs - 查询模块
//! 查询解析和关键词匹配

mod parser;
pub mod matcher;
pub mod types;

pub use parser::*;
pub use matcher::*;
pub use types::*;
