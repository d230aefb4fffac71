// models.rs - 内存中的文档与仓库列表条目
use serde::{Deserialize, Serialize};

/// 已加载的文档，加载完成后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }
}

/// 仓库列表中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// 源端标识（GitHub 为 blob sha）
    pub id: String,
    /// 获取内容的地址
    pub locator: String,
    pub name: String,
}

impl ListingEntry {
    pub fn new(id: impl Into<String>, locator: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), locator: locator.into(), name: name.into() }
    }

    /// 小写扩展名（不含点号）
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}
