// 配置模块 - 支持外部配置文件
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 配置文件路径
const CONFIG_FILE: &str = "./config.toml";

// ============== 配置结构体 ==============

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub loader: LoaderConfig,
    pub display: DisplayConfig,
}

/// 远程仓库 (GitHub contents API)
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    /// 仓库内的目录，空字符串表示根目录
    pub path: String,
    pub branch: String,
    /// 可选的访问令牌
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoaderConfig {
    /// 支持的文件扩展名，空列表表示不过滤
    pub supported_extensions: Vec<String>,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// 每个文档最多返回的片段数
    pub snippet_cap: usize,
    /// 命中行前后各取几行上下文
    pub context_radius: usize,
    pub highlight_open: String,
    pub highlight_close: String,
    /// 片段被截断时追加的提示
    pub read_more_text: String,
}

// ============== 默认配置 ==============

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            owner: "rust-lang".to_string(),
            repo: "book".to_string(),
            path: "src".to_string(),
            branch: "main".to_string(),
            token: None,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            supported_extensions: vec!["md".to_string(), "txt".to_string()],
            timeout_secs: 30,
            user_agent: concat!("repo_search_demo/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            snippet_cap: crate::query::DEFAULT_SNIPPET_CAP,
            context_radius: crate::query::DEFAULT_CONTEXT_RADIUS,
            highlight_open: crate::query::HIGHLIGHT_OPEN.to_string(),
            highlight_close: crate::query::HIGHLIGHT_CLOSE.to_string(),
            read_more_text: crate::query::READ_MORE_TEXT.to_string(),
        }
    }
}

// ============== 配置加载 ==============

impl AppConfig {
    /// 从配置文件加载，失败则使用默认配置
    pub fn load() -> Self {
        Self::load_from_file(CONFIG_FILE).unwrap_or_else(|e| {
            log::warn!("[Config] 无法加载配置文件 '{}': {}", CONFIG_FILE, e);
            log::warn!("[Config] 使用默认配置");
            Self::default()
        })
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// 生成默认配置文件
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
        let default_content = include_str!("../config.toml");
        fs::write(path, default_content)?;
        Ok(())
    }

    /// 仓库描述，用于日志和提示
    pub fn source_label(&self) -> String {
        let s = &self.source;
        if s.path.is_empty() {
            format!("{}/{}@{}", s.owner, s.repo, s.branch)
        } else {
            format!("{}/{}/{}@{}", s.owner, s.repo, s.path, s.branch)
        }
    }
}

// ============== 全局配置实例 ==============

/// 全局配置实例 (懒加载)
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::load();
    log::info!("[Config] 配置已加载: {}", config.source_label());
    config
});
