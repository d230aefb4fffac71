// main.rs
use std::io::{self, Write};

use anyhow::{Context, Result};

use repo_search_demo::api::{SearchRequest, SearchResponse};
use repo_search_demo::config::{AppConfig, CONFIG};
use repo_search_demo::engine::{EngineError, SearchEngineBuilder};
use repo_search_demo::loader::{ContentLoader, GitHubSource};

fn main() -> Result<()> {
    env_logger::init();

    let config: &AppConfig = &CONFIG;

    println!("--- 仓库文档搜索 ---");
    println!(" [加载] 数据源: {}", config.source_label());

    // 1. 加载文档（任何失败都直接退出，不进入搜索）
    let loader = ContentLoader::new(GitHubSource::from_config(config))
        .with_extensions(&config.loader.supported_extensions);
    let mut progress = |message: &str| println!(" [加载] {}", message);
    let documents = loader
        .load(&mut progress)
        .with_context(|| format!("无法加载 {}", config.source_label()))?;

    // 2. 构建搜索引擎
    let engine = SearchEngineBuilder::from_config(config)
        .build()
        .context("搜索配置无效")?;

    println!(" [就绪] 已加载 {} 个文档", documents.len());
    println!(" [前台] 输入关键词进行搜索 (输入 'quit' 退出)");

    // 3. 主循环：读取查询并渲染结果
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input == "quit" || input == "exit" {
            break;
        }

        match engine.execute(&documents, &SearchRequest::new(input)) {
            Ok(response) => render(&response, &config.display.highlight_open, &config.display.highlight_close),
            Err(EngineError::EmptyQuery) => println!("请输入关键词"),
            Err(e) => println!("搜索出错: {}", e),
        }
    }

    Ok(())
}

/// 终端渲染：高亮标记换成方括号
fn render(response: &SearchResponse, open: &str, close: &str) {
    if response.is_empty() {
        println!("没有找到结果");
        return;
    }

    println!(
        "找到 {} / {} 个文档 ({}ms)",
        response.total, response.searched, response.took_ms
    );
    for result in &response.results {
        println!("\n== {} ({})", result.title, result.document_name);
        for snippet in result.real_snippets() {
            let text = snippet.replace(open, "[").replace(close, "]");
            for line in text.lines() {
                println!("   | {}", line);
            }
            println!("   ---");
        }
        if result.truncated {
            if let Some(more) = result.snippets.last() {
                println!("   {}", more);
            }
        }
    }
}
