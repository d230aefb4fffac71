// 测试 SearchEngine（内存数据源，无需网络）
use repo_search_demo::engine::SearchEngineBuilder;
use repo_search_demo::api::SearchRequest;
use repo_search_demo::loader::{ContentLoader, MemorySource};

fn main() {
    println!("=== SearchEngine 功能测试 ===\n");

    println!("1. 加载内存文档...");
    let source = MemorySource::new()
        .with_file("thyroid.md", "Thyroid Function\n\nThe thyroid regulates metabolism.\nMore text.")
        .with_file("sugar.md", "**Sugar** and stress.\nSugar lowers adrenaline.\nsugar\nsugar\nsugar\nsugar")
        .with_file("logo.png", "not text");
    let loader = ContentLoader::new(source).with_extensions(["md"]);
    let mut progress = |message: &str| println!("   [加载] {}", message);
    let documents = match loader.load(&mut progress) {
        Ok(docs) => docs,
        Err(e) => {
            println!("   ✗ 加载失败: {}", e);
            return;
        }
    };
    println!("   ✓ 文档数: {}\n", documents.len());

    println!("2. 创建 SearchEngine...");
    let engine = match SearchEngineBuilder::new().build() {
        Ok(engine) => engine,
        Err(e) => {
            println!("   ✗ 引擎创建失败: {}", e);
            return;
        }
    };
    println!("   ✓ 片段上限: {}\n", engine.options().snippet_cap);

    for (i, query) in ["thyroid", "thyroid metabolism", "sugar", "zzz_no_match", "  "].iter().enumerate() {
        println!("{}. 搜索 {:?}...", i + 3, query);
        match engine.execute(&documents, &SearchRequest::new(*query)) {
            Ok(response) => {
                println!("   ✓ 结果数: {} ({}ms)", response.total, response.took_ms);
                for result in &response.results {
                    println!("   ✓ {} - {}", result.document_name, result.title);
                    for snippet in &result.snippets {
                        println!("      {:?}", snippet);
                    }
                }
                println!();
            }
            Err(e) => println!("   ✗ 搜索失败: {}\n", e),
        }
    }

    println!("=== 测试完成 ===");
}
