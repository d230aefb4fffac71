// 测试 API 请求/响应类型
use repo_search_demo::api::{MatchResult, QueryInfo, SearchRequest, SearchResponse};
use repo_search_demo::query::QueryOptions;

fn main() {
    println!("=== API 类型功能测试 ===\n");

    // 测试1: SearchRequest 创建
    let request = SearchRequest::new("thyroid metabolism")
        .with_snippet_cap(3)
        .with_context_radius(2);
    let options = request.to_query_options(&QueryOptions::default());
    println!("1. SearchRequest:");
    println!("   query: {:?}", request.query);
    println!("   snippet_cap: {}, context_radius: {}\n", options.snippet_cap, options.context_radius);

    // 测试2: MatchResult 创建
    let result = MatchResult::new("a.md", "Thyroid Function")
        .with_snippets(vec![
            "<mark>Thyroid</mark> Function\n".to_string(),
            "\nThe <mark>thyroid</mark> regulates <mark>metabolism</mark>.\nMore text.".to_string(),
        ])
        .mark_truncated("... read more");
    println!("2. MatchResult:");
    println!("   document: {}", result.document_name);
    println!("   title: {}", result.title);
    println!("   real snippets: {}, truncated: {}\n", result.real_snippets().len(), result.truncated);

    // 测试3: SearchResponse 构建
    let query_info = QueryInfo::new("thyroid metabolism")
        .with_tokens(vec!["thyroid".to_string(), "metabolism".to_string()]);
    let response = SearchResponse::new(query_info, vec![result], 4).with_took(1);
    println!("3. SearchResponse:");
    println!("   total: {} / searched: {}", response.total, response.searched);
    println!("   took_ms: {}ms\n", response.took_ms);

    // 测试4: JSON 序列化
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("4. JSON 序列化:\n{}\n", json),
        Err(e) => println!("4. JSON 序列化失败: {}\n", e),
    }

    println!("=== 测试完成 ===");
}
