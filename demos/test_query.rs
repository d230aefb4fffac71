// 测试查询解析和关键词匹配
use repo_search_demo::query::{QueryParser, TokenSet};

fn main() {
    let parser = QueryParser::new();

    println!("=== 查询解析器功能测试 ===\n");

    // 测试1: 单个关键词
    let q1 = parser.parse("thyroid").unwrap();
    println!("1. 单个关键词: \"thyroid\"");
    println!("   关键词: {:?}\n", q1.tokens);

    // 测试2: 多个关键词（文档级 AND）
    let q2 = parser.parse("  thyroid   metabolism ").unwrap();
    println!("2. 多个关键词: \"  thyroid   metabolism \"");
    println!("   原始文本: {:?}", q2.raw_text);
    println!("   关键词: {:?}\n", q2.tokens);

    // 测试3: 空查询
    println!("3. 空查询: \"   \"");
    match parser.parse("   ") {
        Ok(q) => println!("   意外成功: {:?}\n", q),
        Err(e) => println!("   ✓ 拒绝: {}\n", e),
    }

    // 测试4: 高亮
    let set = TokenSet::compile(&q2).unwrap();
    let line = "The Thyroid regulates METABOLISM.";
    println!("4. 高亮: {:?}", line);
    println!("   任一命中: {}", set.any_match(line));
    println!("   结果: {}\n", set.highlight(line, "<mark>", "</mark>"));

    println!("=== 测试完成 ===");
}
