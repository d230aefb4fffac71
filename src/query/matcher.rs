// query/matcher.rs - 关键词匹配器
//! 每次搜索为每个关键词预编译一次大小写不敏感的正则

use regex::{Regex, RegexBuilder};

use super::types::ParsedQuery;

/// 单个关键词的匹配器
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    regex: Regex,
}

impl TokenMatcher {
    /// 关键词按字面量匹配（转义正则元字符）
    pub fn new(token: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex::escape(token))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// 用标记包裹所有匹配，保留原文的大小写
    pub fn highlight(&self, text: &str, open: &str, close: &str) -> String {
        self.regex
            .replace_all(text, |caps: &regex::Captures| format!("{}{}{}", open, &caps[0], close))
            .into_owned()
    }
}

/// 一次查询的全部匹配器
#[derive(Debug, Clone)]
pub struct TokenSet {
    matchers: Vec<TokenMatcher>,
}

impl TokenSet {
    pub fn compile(query: &ParsedQuery) -> Result<Self, regex::Error> {
        let matchers = query.tokens
            .iter()
            .map(|t| TokenMatcher::new(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// 文档级 AND：每个关键词都在文本某处出现
    pub fn all_match(&self, text: &str) -> bool {
        !self.matchers.is_empty() && self.matchers.iter().all(|m| m.is_match(text))
    }

    /// 命中行：任一关键词出现
    pub fn any_match(&self, line: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(line))
    }

    /// 按关键词输入顺序逐个高亮。
    /// 后面的关键词可能再次包裹前面已经插入的标记，这里不做修正。
    pub fn highlight(&self, text: &str, open: &str, close: &str) -> String {
        self.matchers
            .iter()
            .fold(text.to_string(), |acc, m| m.highlight(&acc, open, close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryParser;

    fn token_set(query: &str) -> TokenSet {
        TokenSet::compile(&QueryParser::new().parse(query).unwrap()).unwrap()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let m = TokenMatcher::new("THYROID").unwrap();
        assert!(m.is_match("the thyroid gland"));
        assert!(m.is_match("Thyroid Function"));
        assert!(!m.is_match("thyro id"));
    }

    #[test]
    fn test_token_is_literal() {
        let m = TokenMatcher::new("a.b").unwrap();
        assert!(m.is_match("see a.b here"));
        assert!(!m.is_match("axb"));

        let m = TokenMatcher::new("(vitamin").unwrap();
        assert!(m.is_match("some (Vitamin E)"));
    }

    #[test]
    fn test_all_and_any() {
        let set = token_set("thyroid metabolism");
        assert_eq!(set.len(), 2);
        assert!(set.all_match("Thyroid\nsomething\nmetabolism"));
        assert!(!set.all_match("Thyroid only"));
        assert!(set.any_match("metabolism line"));
        assert!(!set.any_match("unrelated"));
    }

    #[test]
    fn test_highlight_every_occurrence() {
        let set = token_set("sugar");
        let out = set.highlight("Sugar and sugar, SUGAR.", "<mark>", "</mark>");
        assert_eq!(out, "<mark>Sugar</mark> and <mark>sugar</mark>, <mark>SUGAR</mark>.");
    }

    #[test]
    fn test_highlight_multiple_tokens_in_order() {
        let set = token_set("thyroid metabolism");
        let out = set.highlight("The thyroid regulates metabolism.", "<mark>", "</mark>");
        assert_eq!(out, "The <mark>thyroid</mark> regulates <mark>metabolism</mark>.");
    }

    #[test]
    fn test_highlight_rewraps_overlapping_tokens() {
        // 第二个关键词会命中第一次插入的标记内部的文本
        let set = token_set("thyroid thy");
        let out = set.highlight("thyroid", "<mark>", "</mark>");
        assert_eq!(out, "<mark><mark>thy</mark>roid</mark>");
    }
}
