// extract.rs - 从命中行提取标题和上下文片段
use std::ops::RangeInclusive;

/// 向上查找标题时跳过的行：空行、图片引用、裸链接
fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with("![") || line.starts_with("http")
}

/// 从命中行（含）开始向上查找第一条正文行，清理后作为标题。
/// 找不到时返回空字符串，由调用方回退到文档名。
pub fn derive_title(lines: &[&str], hit: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let hit = hit.min(lines.len() - 1);

    lines[..=hit]
        .iter()
        .rev()
        .map(|line| line.trim())
        .find(|line| !is_skippable(line))
        .map(clean_title)
        .unwrap_or_default()
}

/// 去掉标题标记和两侧的星号，在第一个 `**` 或 `.` 处截断
pub fn clean_title(line: &str) -> String {
    let line = line.trim().trim_start_matches('#').trim().trim_matches('*');

    let cut = [line.find("**"), line.find('.')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());

    line[..cut].trim().trim_matches('*').trim().to_string()
}

/// 命中行的上下文窗口（闭区间），在文档边界处截断
pub fn context_range(line_count: usize, hit: usize, radius: usize) -> RangeInclusive<usize> {
    let last = line_count.saturating_sub(1);
    let hit = hit.min(last);
    hit.saturating_sub(radius)..=hit.saturating_add(radius).min(last)
}

/// 拼接上下文窗口内的原始行
pub fn context_text(lines: &[&str], hit: usize, radius: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    lines[context_range(lines.len(), hit, radius)].join("\n")
}

/// 去掉高亮标记，还原片段原文
pub fn strip_highlight(text: &str, open: &str, close: &str) -> String {
    text.replace(open, "").replace(close, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_hit_line() {
        let lines = ["Thyroid Function", "", "The thyroid regulates metabolism.", "More text."];
        assert_eq!(derive_title(&lines, 0), "Thyroid Function");
        assert_eq!(derive_title(&lines, 2), "The thyroid regulates metabolism");
    }

    #[test]
    fn test_title_skips_images_links_and_blanks() {
        let lines = [
            "**Aspirin and the brain**",
            "",
            "https://example.com/aspirin",
            "   ",
            "![diagram](img.png)",
        ];
        assert_eq!(derive_title(&lines, 4), "Aspirin and the brain");
        assert_eq!(derive_title(&lines, 2), "Aspirin and the brain");
    }

    #[test]
    fn test_title_drops_heading_markers() {
        let lines = ["# Thyroid Function", "", "sugar"];
        assert_eq!(derive_title(&lines, 0), "Thyroid Function");
        assert_eq!(derive_title(&["### **Aspirin** notes", ""], 1), "Aspirin");
    }

    #[test]
    fn test_title_empty_when_nothing_found() {
        let lines = ["", "![img](a.png)", "http://x.y"];
        assert_eq!(derive_title(&lines, 2), "");
        assert_eq!(derive_title(&[], 0), "");
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("**Bold** and more. Rest"), "Bold");
        assert_eq!(clean_title("Progesterone. Protective"), "Progesterone");
        assert_eq!(clean_title("Estrogen **excess** effects"), "Estrogen");
        assert_eq!(clean_title("## Heading text"), "Heading text");
        assert_eq!(clean_title("*italic title*"), "italic title");
        assert_eq!(clean_title("Plain line"), "Plain line");
    }

    #[test]
    fn test_context_range_bounds() {
        assert_eq!(context_range(4, 0, 1), 0..=1);
        assert_eq!(context_range(4, 2, 1), 1..=3);
        assert_eq!(context_range(4, 3, 1), 2..=3);
        assert_eq!(context_range(1, 0, 1), 0..=0);
        assert_eq!(context_range(10, 5, 2), 3..=7);
        assert_eq!(context_range(10, 5, 0), 5..=5);
    }

    #[test]
    fn test_context_range_never_out_of_bounds() {
        for n in 1..8 {
            for i in 0..n {
                for radius in 0..4 {
                    let range = context_range(n, i, radius);
                    assert_eq!(*range.start(), i.saturating_sub(radius));
                    assert_eq!(*range.end(), (i + radius).min(n - 1));
                    assert!(range.contains(&i));
                }
            }
        }
    }

    #[test]
    fn test_context_text() {
        let lines = ["a", "b", "c", "d"];
        assert_eq!(context_text(&lines, 0, 1), "a\nb");
        assert_eq!(context_text(&lines, 2, 1), "b\nc\nd");
        assert_eq!(context_text(&[], 0, 1), "");
    }

    #[test]
    fn test_strip_highlight() {
        let text = "The <mark>thyroid</mark> and <mark>Thyroid</mark>";
        assert_eq!(strip_highlight(text, "<mark>", "</mark>"), "The thyroid and Thyroid");
    }
}
