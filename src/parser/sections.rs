/// Horizontal rule between hexagrams.
const SEPARATOR: &str = "\n---\n";
/// A segment without this marker is front matter or an appendix.
const HEADER_MARKER: &str = "## 第";

/// Split a book into trimmed per-hexagram sections, in document order.
pub fn split_sections(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split(SEPARATOR)
        .filter(|s| s.contains(HEADER_MARKER))
        .map(|s| s.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_segments_without_header() {
        let text = "# 易经\n\n前言\n---\n## 第1卦 乾卦(乾为天) ䷀\n正文\n---\n附录";
        let sections = split_sections(text);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].starts_with("## 第1卦"));
        assert!(sections[0].ends_with("正文"));
    }

    #[test]
    fn keeps_document_order() {
        let text = "## 第2卦 坤卦(坤为地)\n\n---\n\n## 第1卦 乾卦(乾为天)\n";
        let sections = split_sections(text);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].contains("第2卦"));
        assert!(sections[1].contains("第1卦"));
    }

    #[test]
    fn crlf_line_endings() {
        let text = "## 第1卦 乾卦(乾为天)\r\n---\r\n## 第2卦 坤卦(坤为地)\r\n";
        assert_eq!(split_sections(text).len(), 2);
    }

    #[test]
    fn empty_document() {
        assert!(split_sections("").is_empty());
        assert!(split_sections("no hexagrams here\n---\nstill none").is_empty());
    }

    #[test]
    fn rule_must_be_on_its_own_line() {
        let text = "## 第1卦 乾卦(乾为天)\n文字---不是分隔\n";
        assert_eq!(split_sections(text).len(), 1);
    }
}
