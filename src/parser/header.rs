use std::sync::LazyLock;

use regex::Regex;

use crate::error::SkipReason;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##\s*第(\d+)卦\s+(\S+)\(([^)]+)\)\s*(\S*)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u32,
    /// Short code before the parentheses, e.g. `乾卦`.
    pub short_name: String,
    /// Canonical name inside the parentheses, e.g. `乾为天`.
    pub name: String,
    pub glyph: String,
}

/// Parse a title line like `## 第1卦 乾卦(乾为天) ䷀`.
pub fn parse_header(line: &str) -> Result<Header, SkipReason> {
    let caps = TITLE_RE
        .captures(line)
        .ok_or_else(|| SkipReason::MalformedHeader {
            line: line.to_string(),
        })?;

    let raw_id = &caps[1];
    let id = raw_id.parse::<u32>().map_err(|source| SkipReason::InvalidId {
        raw: raw_id.to_string(),
        source,
    })?;

    Ok(Header {
        id,
        short_name: caps[2].to_string(),
        name: caps[3].to_string(),
        glyph: caps[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_title() {
        let h = parse_header("## 第1卦 乾卦(乾为天) ䷀").unwrap();
        assert_eq!(h.id, 1);
        assert_eq!(h.short_name, "乾卦");
        assert_eq!(h.name, "乾为天");
        assert_eq!(h.glyph, "䷀");
    }

    #[test]
    fn glyph_is_optional() {
        let h = parse_header("##第64卦 未济卦(火水未济)").unwrap();
        assert_eq!(h.id, 64);
        assert_eq!(h.name, "火水未济");
        assert!(h.glyph.is_empty());
    }

    #[test]
    fn missing_parentheses_is_malformed() {
        let err = parse_header("## 第3卦 屯卦 水雷屯").unwrap_err();
        assert!(matches!(err, SkipReason::MalformedHeader { line } if line.contains("屯卦")));
    }

    #[test]
    fn overflowing_id_is_reported() {
        let err = parse_header("## 第99999999999卦 乾卦(乾为天)").unwrap_err();
        assert!(matches!(err, SkipReason::InvalidId { raw, .. } if raw == "99999999999"));
    }
}
