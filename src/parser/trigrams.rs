use std::sync::LazyLock;

use regex::Regex;

use super::fields::Field;
use crate::trigram::{Trigram, GLYPHS};

static DIAGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"上([^☰☷☵☲☳☴☶☱]+)[☰☷☵☲☳☴☶☱]下([^☰☷☵☲☳☴☶☱]+)").unwrap()
});

/// Substituted when a diagram line has neither `上` nor `下`.
pub const DEFAULT_TRIGRAM: Trigram = Trigram::Qian;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Pattern,
    Split,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub upper: String,
    pub lower: String,
    pub strategy: Strategy,
}

/// Upper and lower trigram names from a diagram line such as `上坤☷下乾☰`.
pub fn decompose(diagram: &str) -> Decomposition {
    if let Some(caps) = DIAGRAM_RE.captures(diagram) {
        return Decomposition {
            upper: caps[1].trim().to_string(),
            lower: caps[2].trim().to_string(),
            strategy: Strategy::Pattern,
        };
    }

    let parts = diagram
        .strip_prefix(Field::Diagram.prefix())
        .unwrap_or(diagram)
        .trim();
    if parts.contains('上') && parts.contains('下') {
        let mut halves = parts.split('下');
        let upper = halves.next().unwrap_or_default().replace('上', "");
        let after = halves.next().unwrap_or_default();
        let lower = after.split(GLYPHS).next().unwrap_or_default();
        return Decomposition {
            upper: upper.trim().to_string(),
            lower: lower.trim().to_string(),
            strategy: Strategy::Split,
        };
    }

    Decomposition {
        upper: DEFAULT_TRIGRAM.name().to_string(),
        lower: DEFAULT_TRIGRAM.name().to_string(),
        strategy: Strategy::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_match() {
        let d = decompose("上坤☷下乾☰");
        assert_eq!(d.upper, "坤");
        assert_eq!(d.lower, "乾");
        assert_eq!(d.strategy, Strategy::Pattern);
    }

    #[test]
    fn pattern_tolerates_spaces() {
        let d = decompose("上 坎☵下 震☳");
        assert_eq!((d.upper.as_str(), d.lower.as_str()), ("坎", "震"));
    }

    #[test]
    fn split_when_glyph_missing_between() {
        let d = decompose("上离下兑☱");
        assert_eq!(d.strategy, Strategy::Split);
        assert_eq!(d.upper, "离");
        assert_eq!(d.lower, "兑");
    }

    #[test]
    fn split_strips_label_left_in_line() {
        let d = decompose("**卦象**: 上艮 下巽");
        assert_eq!(d.strategy, Strategy::Split);
        assert_eq!((d.upper.as_str(), d.lower.as_str()), ("艮", "巽"));
    }

    #[test]
    fn default_without_markers() {
        let d = decompose("乾☰乾☰");
        assert_eq!(d.strategy, Strategy::Default);
        assert_eq!(d.upper, "乾");
        assert_eq!(d.lower, "乾");

        let empty = decompose("");
        assert_eq!(empty.strategy, Strategy::Default);
    }

    #[test]
    fn one_marker_is_not_enough() {
        assert_eq!(decompose("上坤☷").strategy, Strategy::Default);
    }
}
