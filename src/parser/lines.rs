use std::sync::LazyLock;

use regex::Regex;

use crate::records::YaoLine;

static YAO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([初九二三四五六上用]+)\*\*:\s*(.+)").unwrap());

const MAX_LINES: u8 = 6;
/// `用九` / `用六` are extra statements, not positions.
const USE_MARKER: &str = "用";
const XIANG_PREFIX: &str = "- 象曰:";
const TRANSLATION_PREFIX: &str = "- 译:";

/// Walk a section's trimmed lines and collect up to six line statements.
///
/// The commentary and translation are looked up at `i + 1` and `i + 2`
/// without consuming them; a wrong prefix there just means "absent".
pub fn extract_lines<S: AsRef<str>>(lines: &[S]) -> Vec<YaoLine> {
    let mut yaos = Vec::new();
    let mut position = 1u8;
    let mut i = 0;

    while i < lines.len() && position <= MAX_LINES {
        if let Some(caps) = YAO_RE.captures(lines[i].as_ref()) {
            let name = &caps[1];
            if !name.starts_with(USE_MARKER) {
                yaos.push(YaoLine {
                    position,
                    name: name.to_string(),
                    text: caps[2].trim().to_string(),
                    xiang_text: continuation(lines, i + 1, XIANG_PREFIX),
                    meaning: continuation(lines, i + 2, TRANSLATION_PREFIX),
                });
                position += 1;
            }
        }
        i += 1;
    }

    yaos
}

fn continuation<S: AsRef<str>>(lines: &[S], idx: usize, prefix: &str) -> String {
    lines
        .get(idx)
        .and_then(|l| l.as_ref().strip_prefix(prefix))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_with_commentary_and_translation() {
        let lines = [
            "**初九**: 潜龙勿用。",
            "- 象曰: 潜龙勿用，阳在下也。",
            "- 译: 龙潜伏在水中，暂时不要有所作为。",
        ];
        let yaos = extract_lines(&lines);
        assert_eq!(yaos.len(), 1);
        assert_eq!(yaos[0].position, 1);
        assert_eq!(yaos[0].name, "初九");
        assert_eq!(yaos[0].text, "潜龙勿用。");
        assert_eq!(yaos[0].xiang_text, "潜龙勿用，阳在下也。");
        assert_eq!(yaos[0].meaning, "龙潜伏在水中，暂时不要有所作为。");
    }

    #[test]
    fn use_label_does_not_take_a_slot() {
        let lines = [
            "**用六**: 利永贞。",
            "- 象曰: 用六永贞，以大终也。",
            "**初六**: 履霜，坚冰至。",
        ];
        let yaos = extract_lines(&lines);
        assert_eq!(yaos.len(), 1);
        assert_eq!(yaos[0].position, 1);
        assert_eq!(yaos[0].name, "初六");
    }

    #[test]
    fn stops_after_six() {
        let labels = ["初九", "九二", "九三", "九四", "九五", "上九", "用九", "初九"];
        let lines: Vec<String> = labels.iter().map(|l| format!("**{}**: 文", l)).collect();
        let yaos = extract_lines(&lines);
        assert_eq!(yaos.len(), 6);
        let positions: Vec<u8> = yaos.iter().map(|y| y.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(yaos[5].name, "上九");
    }

    #[test]
    fn use_label_before_sixth_does_not_block() {
        let lines = [
            "**初九**: a", "**用九**: x", "**九二**: b", "**九三**: c",
            "**九四**: d", "**九五**: e", "**上九**: f",
        ];
        let yaos = extract_lines(&lines);
        assert_eq!(yaos.len(), 6);
        assert!(yaos.iter().all(|y| !y.name.starts_with('用')));
    }

    #[test]
    fn shifted_continuations_are_absent() {
        let lines = ["**九二**: 见龙在田。", "", "- 象曰: 德施普也。", "- 译: 偏移"];
        let yaos = extract_lines(&lines);
        assert_eq!(yaos[0].xiang_text, "");
        assert_eq!(yaos[0].meaning, "");
    }

    #[test]
    fn translation_without_commentary() {
        let lines = ["**九三**: 君子终日乾乾。", "无关", "- 译: 终日勤勉。"];
        let yaos = extract_lines(&lines);
        assert_eq!(yaos[0].xiang_text, "");
        assert_eq!(yaos[0].meaning, "终日勤勉。");
    }

    #[test]
    fn out_of_range_lookahead() {
        let yaos = extract_lines(&["**上六**: 龙战于野。"]);
        assert_eq!(yaos.len(), 1);
        assert_eq!(yaos[0].xiang_text, "");
        assert_eq!(yaos[0].meaning, "");
    }

    #[test]
    fn field_labels_are_not_lines() {
        let lines = ["**卦辞**: 元亨利贞。", "**应用**: 大吉", "**爻辞**:"];
        assert!(extract_lines(&lines).is_empty());
    }
}
