pub mod classify;
pub mod fields;
pub mod header;
pub mod lines;
pub mod sections;
pub mod trigrams;

use tracing::{debug, warn};

use crate::error::{ParseWarning, SkipReason};
use crate::records::HexagramRecord;
use crate::trigram::encode_lines;
use fields::{find_field, Field};
use trigrams::Strategy;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Result of parsing one section. `index` is the 0-based section position.
#[derive(Debug)]
pub enum SectionOutcome {
    Parsed {
        index: usize,
        record: HexagramRecord,
        warnings: Vec<ParseWarning>,
    },
    Skipped {
        index: usize,
        reason: SkipReason,
    },
}

/// Something worth telling the user about, tied to a section.
#[derive(Debug)]
pub enum Diagnostic {
    Skipped { index: usize, reason: SkipReason },
    Warning { index: usize, warning: ParseWarning },
}

/// Parse one trimmed section into a record.
pub fn parse_section(index: usize, section: &str) -> SectionOutcome {
    let lines: Vec<&str> = section.split('\n').map(str::trim).collect();
    let title = lines.first().copied().unwrap_or_default();

    let header = match header::parse_header(title) {
        Ok(h) => h,
        Err(reason) => {
            warn!(section = index + 1, %reason, "skipping section");
            return SectionOutcome::Skipped { index, reason };
        }
    };

    let mut warnings = Vec::new();
    let diagram = trigrams::decompose(&find_field(&lines, Field::Diagram));
    if diagram.strategy == Strategy::Default {
        let warning = ParseWarning::DefaultTrigrams {
            id: header.id,
            fallback: trigrams::DEFAULT_TRIGRAM.name(),
        };
        warn!(id = header.id, "{}", warning);
        warnings.push(warning);
    }

    let application = find_field(&lines, Field::Application);
    let aspects = classify::split_aspects(&application);
    let yaos = lines::extract_lines(&lines);

    debug!(
        id = header.id,
        short_name = %header.short_name,
        upper = %diagram.upper,
        lower = %diagram.lower,
        yaos = yaos.len(),
        "parsed hexagram"
    );

    let record = HexagramRecord {
        id: header.id,
        lines: encode_lines(&diagram.lower, &diagram.upper),
        upper_trigram: diagram.upper,
        lower_trigram: diagram.lower,
        unicode: header.glyph,
        gua_ci: find_field(&lines, Field::Judgment),
        xiang_ci: find_field(&lines, Field::Image),
        tuan_ci: find_field(&lines, Field::Commentary),
        meaning: format!("{}的卦义解读", header.name),
        name: header.name,
        fortune: classify::classify_fortune(&application),
        career: aspects.career,
        love: aspects.love,
        health: aspects.health,
        wealth: aspects.wealth,
        application,
        yaos,
    };

    SectionOutcome::Parsed {
        index,
        record,
        warnings,
    }
}

/// Parse a slice of sections whose first element sits at `base_index`.
#[cfg(feature = "rayon")]
pub fn parse_sections(base_index: usize, sections: &[String]) -> Vec<SectionOutcome> {
    sections
        .par_iter()
        .enumerate()
        .map(|(i, s)| parse_section(base_index + i, s))
        .collect()
}

#[cfg(not(feature = "rayon"))]
pub fn parse_sections(base_index: usize, sections: &[String]) -> Vec<SectionOutcome> {
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| parse_section(base_index + i, s))
        .collect()
}

/// Segment and parse a whole book.
pub fn parse_document(text: &str) -> Vec<SectionOutcome> {
    let sections = sections::split_sections(text);
    parse_sections(0, &sections)
}

/// Split outcomes into records (document order) and diagnostics.
pub fn partition(outcomes: Vec<SectionOutcome>) -> (Vec<HexagramRecord>, Vec<Diagnostic>) {
    let mut records = Vec::with_capacity(outcomes.len());
    let mut diagnostics = Vec::new();
    for outcome in outcomes {
        match outcome {
            SectionOutcome::Parsed {
                index,
                record,
                warnings,
            } => {
                diagnostics.extend(
                    warnings
                        .into_iter()
                        .map(|warning| Diagnostic::Warning { index, warning }),
                );
                records.push(record);
            }
            SectionOutcome::Skipped { index, reason } => {
                diagnostics.push(Diagnostic::Skipped { index, reason });
            }
        }
    }
    (records, diagnostics)
}

// ── Tests ──
