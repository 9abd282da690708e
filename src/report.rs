use std::collections::BTreeMap;
use std::fmt;

use crate::records::HexagramRecord;
use crate::trigram::Trigram;

const YAOS_PER_HEXAGRAM: usize = 6;

/// Completeness issue across the parsed collection. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    CountMismatch { expected: u32, found: usize },
    DuplicateId { id: u32, occurrences: usize },
    IdOutOfRange { id: u32, max: u32 },
    MissingYaos { id: u32, found: usize },
    UnknownTrigram { id: u32, name: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::CountMismatch { expected, found } => {
                write!(f, "expected {} hexagrams, found {}", expected, found)
            }
            Finding::DuplicateId { id, occurrences } => {
                write!(f, "id {} appears {} times", id, occurrences)
            }
            Finding::IdOutOfRange { id, max } => write!(f, "id {} outside 1..={}", id, max),
            Finding::MissingYaos { id, found } => {
                write!(f, "id {} has {} of {} yaos", id, found, YAOS_PER_HEXAGRAM)
            }
            Finding::UnknownTrigram { id, name } => {
                write!(f, "id {} uses unknown trigram '{}'", id, name)
            }
        }
    }
}

pub fn check_collection(records: &[HexagramRecord], expected: u32) -> Vec<Finding> {
    let mut findings = Vec::new();

    if records.len() != expected as usize {
        findings.push(Finding::CountMismatch {
            expected,
            found: records.len(),
        });
    }

    let mut seen: BTreeMap<u32, usize> = BTreeMap::new();
    for r in records {
        *seen.entry(r.id).or_default() += 1;
    }
    findings.extend(
        seen.into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(id, occurrences)| Finding::DuplicateId { id, occurrences }),
    );

    for r in records {
        if r.id == 0 || r.id > expected {
            findings.push(Finding::IdOutOfRange {
                id: r.id,
                max: expected,
            });
        }
        if r.yaos.len() < YAOS_PER_HEXAGRAM {
            findings.push(Finding::MissingYaos {
                id: r.id,
                found: r.yaos.len(),
            });
        }
        for name in [&r.upper_trigram, &r.lower_trigram] {
            if Trigram::from_name(name).is_none() {
                findings.push(Finding::UnknownTrigram {
                    id: r.id,
                    name: name.clone(),
                });
            }
        }
    }

    findings
}

/// Line-code histogram by lower trigram, for the `check` summary.
pub fn lower_trigram_counts(records: &[HexagramRecord]) -> Vec<(Trigram, usize)> {
    Trigram::ALL
        .into_iter()
        .map(|t| {
            let n = records
                .iter()
                .filter(|r| Trigram::from_bits(&r.lines[..3.min(r.lines.len())]) == Some(t))
                .count();
            (t, n)
        })
        .collect()
}
