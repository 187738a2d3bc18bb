//! Multi-source aggregation into a category rule set.
//!
//! Sources are already-fetched list texts. They are folded in the order
//! given, so the resulting set is deterministic: source order first, line
//! order within a source.

use cb_core::types::RuleSet;

use crate::parser::{parse_line, ParseOutcome};

/// Per-source parse tally, reported for operator visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTally {
    /// Lines examined.
    pub lines: usize,
    /// Rules contributed to the set.
    pub rules: usize,
}

/// Result of aggregating every source of one category.
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// Collected rules, in encounter order.
    pub rules: RuleSet,
    /// One tally per source, in input order.
    pub per_source: Vec<SourceTally>,
}

impl Aggregation {
    /// Total rules across all sources.
    pub fn total(&self) -> usize {
        self.rules.len()
    }
}

/// Parse one fetched list into `set`, returning the source tally.
///
/// Comments, metadata, and unsupported constructs are skipped; a malformed
/// line never fails the source.
pub fn append_source(set: &mut RuleSet, text: &str) -> SourceTally {
    let mut tally = SourceTally { lines: 0, rules: 0 };
    for line in text.lines() {
        tally.lines += 1;
        if let ParseOutcome::Parsed(rule) = parse_line(line) {
            set.push(rule);
            tally.rules += 1;
        }
    }
    log::debug!("parsed {} rules from {} lines", tally.rules, tally.lines);
    tally
}

/// Fold already-fetched source texts, in order, into one rule set.
pub fn aggregate<S: AsRef<str>>(sources: &[S]) -> Aggregation {
    let mut rules = RuleSet::new();
    let per_source = sources
        .iter()
        .map(|text| append_source(&mut rules, text.as_ref()))
        .collect();
    Aggregation { rules, per_source }
}
