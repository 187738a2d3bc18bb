//! cbgen Filter List Compiler
//!
//! Translates Adblock Plus filter-list text into WebKit content-blocker
//! rules: a per-line parser for the supported rule subset and an aggregator
//! that folds multiple fetched lists into one ordered rule set.

pub mod aggregate;
pub mod parser;

pub use aggregate::{aggregate, append_source, Aggregation, SourceTally};
pub use parser::{parse_line, parse_list, ParseOutcome};
