//! Scopus dialect.

use crate::dialect::{DatabaseDialect, base_form};
use crate::plan::SearchTerm;

/// Scopus syntax.
///
/// Rules:
/// - Phrases use double quotes: `"machine learning"`
/// - Field scope is carried by a single `TITLE-ABS-KEY(...)` wrapper per
///   concept block, never one wrapper per term
/// - Exclusions use `AND NOT TITLE-ABS-KEY(...)`
///
/// Example:
/// `TITLE-ABS-KEY("deep learning" OR "neural networks") AND TITLE-ABS-KEY(diabetes)`
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopusDialect;

impl DatabaseDialect for ScopusDialect {
    fn name(&self) -> &'static str {
        "scopus"
    }

    /// Per-term formatting is quoting only; the wrapper is added by
    /// [`ScopusDialect::join_or`].
    fn format_term(&self, term: &SearchTerm) -> String {
        base_form(term)
    }

    fn join_or(&self, terms: &[String]) -> String {
        if terms.is_empty() {
            return String::new();
        }
        format!("TITLE-ABS-KEY({})", terms.join(" OR "))
    }

    fn join_and(&self, groups: &[String]) -> String {
        groups.join(" AND ")
    }

    /// Scopus exclusion syntax carries its own leading AND.
    fn format_not(&self, excluded: &[String]) -> String {
        if excluded.is_empty() {
            return String::new();
        }
        format!("AND NOT TITLE-ABS-KEY({})", excluded.join(" OR "))
    }
}
