//! Semantic Scholar dialect.

use crate::dialect::{DatabaseDialect, base_form};
use crate::plan::SearchTerm;

/// Semantic Scholar Graph API syntax.
///
/// The keyword search endpoint accepts standard textual AND/OR/NOT with
/// quoted phrases, so this dialect emits plain boolean strings with no
/// field tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticScholarDialect;

impl DatabaseDialect for SemanticScholarDialect {
    fn name(&self) -> &'static str {
        "semanticscholar"
    }

    fn format_term(&self, term: &SearchTerm) -> String {
        base_form(term)
    }

    fn join_or(&self, terms: &[String]) -> String {
        match terms {
            [] => String::new(),
            [single] => single.clone(),
            _ => format!("({})", terms.join(" OR ")),
        }
    }

    fn join_and(&self, groups: &[String]) -> String {
        groups.join(" AND ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::FieldTag;

    #[test]
    fn test_phrase_quoting() {
        let term = SearchTerm::new("retrieval augmented generation", FieldTag::Keyword);
        assert_eq!(
            SemanticScholarDialect.format_term(&term),
            "\"retrieval augmented generation\""
        );
    }

    #[test]
    fn test_single_term_unwrapped() {
        let terms = vec!["rag".to_string()];
        assert_eq!(SemanticScholarDialect.join_or(&terms), "rag");
    }
}
