//! CrossRef dialect.

use crate::dialect::{DatabaseDialect, base_form};
use crate::plan::SearchTerm;

/// CrossRef query syntax.
///
/// CrossRef's boolean handling is fuzzy, so groups are always wrapped in
/// parentheses (even single terms) to give its engine the clearest grouping
/// context.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossRefDialect;

impl DatabaseDialect for CrossRefDialect {
    fn name(&self) -> &'static str {
        "crossref"
    }

    fn format_term(&self, term: &SearchTerm) -> String {
        base_form(term)
    }

    fn join_or(&self, terms: &[String]) -> String {
        if terms.is_empty() {
            return String::new();
        }
        format!("({})", terms.join(" OR "))
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
    fn test_single_term_still_wrapped() {
        let terms = vec!["aspirin".to_string()];
        assert_eq!(CrossRefDialect.join_or(&terms), "(aspirin)");
    }

    #[test]
    fn test_multi_term_group() {
        let terms = vec!["aspirin".to_string(), "\"acetylsalicylic acid\"".to_string()];
        assert_eq!(
            CrossRefDialect.join_or(&terms),
            "(aspirin OR \"acetylsalicylic acid\")"
        );
    }

    #[test]
    fn test_no_field_tags() {
        let term = SearchTerm::new("stroke", FieldTag::ControlledVocabulary);
        assert_eq!(CrossRefDialect.format_term(&term), "stroke");
    }
}
