//! PubMed/MEDLINE dialect.

use crate::dialect::{DatabaseDialect, base_form};
use crate::plan::{FieldTag, SearchTerm};

/// PubMed/MEDLINE syntax.
///
/// Rules:
/// - Phrases use double quotes: `"machine learning"`
/// - Field tags use square brackets: `[Title/Abstract]`, `[MeSH Terms]`
/// - OR groups use parentheses, single terms are left unwrapped
/// - Concept blocks are joined with a newline-separated AND so the query
///   stays readable in the PubMed search box
///
/// Example:
/// `("heart attack"[Title/Abstract] OR "myocardial infarction"[MeSH Terms])`
#[derive(Debug, Clone, Copy, Default)]
pub struct PubMedDialect;

impl DatabaseDialect for PubMedDialect {
    fn name(&self) -> &'static str {
        "pubmed"
    }

    fn format_term(&self, term: &SearchTerm) -> String {
        let base = base_form(term);
        if base.is_empty() {
            return base;
        }
        match term.field_tag {
            FieldTag::ControlledVocabulary => format!("{base}[MeSH Terms]"),
            FieldTag::Keyword => format!("{base}[Title/Abstract]"),
            FieldTag::AllFields => format!("{base}[All Fields]"),
        }
    }

    fn join_or(&self, terms: &[String]) -> String {
        match terms {
            [] => String::new(),
            [single] => single.clone(),
            _ => format!("({})", terms.join(" OR ")),
        }
    }

    fn join_and(&self, groups: &[String]) -> String {
        groups.join("\nAND\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controlled_vocabulary_maps_to_mesh() {
        let term = SearchTerm::new("myocardial infarction", FieldTag::ControlledVocabulary);
        assert_eq!(
            PubMedDialect.format_term(&term),
            "\"myocardial infarction\"[MeSH Terms]"
        );
    }

    #[test]
    fn test_keyword_maps_to_title_abstract() {
        let term = SearchTerm::new("aspirin", FieldTag::Keyword);
        assert_eq!(PubMedDialect.format_term(&term), "aspirin[Title/Abstract]");
    }

    #[test]
    fn test_all_fields_tag() {
        let term = SearchTerm::new("stroke", FieldTag::AllFields);
        assert_eq!(PubMedDialect.format_term(&term), "stroke[All Fields]");
    }

    #[test]
    fn test_single_term_group_unwrapped() {
        let terms = vec!["diabetes[Title/Abstract]".to_string()];
        assert_eq!(PubMedDialect.join_or(&terms), "diabetes[Title/Abstract]");
    }

    #[test]
    fn test_multi_term_group_parenthesized() {
        let terms = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(PubMedDialect.join_or(&terms), "(a OR b OR c)");
    }

    #[test]
    fn test_blocks_joined_with_newline_and() {
        let groups = vec!["(a OR b)".to_string(), "c".to_string()];
        assert_eq!(PubMedDialect.join_and(&groups), "(a OR b)\nAND\nc");
    }

    #[test]
    fn test_empty_text_formats_to_empty() {
        let term = SearchTerm::new("  ", FieldTag::Keyword);
        assert_eq!(PubMedDialect.format_term(&term), "");
    }
}
