//! arXiv API dialect.

use crate::dialect::{DatabaseDialect, base_form};
use crate::plan::SearchTerm;

/// arXiv API syntax.
///
/// arXiv has no controlled vocabulary, so every term is searched across all
/// fields with the `all:` prefix regardless of its field tag. Grouping and
/// joining follow the standard parenthesized boolean form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArxivDialect;

impl DatabaseDialect for ArxivDialect {
    fn name(&self) -> &'static str {
        "arxiv"
    }

    fn format_term(&self, term: &SearchTerm) -> String {
        let base = base_form(term);
        if base.is_empty() {
            return base;
        }
        format!("all:{base}")
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
