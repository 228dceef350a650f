//! OpenAlex dialect.

use crate::dialect::{DatabaseDialect, base_form};
use crate::plan::SearchTerm;

/// OpenAlex search syntax.
///
/// The `search` parameter accepts plain boolean AND/OR/NOT with quoted
/// phrases. Field-specific scoping is handled by API filters upstream, so
/// terms carry no tags here.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAlexDialect;

impl DatabaseDialect for OpenAlexDialect {
    fn name(&self) -> &'static str {
        "openalex"
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
