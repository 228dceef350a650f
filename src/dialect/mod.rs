//! Database syntax dialects.
//!
//! Each dialect encapsulates one search engine's quoting, field-tag, and
//! grouping rules behind the [`DatabaseDialect`] trait. The set of engines
//! is closed over the [`Database`] enum, so adding a seventh dialect is a
//! compile-time-checked exercise rather than a runtime string-miss risk.

pub mod arxiv;
pub mod crossref;
pub mod openalex;
pub mod pubmed;
pub mod scopus;
pub mod semantic_scholar;

pub use self::arxiv::ArxivDialect;
pub use self::crossref::CrossRefDialect;
pub use self::openalex::OpenAlexDialect;
pub use self::pubmed::PubMedDialect;
pub use self::scopus::ScopusDialect;
pub use self::semantic_scholar::SemanticScholarDialect;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StrategosError;
use crate::plan::SearchTerm;

/// Formatting and joining rules for one search engine's boolean grammar.
///
/// Implementations hold no per-call state and are shared as statics; any
/// number of threads may format terms against the same instance.
pub trait DatabaseDialect: Send + Sync {
    /// Canonical lowercase name of the target engine.
    fn name(&self) -> &'static str;

    /// Format a single search term, applying quoting and field tags.
    ///
    /// Returns an empty string for terms whose cleaned text is empty; the
    /// builder drops those so no dialect emits dangling tags or parentheses.
    fn format_term(&self, term: &SearchTerm) -> String;

    /// Join formatted terms with OR into one group clause.
    fn join_or(&self, terms: &[String]) -> String;

    /// Join group clauses with AND into the final query.
    fn join_and(&self, groups: &[String]) -> String;

    /// Format the NOT clause for a block's excluded terms.
    ///
    /// Default: `NOT` followed by the OR-joined group. Dialects with their
    /// own exclusion syntax override this.
    fn format_not(&self, excluded: &[String]) -> String {
        if excluded.is_empty() {
            return String::new();
        }
        let or_group = self.join_or(excluded);
        if or_group.is_empty() {
            String::new()
        } else {
            format!("NOT {or_group}")
        }
    }
}

/// Strip embedded double quotes and surrounding whitespace, then re-quote
/// if the term is a phrase. Returns an empty string for blank text.
pub(crate) fn base_form(term: &SearchTerm) -> String {
    let clean = term.text.replace('"', "");
    let clean = clean.trim();
    if clean.is_empty() {
        return String::new();
    }
    if term.is_phrase {
        format!("\"{clean}\"")
    } else {
        clean.to_string()
    }
}

/// The supported search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// PubMed/MEDLINE.
    PubMed,
    /// Elsevier Scopus.
    Scopus,
    /// arXiv preprint server.
    ArXiv,
    /// OpenAlex scholarly graph.
    OpenAlex,
    /// Semantic Scholar Graph API.
    SemanticScholar,
    /// CrossRef metadata registry.
    CrossRef,
}

impl Database {
    /// All supported databases, in canonical order.
    pub const ALL: [Database; 6] = [
        Database::PubMed,
        Database::Scopus,
        Database::ArXiv,
        Database::OpenAlex,
        Database::SemanticScholar,
        Database::CrossRef,
    ];

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Database::PubMed => "pubmed",
            Database::Scopus => "scopus",
            Database::ArXiv => "arxiv",
            Database::OpenAlex => "openalex",
            Database::SemanticScholar => "semanticscholar",
            Database::CrossRef => "crossref",
        }
    }

    /// The dialect implementing this database's grammar.
    pub fn dialect(&self) -> &'static dyn DatabaseDialect {
        match self {
            Database::PubMed => &PubMedDialect,
            Database::Scopus => &ScopusDialect,
            Database::ArXiv => &ArxivDialect,
            Database::OpenAlex => &OpenAlexDialect,
            Database::SemanticScholar => &SemanticScholarDialect,
            Database::CrossRef => &CrossRefDialect,
        }
    }

    /// Whether generated queries can be executed directly through the
    /// engine's public API, as opposed to copy/paste into the vendor UI.
    pub fn is_executable(&self) -> bool {
        match self {
            Database::PubMed | Database::Scopus => false,
            Database::ArXiv
            | Database::OpenAlex
            | Database::SemanticScholar
            | Database::CrossRef => true,
        }
    }

    /// Fixed usage note for downstream display next to a generated query.
    pub fn usage_note(&self) -> &'static str {
        match self {
            Database::PubMed => "Syntax-only: Copy to PubMed UI. Consider adding MeSH terms.",
            Database::Scopus => "Syntax-only: Requires Scopus API key. Copy to Scopus UI.",
            Database::ArXiv => "Executable through the search adapter layer.",
            Database::OpenAlex => "Executable through the search adapter layer.",
            Database::SemanticScholar => "Executable through the search adapter layer.",
            Database::CrossRef => "Executable through the search adapter layer.",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Database {
    type Err = StrategosError;

    /// Case-insensitive lookup across the six known names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pubmed" => Ok(Database::PubMed),
            "scopus" => Ok(Database::Scopus),
            "arxiv" => Ok(Database::ArXiv),
            "openalex" => Ok(Database::OpenAlex),
            "semanticscholar" => Ok(Database::SemanticScholar),
            "crossref" => Ok(Database::CrossRef),
            _ => Err(StrategosError::unknown_database(s)),
        }
    }
}

/// Comma-separated list of the canonical database names, for error messages.
pub fn supported_names() -> String {
    Database::ALL
        .iter()
        .map(|db| db.name())
        .collect::<Vec<_>>()
        .join(", ")
}
