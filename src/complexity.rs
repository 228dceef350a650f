//! Heuristic breadth analysis of generated queries.
//!
//! [`analyze_complexity`] is a pure function over a plan, the query string a
//! dialect produced from it, and the target database. It classifies how
//! broad or narrow the strategy is, estimates a result-count bucket, and
//! flags queries that exceed vendor length limits. It never errors: a plan
//! with zero blocks still yields a valid report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dialect::Database;
use crate::plan::QueryPlan;

/// PubMed rejects queries beyond this many characters.
pub const PUBMED_QUERY_CHAR_LIMIT: usize = 4000;

/// Scopus UI handling degrades beyond this many characters.
pub const SCOPUS_QUERY_CHAR_LIMIT: usize = 2000;

/// Breadth classification buckets.
///
/// The serialized snake_case names and the numeric thresholds selecting them
/// are stable; downstream tooling matches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    /// Single concept with many synonyms.
    VeryBroad,
    /// Single concept block.
    Broad,
    /// Single focused concept.
    Moderate,
    /// Six or more AND-joined blocks.
    VeryNarrow,
    /// Four or five AND-joined blocks.
    Narrow,
    /// Two or three blocks with rich synonym lists.
    ModerateBroad,
    /// Two or three blocks with compact synonym lists.
    Balanced,
}

impl ComplexityLevel {
    /// The stable snake_case bucket name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::VeryBroad => "very_broad",
            ComplexityLevel::Broad => "broad",
            ComplexityLevel::Moderate => "moderate",
            ComplexityLevel::VeryNarrow => "very_narrow",
            ComplexityLevel::Narrow => "narrow",
            ComplexityLevel::ModerateBroad => "moderate_broad",
            ComplexityLevel::Balanced => "balanced",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics for one generated query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Breadth bucket.
    pub complexity_level: ComplexityLevel,
    /// Included terms summed across blocks.
    pub total_terms: usize,
    /// Number of concept blocks.
    pub num_blocks: usize,
    /// `total_terms / max(num_blocks, 1)`, rounded to one decimal.
    pub avg_terms_per_block: f64,
    /// Excluded terms summed across blocks.
    pub excluded_terms: usize,
    /// Character count of the generated query.
    pub query_length: usize,
    /// Advisory result-count bucket (e.g. "100-1,000").
    pub expected_results: String,
    /// Advisory guidance text for the strategy author.
    pub guidance: String,
    /// Vendor length-limit warnings, empty when none apply.
    pub warnings: Vec<String>,
}

/// Classify how broad or narrow a compiled strategy is.
///
/// Classification priority: a single block is graded by its synonym count,
/// then block count dominates (>= 6 very narrow, >= 4 narrow), and 2-3
/// block plans are split on average synonyms per block.
pub fn analyze_complexity(plan: &QueryPlan, query: &str, database: Database) -> ComplexityReport {
    let total_terms: usize = plan.blocks.iter().map(|b| b.included.len()).sum();
    let num_blocks = plan.blocks.len();
    let excluded_terms: usize = plan.blocks.iter().map(|b| b.excluded.len()).sum();
    let query_length = query.chars().count();
    let avg_terms_per_block = total_terms as f64 / num_blocks.max(1) as f64;

    let (complexity_level, base_guidance, expected_results) = if num_blocks == 1 {
        if avg_terms_per_block > 15.0 {
            (
                ComplexityLevel::VeryBroad,
                "Single concept with many synonyms - may return thousands of results. \
                 Consider adding more concept blocks to narrow scope.",
                "10,000+",
            )
        } else if avg_terms_per_block > 8.0 {
            (
                ComplexityLevel::Broad,
                "Single concept block - results may be too broad. \
                 Consider adding outcome or population filters.",
                "1,000-10,000",
            )
        } else {
            (
                ComplexityLevel::Moderate,
                "Single focused concept - good for exploratory searches.",
                "100-1,000",
            )
        }
    } else if num_blocks >= 6 {
        (
            ComplexityLevel::VeryNarrow,
            "Many concept blocks with AND logic - may miss relevant studies. \
             Consider combining related concepts.",
            "< 50",
        )
    } else if num_blocks >= 4 {
        (
            ComplexityLevel::Narrow,
            "Highly specific query - good for precise topics. \
             Verify all blocks are essential.",
            "50-500",
        )
    } else if avg_terms_per_block > 10.0 {
        (
            ComplexityLevel::ModerateBroad,
            "Good balance - multiple concepts with rich synonyms. \
             May need manual screening.",
            "500-5,000",
        )
    } else {
        (
            ComplexityLevel::Balanced,
            "Well-balanced query - recommended complexity for systematic reviews.",
            "100-1,000",
        )
    };

    let mut guidance = base_guidance.to_string();
    if excluded_terms > 5 {
        guidance.push_str(&format!(
            " Note: {excluded_terms} excluded terms will further narrow results."
        ));
    }

    let mut warnings = Vec::new();
    if database == Database::PubMed && query_length > PUBMED_QUERY_CHAR_LIMIT {
        warnings.push(format!(
            "Query exceeds PubMed's {PUBMED_QUERY_CHAR_LIMIT} character limit \
             ({query_length} chars). Simplify query or split into multiple searches."
        ));
    } else if database == Database::Scopus && query_length > SCOPUS_QUERY_CHAR_LIMIT {
        warnings.push(format!(
            "Query exceeds Scopus's {SCOPUS_QUERY_CHAR_LIMIT} character limit \
             ({query_length} chars) - may cause Scopus UI issues. Consider simplifying."
        ));
    }

    ComplexityReport {
        complexity_level,
        total_terms,
        num_blocks,
        avg_terms_per_block: (avg_terms_per_block * 10.0).round() / 10.0,
        excluded_terms,
        query_length,
        expected_results: expected_results.to_string(),
        guidance,
        warnings,
    }
}
