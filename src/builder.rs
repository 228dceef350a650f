//! Query builder that walks a plan and applies one dialect's syntax rules.

use std::str::FromStr;

use crate::dialect::Database;
use crate::error::Result;
use crate::plan::QueryPlan;

/// Builds database-specific query strings from a [`QueryPlan`].
///
/// The builder treats the plan as read-only and holds no per-call state, so
/// one instance can serve any number of concurrent callers.
///
/// # Examples
///
/// ```
/// use strategos::builder::get_builder;
/// use strategos::plan::{ConceptBlock, FieldTag, QueryPlan};
///
/// let mut plan = QueryPlan::new();
/// let mut block = ConceptBlock::new("Disease");
/// block.add_term("diabetes", FieldTag::Keyword);
/// plan.add_block(block);
///
/// let builder = get_builder("pubmed")?;
/// assert_eq!(builder.build(&plan), "diabetes[Title/Abstract]");
/// # Ok::<(), strategos::error::StrategosError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxBuilder {
    database: Database,
}

impl SyntaxBuilder {
    /// Create a builder for the given database.
    pub fn new(database: Database) -> Self {
        SyntaxBuilder { database }
    }

    /// The target database.
    pub fn database(&self) -> Database {
        self.database
    }

    /// Build the query string for `plan`.
    ///
    /// Terms whose formatted text is empty are dropped, and blocks left with
    /// no included terms are skipped entirely so no dialect emits empty
    /// parentheses. An empty plan yields an empty string, never an error.
    pub fn build(&self, plan: &QueryPlan) -> String {
        let dialect = self.database.dialect();
        let mut groups = Vec::new();

        for block in &plan.blocks {
            let included: Vec<String> = block
                .included
                .iter()
                .map(|term| dialect.format_term(term))
                .filter(|formatted| !formatted.is_empty())
                .collect();
            if included.is_empty() {
                continue;
            }
            let mut group = dialect.join_or(&included);

            let excluded: Vec<String> = block
                .excluded
                .iter()
                .map(|term| dialect.format_term(term))
                .filter(|formatted| !formatted.is_empty())
                .collect();
            if !excluded.is_empty() {
                let not_clause = dialect.format_not(&excluded);
                if !not_clause.is_empty() {
                    group.push(' ');
                    group.push_str(&not_clause);
                }
            }

            groups.push(group);
        }

        dialect.join_and(&groups)
    }
}

/// Factory: look up a builder by database name (case-insensitive).
///
/// Recognized names are `pubmed`, `scopus`, `arxiv`, `openalex`,
/// `semanticscholar`, and `crossref`. Unknown names produce
/// [`StrategosError::UnknownDatabase`](crate::error::StrategosError) whose
/// message carries both the offending name and the full list of valid names.
pub fn get_builder(db_name: &str) -> Result<SyntaxBuilder> {
    Ok(SyntaxBuilder::new(Database::from_str(db_name)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ConceptBlock, FieldTag};

    fn two_block_plan() -> QueryPlan {
        let mut plan = QueryPlan::new();

        let mut disease = ConceptBlock::new("Disease");
        disease.add_term("heart attack", FieldTag::Keyword);
        disease.add_term("myocardial infarction", FieldTag::ControlledVocabulary);
        plan.add_block(disease);

        let mut treatment = ConceptBlock::new("Treatment");
        treatment.add_term("aspirin", FieldTag::Keyword);
        plan.add_block(treatment);

        plan
    }

    #[test]
    fn test_get_builder_known_names() {
        for name in [
            "pubmed",
            "scopus",
            "arxiv",
            "openalex",
            "semanticscholar",
            "crossref",
        ] {
            let builder = get_builder(name).unwrap();
            assert_eq!(builder.database().name(), name);
        }
    }

    #[test]
    fn test_get_builder_is_case_insensitive() {
        let builder = get_builder("PubMed").unwrap();
        assert_eq!(builder.database(), Database::PubMed);
    }

    #[test]
    fn test_get_builder_unknown_name() {
        let err = get_builder("google_scholar").unwrap_err();
        assert!(err.to_string().contains("google_scholar"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let plan = two_block_plan();
        for db in Database::ALL {
            let builder = SyntaxBuilder::new(db);
            assert_eq!(builder.build(&plan), builder.build(&plan));
        }
    }

    #[test]
    fn test_empty_plan_builds_empty_string() {
        let plan = QueryPlan::new();
        for db in Database::ALL {
            assert_eq!(SyntaxBuilder::new(db).build(&plan), "");
        }
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let mut plan = QueryPlan::new();
        plan.add_block(ConceptBlock::new("Empty"));

        let mut populated = ConceptBlock::new("Disease");
        populated.add_term("diabetes", FieldTag::Keyword);
        plan.add_block(populated);

        // Blank-text terms contribute nothing either.
        let mut blank = ConceptBlock::new("Blank");
        blank.add_term("   ", FieldTag::Keyword);
        plan.add_block(blank);

        let query = SyntaxBuilder::new(Database::OpenAlex).build(&plan);
        assert_eq!(query, "diabetes");
    }

    #[test]
    fn test_excluded_terms_emit_not_clause() {
        let mut plan = QueryPlan::new();
        let mut block = ConceptBlock::new("Population");
        block.add_term("elderly", FieldTag::Keyword);
        block.add_excluded_term("animal models", FieldTag::Keyword);
        plan.add_block(block);

        let query = SyntaxBuilder::new(Database::OpenAlex).build(&plan);
        assert_eq!(query, "elderly NOT \"animal models\"");
    }

    #[test]
    fn test_excluded_only_block_contributes_nothing() {
        let mut plan = QueryPlan::new();
        let mut block = ConceptBlock::new("Population");
        block.add_excluded_term("animal models", FieldTag::Keyword);
        plan.add_block(block);

        for db in Database::ALL {
            assert_eq!(SyntaxBuilder::new(db).build(&plan), "");
        }
    }
}
