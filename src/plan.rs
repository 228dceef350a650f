//! Query plan model: the database-agnostic representation of a search strategy.
//!
//! A [`QueryPlan`] is an ordered list of [`ConceptBlock`]s, each of which is
//! a synonym group for one facet of a research question (population,
//! intervention, outcome, ...). Blocks are combined with AND; the included
//! terms of a block are combined with OR; excluded terms are subtracted from
//! the block with a NOT clause.
//!
//! These types carry no behavior beyond construction and normalization.
//! Translation into database-specific syntax lives in
//! [`crate::builder`] and [`crate::dialect`].

use serde::{Deserialize, Serialize};

/// Which part of a document a term should be matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    /// Free-text matching over title/abstract/keywords.
    #[default]
    Keyword,
    /// Database-curated indexing vocabulary (e.g. MeSH).
    ControlledVocabulary,
    /// No field restriction.
    AllFields,
}

/// An atomic search unit.
///
/// Whether the term is a phrase is decided exactly once, at construction.
/// [`SearchTerm::new`] auto-detects phrases from internal whitespace;
/// [`SearchTerm::with_phrase`] sets the flag explicitly and performs no
/// detection. The flag is never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    /// The raw term text (e.g. "machine learning").
    pub text: String,
    /// Which field to search.
    pub field_tag: FieldTag,
    /// Whether to match as an exact phrase.
    pub is_phrase: bool,
}

impl SearchTerm {
    /// Create a term, auto-detecting phrases.
    ///
    /// A term whose trimmed text contains internal whitespace is marked as a
    /// phrase so dialects render it quoted.
    pub fn new<S: Into<String>>(text: S, field_tag: FieldTag) -> Self {
        let text = text.into();
        let is_phrase = text.trim().contains(char::is_whitespace);
        SearchTerm {
            text,
            field_tag,
            is_phrase,
        }
    }

    /// Create a term with an explicit phrase flag, skipping auto-detection.
    pub fn with_phrase<S: Into<String>>(text: S, field_tag: FieldTag, is_phrase: bool) -> Self {
        SearchTerm {
            text: text.into(),
            field_tag,
            is_phrase,
        }
    }
}

/// A group of synonyms combined with OR, representing one concept.
///
/// # Examples
///
/// ```
/// use strategos::plan::{ConceptBlock, FieldTag};
///
/// let mut block = ConceptBlock::new("Population");
/// block.add_term("elderly", FieldTag::Keyword);
/// block.add_term("older adults", FieldTag::Keyword);
/// block.add_excluded_term("animal models", FieldTag::Keyword);
///
/// assert_eq!(block.included.len(), 2);
/// assert_eq!(block.excluded.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptBlock {
    /// Human-readable facet label (e.g. "Population").
    pub label: String,
    /// Synonyms to OR together. Insertion order is preserved for
    /// deterministic output.
    pub included: Vec<SearchTerm>,
    /// Terms to subtract from this concept with a NOT clause.
    pub excluded: Vec<SearchTerm>,
}

impl ConceptBlock {
    /// Create an empty block with the given label.
    pub fn new<S: Into<String>>(label: S) -> Self {
        ConceptBlock {
            label: label.into(),
            included: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Append an included term, with phrase auto-detection.
    pub fn add_term<S: Into<String>>(&mut self, text: S, tag: FieldTag) {
        self.included.push(SearchTerm::new(text, tag));
    }

    /// Append an excluded term, with phrase auto-detection.
    pub fn add_excluded_term<S: Into<String>>(&mut self, text: S, tag: FieldTag) {
        self.excluded.push(SearchTerm::new(text, tag));
    }
}

/// Complete search strategy: concept blocks combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    /// Blocks in order. Order is significant only for deterministic output.
    pub blocks: Vec<ConceptBlock>,
}

impl QueryPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        QueryPlan { blocks: Vec::new() }
    }

    /// Append a concept block.
    pub fn add_block(&mut self, block: ConceptBlock) {
        self.blocks.push(block);
    }

    /// Whether the plan has no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
