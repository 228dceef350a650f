//! # Strategos
//!
//! A search-strategy compiler for academic literature databases.
//!
//! Strategos turns a database-agnostic search strategy (ordered synonym
//! groups called concept blocks) into syntactically guaranteed-valid boolean
//! query strings for PubMed, Scopus, arXiv, OpenAlex, Semantic Scholar, and
//! CrossRef, and grades how broad or narrow each generated query is.
//!
//! ## Features
//!
//! - Pure Rust implementation, no I/O, fully deterministic
//! - One dialect per target engine, selected by a compile-time-checked enum
//! - Exclusion (NOT) clauses per concept block
//! - Heuristic breadth analysis with vendor length-limit warnings
//! - Anti-hallucination guarantee: generated queries never contain
//!   proximity operators like `NEAR` or `ADJ`
//!
//! ## Example
//!
//! ```
//! use strategos::builder::get_builder;
//! use strategos::complexity::analyze_complexity;
//! use strategos::plan::{ConceptBlock, FieldTag, QueryPlan};
//!
//! let mut plan = QueryPlan::new();
//! let mut disease = ConceptBlock::new("Disease");
//! disease.add_term("heart attack", FieldTag::Keyword);
//! disease.add_term("myocardial infarction", FieldTag::ControlledVocabulary);
//! plan.add_block(disease);
//!
//! let builder = get_builder("scopus")?;
//! let query = builder.build(&plan);
//! assert_eq!(
//!     query,
//!     "TITLE-ABS-KEY(\"heart attack\" OR \"myocardial infarction\")"
//! );
//!
//! let report = analyze_complexity(&plan, &query, builder.database());
//! assert_eq!(report.num_blocks, 1);
//! # Ok::<(), strategos::error::StrategosError>(())
//! ```

pub mod builder;
pub mod complexity;
pub mod dialect;
pub mod error;
pub mod plan;
pub mod validate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
