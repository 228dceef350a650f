//! Anti-hallucination validation.
//!
//! The dialects can only emit `AND`, `OR`, and `NOT`, so no generated query
//! ever contains the proximity operators generative models like to invent
//! (`NEAR`, `ADJ`, `PROX`, `W/n`, `WITHIN`). This module makes that
//! guarantee checkable on any string, so downstream layers can assert it on
//! queries that passed through editing or an LLM round trip.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Word-boundary anchored so phrase content like "nearest neighbors" or
    // "adjacent" is not a false positive.
    static ref PROXIMITY_OPERATOR: Regex =
        Regex::new(r"(?i)\b(?:NEAR|ADJ|PROX|WITHIN)(?:/\d+)?\b|\bW/\d*").unwrap();
}

/// Return the first forbidden proximity operator in `query`, if any.
pub fn find_proximity_operator(query: &str) -> Option<&str> {
    PROXIMITY_OPERATOR.find(query).map(|m| m.as_str())
}

/// Whether `query` contains any forbidden proximity operator.
pub fn has_proximity_operator(query: &str) -> bool {
    PROXIMITY_OPERATOR.is_match(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_bare_operators() {
        assert_eq!(find_proximity_operator("a NEAR b"), Some("NEAR"));
        assert_eq!(find_proximity_operator("a ADJ b"), Some("ADJ"));
        assert_eq!(find_proximity_operator("a PROX b"), Some("PROX"));
        assert_eq!(find_proximity_operator("a WITHIN 3 b"), Some("WITHIN"));
    }

    #[test]
    fn test_flags_counted_operators() {
        assert_eq!(find_proximity_operator("a NEAR/3 b"), Some("NEAR/3"));
        assert_eq!(find_proximity_operator("a W/5 b"), Some("W/5"));
        assert_eq!(find_proximity_operator("a ADJ/2 b"), Some("ADJ/2"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_proximity_operator("a near b"));
        assert!(has_proximity_operator("a w/3 b"));
    }

    #[test]
    fn test_term_text_is_not_flagged() {
        assert!(!has_proximity_operator("\"nearest neighbors\""));
        assert!(!has_proximity_operator("\"adjacent segment disease\""));
        assert!(!has_proximity_operator("approximation OR proximal"));
        assert!(!has_proximity_operator("withindale"));
    }

    #[test]
    fn test_plain_boolean_query_passes() {
        let query = "(elderly OR \"older adults\") AND diabetes NOT \"animal models\"";
        assert_eq!(find_proximity_operator(query), None);
    }
}
