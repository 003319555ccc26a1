//! Query mode selection.
//!
//! Turns raw search-form state into a `FilterCriteria` for one render pass.
//! Local search always succeeds and keeps every filter active; delegated
//! search hands the query to the remote service and is rejected up front when
//! the query is empty, before any retrieval happens.

use crate::types::{AwardType, FilterCriteria, SearchMode, TagFilter};
use thiserror::Error;

/// Raw form state as the user typed it. Selections use the form's "all"
/// sentinel and funds bounds are the untouched input strings; both are
/// interpreted here and nowhere else.
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub search_text: String,
    pub level_of_study: String,
    pub award_type: String,
    pub min_funds: String,
    pub max_funds: String,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            level_of_study: "all".to_string(),
            award_type: "all".to_string(),
            min_funds: String::new(),
            max_funds: String::new(),
        }
    }
}

/// A search request that cannot be carried out as asked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("delegated search requires a non-empty query")]
    EmptyQuery,
}

/// Build criteria for a local/combined search.
///
/// Always succeeds; the predicate engine will see the text and every
/// structured filter.
pub fn local_search(input: &SearchInput) -> FilterCriteria {
    criteria_from(input, SearchMode::LocalFilter)
}

/// Build criteria for a delegated search.
///
/// The remote delegate needs something to search for, so an empty or
/// whitespace-only query is rejected here and no retrieval is attempted. On
/// success the predicate engine is bypassed for this pass: the delegate's
/// results are already ranked and filtered, and re-filtering them locally
/// would narrow or reorder what it chose to return.
pub fn delegated_search(input: &SearchInput) -> Result<FilterCriteria, QueryError> {
    if input.search_text.trim().is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    Ok(criteria_from(input, SearchMode::DelegatedSearch))
}

fn criteria_from(input: &SearchInput, mode: SearchMode) -> FilterCriteria {
    FilterCriteria {
        search_text: input.search_text.clone(),
        level_of_study: level_selection(&input.level_of_study),
        award_type: award_selection(&input.award_type),
        min_funds: parse_bound(&input.min_funds),
        max_funds: parse_bound(&input.max_funds),
        mode,
    }
}

/// The form's "all" option means unconstrained.
fn level_selection(selection: &str) -> TagFilter<String> {
    if selection == "all" {
        TagFilter::Any
    } else {
        TagFilter::Only(selection.to_string())
    }
}

/// "all" or an unrecognized label both mean unconstrained.
fn award_selection(selection: &str) -> TagFilter<AwardType> {
    match AwardType::from_label(selection) {
        Some(kind) => TagFilter::Only(kind),
        None => TagFilter::Any,
    }
}

/// A funds bound is active only when the input holds a usable number.
fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
