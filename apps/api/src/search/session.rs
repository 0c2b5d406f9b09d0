#![allow(dead_code)]

//! Search session — explicit, passed-down browse state.
//!
//! Replaces the original global store with a value type: update functions
//! return new state, and the compiled query is re-derived on every change,
//! so `query` can never drift from `criteria`. A session is created when a
//! browse view opens and simply dropped on navigation away.

use serde::Serialize;

use super::criteria::{Criteria, FacetKey};
use super::query;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchSession {
    pub criteria: Criteria,
    /// Derived from `criteria` at construction. Never set directly.
    pub query: String,
}

impl SearchSession {
    pub fn new(criteria: Criteria) -> Self {
        let query = query::compile(&criteria);
        SearchSession { criteria, query }
    }

    /// New session with one facet toggled.
    pub fn with_facet(&self, key: FacetKey, value: &str) -> Self {
        let mut criteria = self.criteria.clone();
        criteria.set_facet(key, value);
        SearchSession::new(criteria)
    }

    /// New session with the free-text search term replaced.
    pub fn with_search_term(&self, term: &str) -> Self {
        let mut criteria = self.criteria.clone();
        criteria.set_search_term(term);
        SearchSession::new(criteria)
    }

    /// New session with every facet and the search term cleared.
    pub fn cleared(&self) -> Self {
        SearchSession::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_has_empty_query() {
        let session = SearchSession::default();
        assert_eq!(session.query, "");
        assert!(session.criteria.is_empty());
    }

    #[test]
    fn test_query_recomputed_on_every_update() {
        let session = SearchSession::default()
            .with_search_term("rust")
            .with_facet(FacetKey::Location, "Pune")
            .with_facet(FacetKey::JobType, "Remote");
        assert_eq!(session.query, "Pune Remote");
    }

    #[test]
    fn test_updates_leave_original_untouched() {
        let original = SearchSession::default().with_search_term("designer");
        let updated = original.with_facet(FacetKey::Company, "Adobe");
        assert_eq!(original.query, "designer");
        assert_eq!(updated.query, "Adobe");
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let base = SearchSession::default().with_facet(FacetKey::Location, "Mumbai");
        let round_tripped = base
            .with_facet(FacetKey::Salary, "15+ LPA")
            .with_facet(FacetKey::Salary, "15+ LPA");
        assert_eq!(base, round_tripped);
    }

    #[test]
    fn test_cleared_discards_everything() {
        let session = SearchSession::default()
            .with_search_term("backend")
            .with_facet(FacetKey::Experience, "1-3 years")
            .cleared();
        assert_eq!(session, SearchSession::default());
    }
}
