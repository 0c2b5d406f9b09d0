//! Query compiler — flattens the criteria into the single search string the
//! match evaluator consumes.
//!
//! Facet selections take priority over free text: the search term only
//! survives compilation when no facet is active. The output is derived
//! state — always recomputable from the criteria, never stored as truth.

use super::criteria::Criteria;

/// Compiles criteria into the evaluator's query string.
///
/// Non-empty facet values are collected in fixed order (location, job type,
/// experience, salary, company) and joined with single spaces. With no
/// active facet the search term passes through verbatim; with nothing
/// active at all the result is empty, meaning "match everything".
pub fn compile(criteria: &Criteria) -> String {
    let facets = criteria.facet_values();
    if facets.is_empty() {
        criteria.search_term.clone()
    } else {
        facets.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::criteria::FacetKey;

    #[test]
    fn test_empty_criteria_compiles_to_empty_query() {
        assert_eq!(compile(&Criteria::default()), "");
    }

    #[test]
    fn test_search_term_used_when_no_facet_active() {
        let mut c = Criteria::default();
        c.set_search_term("Backend Developer");
        assert_eq!(compile(&c), "Backend Developer");
    }

    #[test]
    fn test_facets_join_in_fixed_order() {
        let mut c = Criteria::default();
        c.set_facet(FacetKey::Salary, "10-15 LPA");
        c.set_facet(FacetKey::Location, "Bangalore");
        c.set_facet(FacetKey::JobType, "Full Time");
        assert_eq!(compile(&c), "Bangalore Full Time 10-15 LPA");
    }

    #[test]
    fn test_facets_override_search_term() {
        let mut c = Criteria::default();
        c.set_search_term("rust engineer");
        c.set_facet(FacetKey::Location, "Pune");
        let query = compile(&c);
        assert_eq!(query, "Pune");
        assert!(!query.contains("rust engineer"));
    }

    #[test]
    fn test_toggling_last_facet_off_restores_search_term() {
        let mut c = Criteria::default();
        c.set_search_term("designer");
        c.set_facet(FacetKey::Company, "Adobe");
        c.set_facet(FacetKey::Company, "Adobe");
        assert_eq!(compile(&c), "designer");
    }
}
