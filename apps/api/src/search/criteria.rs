#![allow(dead_code)]

//! Criteria model — the currently selected filter facets plus free-text
//! search term. One value slot per facet; selecting the active value again
//! clears it (toggle semantics, matching the filter sidebar's checkboxes).

use serde::{Deserialize, Serialize};

/// One independently selectable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKey {
    Location,
    JobType,
    Experience,
    Salary,
    Company,
}

impl FacetKey {
    /// Compilation order is fixed: location, job type, experience, salary,
    /// company. `Criteria::facet_values` and the query compiler rely on it.
    pub const ORDERED: [FacetKey; 5] = [
        FacetKey::Location,
        FacetKey::JobType,
        FacetKey::Experience,
        FacetKey::Salary,
        FacetKey::Company,
    ];
}

/// Selected facet values plus the free-text search term. Empty string means
/// "not selected". Values come from the fixed catalog choices by
/// construction (UI controls), so no validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub company: String,
}

impl Criteria {
    /// Current value of one facet slot.
    pub fn facet(&self, key: FacetKey) -> &str {
        match key {
            FacetKey::Location => &self.location,
            FacetKey::JobType => &self.job_type,
            FacetKey::Experience => &self.experience,
            FacetKey::Salary => &self.salary,
            FacetKey::Company => &self.company,
        }
    }

    fn facet_mut(&mut self, key: FacetKey) -> &mut String {
        match key {
            FacetKey::Location => &mut self.location,
            FacetKey::JobType => &mut self.job_type,
            FacetKey::Experience => &mut self.experience,
            FacetKey::Salary => &mut self.salary,
            FacetKey::Company => &mut self.company,
        }
    }

    /// Toggle: selecting the already-selected value clears the facet,
    /// anything else replaces it.
    pub fn set_facet(&mut self, key: FacetKey, value: &str) {
        let slot = self.facet_mut(key);
        if slot == value {
            slot.clear();
        } else {
            *slot = value.to_string();
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Resets every facet and the search term.
    pub fn clear_all(&mut self) {
        *self = Criteria::default();
    }

    /// Non-empty facet values in fixed compilation order.
    pub fn facet_values(&self) -> Vec<&str> {
        FacetKey::ORDERED
            .iter()
            .map(|k| self.facet(*k))
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Number of active fields, search term included — drives the
    /// "Active Filters (n)" badge.
    pub fn active_count(&self) -> usize {
        let facets = self.facet_values().len();
        if self.search_term.is_empty() {
            facets
        } else {
            facets + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_facet_selects_value() {
        let mut c = Criteria::default();
        c.set_facet(FacetKey::Location, "Pune");
        assert_eq!(c.location, "Pune");
    }

    #[test]
    fn test_set_facet_replaces_previous_selection() {
        let mut c = Criteria::default();
        c.set_facet(FacetKey::Location, "Pune");
        c.set_facet(FacetKey::Location, "Mumbai");
        assert_eq!(c.location, "Mumbai");
    }

    #[test]
    fn test_toggle_same_value_twice_restores_prior_state() {
        let mut c = Criteria::default();
        c.set_facet(FacetKey::JobType, "Internship");
        let before = c.clone();

        c.set_facet(FacetKey::Salary, "3-6 LPA");
        c.set_facet(FacetKey::Salary, "3-6 LPA");
        assert_eq!(c, before);
    }

    #[test]
    fn test_one_value_per_facet() {
        let mut c = Criteria::default();
        c.set_facet(FacetKey::Company, "Google");
        c.set_facet(FacetKey::Company, "Amazon");
        assert_eq!(c.facet_values(), vec!["Amazon"]);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut c = Criteria::default();
        c.set_search_term("developer");
        c.set_facet(FacetKey::Location, "Chennai");
        c.set_facet(FacetKey::Experience, "1-3 years");
        c.clear_all();
        assert_eq!(c, Criteria::default());
        assert!(c.is_empty());
    }

    #[test]
    fn test_facet_values_follow_fixed_order() {
        let mut c = Criteria::default();
        // Selection order deliberately scrambled.
        c.set_facet(FacetKey::Company, "Google");
        c.set_facet(FacetKey::Location, "Bangalore");
        c.set_facet(FacetKey::JobType, "Full Time");
        assert_eq!(c.facet_values(), vec!["Bangalore", "Full Time", "Google"]);
    }

    #[test]
    fn test_active_count_includes_search_term() {
        let mut c = Criteria::default();
        assert_eq!(c.active_count(), 0);
        c.set_search_term("rust");
        c.set_facet(FacetKey::Location, "Pune");
        assert_eq!(c.active_count(), 2);
    }
}
