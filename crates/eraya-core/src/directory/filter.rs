//! Filter and search over the provider directory.
//!
//! By default the last operation wins: a search runs over the full
//! provider set regardless of the active category, and a category filter
//! ignores the stored query. With `compose` enabled both are intersected.
//! Results always keep store order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::{CategoryFilter, Provider};
use super::store::DirectoryStore;

/// Which operation produced the current visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastApplied {
    #[default]
    Filter,
    Search,
}

/// Transient filter/search state owned by the directory view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    category: CategoryFilter,
    query: String,
    last: LastApplied,
    compose: bool,
}

impl ViewState {
    pub fn new(compose: bool) -> Self {
        Self {
            compose,
            ..Self::default()
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_applied(&self) -> LastApplied {
        self.last
    }

    pub fn composes(&self) -> bool {
        self.compose
    }

    /// Replace the active category.
    pub fn apply_filter(&mut self, category: CategoryFilter) {
        self.category = category;
        self.last = LastApplied::Filter;
    }

    /// Replace the active query.
    pub fn apply_search(&mut self, query: &str) {
        self.query = query.to_string();
        self.last = LastApplied::Search;
    }

    /// Providers visible under the current state, in store order.
    pub fn visible<'a>(&self, store: &'a DirectoryStore) -> Vec<&'a Provider> {
        let needle = self.query.to_lowercase();
        let (use_category, use_query) = match (self.compose, self.last) {
            (true, _) => (true, true),
            (false, LastApplied::Filter) => (true, false),
            (false, LastApplied::Search) => (false, true),
        };

        let visible: Vec<&Provider> = store
            .providers()
            .iter()
            .filter(|p| !use_category || self.category.matches(p))
            .filter(|p| !use_query || needle.is_empty() || p.matches_query(&needle))
            .collect();

        debug!(
            category = %self.category,
            query = %self.query,
            compose = self.compose,
            visible = visible.len(),
            "recomputed visible providers"
        );
        visible
    }
}
