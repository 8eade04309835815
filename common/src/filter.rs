//! Category filter for the projects section

use crate::types::{Category, ProjectRecord};

/// Selected filter-bar entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match against `ProjectRecord::category`
    Only(String),
}

impl CategoryFilter {
    /// Map a filter-bar label; the `All` label selects no filter
    pub fn from_label(label: &str) -> Self {
        if label == Category::All.label() {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Category::All.label(),
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => record.category == *label,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::All => CategoryFilter::All,
            other => CategoryFilter::Only(other.label().to_string()),
        }
    }
}

/// Records left after filtering, in directory order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a> {
    records: Vec<&'a ProjectRecord>,
    applied: bool,
}

impl<'a> Filtered<'a> {
    pub fn records(&self) -> &[&'a ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A category other than `All` was applied
    pub fn is_filtered(&self) -> bool {
        self.applied
    }

    /// A category was applied and nothing matched; the caller shows the
    /// empty state with a reset-to-all action
    pub fn is_empty_match(&self) -> bool {
        self.applied && self.records.is_empty()
    }
}

/// Subsequence of `records` visible under `selected`
pub fn filter<'a>(records: &'a [ProjectRecord], selected: &CategoryFilter) -> Filtered<'a> {
    Filtered {
        records: records.iter().filter(|r| selected.matches(r)).collect(),
        applied: *selected != CategoryFilter::All,
    }
}
