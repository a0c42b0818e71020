use std::fmt;

use super::catalog::MenuCatalog;
use super::entry::{Category, MenuEntry};

/// Category selector: everything, or one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector buttons in display order.
    pub fn options() -> [CategoryFilter; 4] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Starters),
            CategoryFilter::Only(Category::Mains),
            CategoryFilter::Only(Category::Desserts),
        ]
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Current search text and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn matches(&self, entry: &MenuEntry) -> bool {
        self.category.matches(entry.category)
            && entry
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }
}

/// Entries passing `criteria`, in catalog order.
pub fn filter<'a>(catalog: &'a MenuCatalog, criteria: &FilterCriteria) -> Vec<&'a MenuEntry> {
    let query = criteria.query.to_lowercase();
    catalog
        .entries()
        .iter()
        .filter(|entry| criteria.category.matches(entry.category))
        .filter(|entry| entry.title.to_lowercase().contains(&query))
        .collect()
}
