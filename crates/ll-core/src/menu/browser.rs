use super::catalog::MenuCatalog;
use super::entry::MenuEntry;
use super::filter::{filter, CategoryFilter, FilterCriteria};

pub const NO_MATCHES_MESSAGE: &str = "No items match your search.";

/// Home screen menu state: the catalog plus the current criteria.
///
/// The visible list is derived on demand from both, so it always reflects the
/// latest inputs.
#[derive(Debug, Clone)]
pub struct MenuBrowser {
    catalog: MenuCatalog,
    criteria: FilterCriteria,
}

impl MenuBrowser {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
    }

    pub fn replace_catalog(&mut self, catalog: MenuCatalog) {
        self.catalog = catalog;
    }

    pub fn is_selected(&self, category: CategoryFilter) -> bool {
        self.criteria.category == category
    }

    pub fn view(&self) -> MenuView<'_> {
        MenuView {
            entries: filter(&self.catalog, &self.criteria),
        }
    }
}

impl Default for MenuBrowser {
    fn default() -> Self {
        Self::new(MenuCatalog::little_lemon())
    }
}

/// Filtered list to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView<'a> {
    entries: Vec<&'a MenuEntry>,
}

impl<'a> MenuView<'a> {
    pub fn entries(&self) -> &[&'a MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder text when nothing matches. Not an error.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_MATCHES_MESSAGE)
    }
}
