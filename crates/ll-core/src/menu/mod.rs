//! Menu catalog and the search/category filter over it.

mod browser;
mod catalog;
mod entry;
mod filter;

pub use browser::{MenuBrowser, MenuView, NO_MATCHES_MESSAGE};
pub use catalog::{CatalogError, MenuCatalog};
pub use entry::{Category, ImageRef, MenuEntry, Price};
pub use filter::{filter, CategoryFilter, FilterCriteria};
