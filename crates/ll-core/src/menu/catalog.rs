use std::collections::HashSet;

use super::entry::{Category, ImageRef, MenuEntry, Price};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate menu entry id: {0}")]
    DuplicateId(u32),
}

/// Fixed, ordered, read-only list of dishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Build a catalog, keeping the given order. Ids must be unique.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The house menu.
    pub fn little_lemon() -> Self {
        let entry = |id, title: &str, description: &str, category, image: &str| MenuEntry {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price: Price::from_cents(1000),
            category,
            image: ImageRef::new(image),
        };

        Self {
            entries: vec![
                entry(
                    1,
                    "Greek Salad",
                    "The famous greek salad of crispy lettuce, peppers, olives, our Chicago.",
                    Category::Starters,
                    "greek-salad-1.jpg",
                ),
                entry(
                    2,
                    "Lemon Desert",
                    "Traditional homemade Italian Lemon Ricotta Cake.",
                    Category::Desserts,
                    "lemon-magic-cake-1-6-1.jpg",
                ),
                entry(
                    3,
                    "Grilled Fish",
                    "Our Bruschetta is made from grilled bread that has been smeared with garlic and seasoned with salt and olive oil.",
                    Category::Mains,
                    "Greek-Style-Grilled-Fish-1-500x375.jpg",
                ),
                entry(
                    4,
                    "Pasta",
                    "Penne with fried aubergines, cherry tomatoes, tomato sauce, fresh chilli, garlic, basil & salted ricotta cheese.",
                    Category::Mains,
                    "pasta.jpg",
                ),
                entry(
                    5,
                    "Bruschetta",
                    "Oven-baked bruschetta stuffed with tomatoes and herbs.",
                    Category::Starters,
                    "bruschetta.jpg",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_menu_has_unique_ids_in_order() {
        let catalog = MenuCatalog::little_lemon();
        let ids: Vec<u32> = catalog.entries().iter().map(|e| e.id).collect();

        assert_eq!(ids, [1, 2, 3, 4, 5]);
        assert!(MenuCatalog::new(catalog.entries().to_vec()).is_ok());
        assert_eq!(catalog.get(4).map(|e| e.title.as_str()), Some("Pasta"));
        assert_eq!(catalog.get(42), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let pasta = MenuCatalog::little_lemon().get(4).cloned().unwrap();

        assert_eq!(
            MenuCatalog::new(vec![pasta.clone(), pasta]),
            Err(CatalogError::DuplicateId(4))
        );
    }
}
