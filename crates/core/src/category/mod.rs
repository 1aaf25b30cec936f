// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashMap;

use crate::ConfigError;

/// A main category (genre) with its ordered subcategories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,

    pub subcategories: Vec<String>,
}

impl Category {
    pub fn new<S>(name: impl Into<String>, subcategories: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            subcategories: subcategories.into_iter().map(Into::into).collect(),
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        let Self {
            name,
            subcategories,
        } = self;
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyMainCategory);
        }
        if subcategories.is_empty() {
            return Err(ConfigError::NoSubcategories(name.clone()));
        }
        for (index, sub_category) in subcategories.iter().enumerate() {
            if sub_category.trim().is_empty() {
                return Err(ConfigError::EmptySubcategory(name.clone()));
            }
            if subcategories[..index].contains(sub_category) {
                return Err(ConfigError::DuplicateSubcategory {
                    main_category: name.clone(),
                    sub_category: sub_category.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Two-level classification of releases.
///
/// Main categories keep their configured order, which is also the order
/// in which they are offered for selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryCatalog {
    pub fn try_from_categories(
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, ConfigError> {
        let categories = categories.into_iter().collect::<Vec<_>>();
        let mut index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            category.check()?;
            if index.insert(category.name.clone(), position).is_some() {
                return Err(ConfigError::DuplicateMainCategory(category.name.clone()));
            }
        }
        Ok(Self { categories, index })
    }

    fn find(&self, main_category: &str) -> Option<&Category> {
        self.index
            .get(main_category)
            .map(|&position| &self.categories[position])
    }

    /// The subcategories of `main_category` or an empty slice if unknown.
    #[must_use]
    pub fn subcategories_for(&self, main_category: &str) -> &[String] {
        self.find(main_category)
            .map(|category| category.subcategories.as_slice())
            .unwrap_or_default()
    }

    /// Case-sensitive check of a (main, sub) selection.
    #[must_use]
    pub fn is_valid_pair(&self, main_category: &str, sub_category: &str) -> bool {
        self.subcategories_for(main_category)
            .iter()
            .any(|known| known == sub_category)
    }

    #[must_use]
    pub fn contains_main_category(&self, main_category: &str) -> bool {
        self.index.contains_key(main_category)
    }

    pub fn main_categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        let categories = [
            Category::new(
                "Electronic",
                ["Ambient", "House", "Techno", "Trance", "Drum & Bass"],
            ),
            Category::new(
                "Rock",
                ["Alternative", "Classic Rock", "Indie", "Metal", "Punk"],
            ),
            Category::new(
                "Pop",
                ["Mainstream", "Indie Pop", "Synthpop", "K-Pop", "Dance Pop"],
            ),
            Category::new(
                "Hip Hop",
                ["Rap", "Trap", "Old School", "Underground", "Urban"],
            ),
            Category::new(
                "Jazz",
                [
                    "Contemporary",
                    "Smooth",
                    "Fusion",
                    "Traditional",
                    "Experimental",
                ],
            ),
            Category::new(
                "Classical",
                [
                    "Symphony",
                    "Chamber",
                    "Opera",
                    "Contemporary Classical",
                    "Minimalist",
                ],
            ),
            Category::new(
                "R&B",
                [
                    "Contemporary",
                    "Neo Soul",
                    "Classic R&B",
                    "Alternative R&B",
                ],
            ),
            Category::new(
                "Country",
                ["Contemporary", "Traditional", "Country Rock", "Bluegrass"],
            ),
            Category::new(
                "World",
                [
                    "Latin",
                    "African",
                    "Asian",
                    "European Folk",
                    "Middle Eastern",
                ],
            ),
        ];
        Self::try_from_categories(categories).expect("valid default categories")
    }
}
