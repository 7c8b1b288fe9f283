//! Trivia categories and per-category data storage.
//!
//! Categories are a fixed enumeration: they carry display metadata for
//! the presentation layer and the name of the JSON record file the
//! question bank loads them from. `CategoryMap` is the per-category
//! analogue of a per-player map: a fixed-size array indexed by
//! `Category` with O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Trivia category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Disney Cruise Line.
    Cruise,
    /// General Disney.
    General,
    /// Movie quotes.
    Quotes,
    /// Disney parks.
    Parks,
    /// Miscellaneous.
    Misc,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// All categories, in stable order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Cruise,
        Category::General,
        Category::Quotes,
        Category::Parks,
        Category::Misc,
    ];

    /// Stable 0-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Cruise => "Disney Cruise Line",
            Category::General => "General Disney",
            Category::Quotes => "Movie Quotes",
            Category::Parks => "Disney Parks",
            Category::Misc => "Miscellaneous",
        }
    }

    /// Tile/HUD color (hex, rendering hint).
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Category::Cruise => "#6FB8E0",
            Category::General => "#FF9C8E",
            Category::Quotes => "#C4A5D8",
            Category::Parks => "#5DBDA8",
            Category::Misc => "#F4D35E",
        }
    }

    /// JSON record file this category's questions are loaded from.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Category::Cruise => "disney_cruise_line.json",
            Category::General => "general_disney_trivia.json",
            Category::Quotes => "disney_movie_quotes.json",
            Category::Parks => "disney_parks.json",
            Category::Misc => "miscellaneous.json",
        }
    }

    /// Icon (rendering hint).
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Category::Cruise => "🚢",
            Category::General => "🎬",
            Category::Quotes => "💬",
            Category::Parks => "🎢",
            Category::Misc => "✨",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-category data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gem_trail::core::{Category, CategoryMap};
///
/// let mut gems: CategoryMap<u32> = CategoryMap::with_value(0);
/// gems[Category::Parks] += 1;
/// assert_eq!(gems[Category::Parks], 1);
/// assert_eq!(gems[Category::Misc], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    data: [T; Category::COUNT],
}

impl<T> CategoryMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Category) -> T) -> Self {
        Self {
            data: Category::ALL.map(factory),
        }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a category's entry.
    #[must_use]
    pub fn get(&self, category: Category) -> &T {
        &self.data[category.index()]
    }

    /// Get a mutable reference to a category's entry.
    pub fn get_mut(&mut self, category: Category) -> &mut T {
        &mut self.data[category.index()]
    }

    /// Iterate over (Category, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Iterate over the stored values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &Self::Output {
        self.get(category)
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        self.get_mut(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_index_is_stable() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_category_metadata() {
        assert_eq!(Category::Cruise.display_name(), "Disney Cruise Line");
        assert_eq!(Category::Quotes.file_name(), "disney_movie_quotes.json");
        assert_eq!(Category::Misc.color(), "#F4D35E");
    }

    #[test]
    fn test_category_map_factory() {
        let map: CategoryMap<usize> = CategoryMap::new(Category::index);
        assert_eq!(map[Category::Cruise], 0);
        assert_eq!(map[Category::Misc], 4);
    }

    #[test]
    fn test_category_map_mutation() {
        let mut map: CategoryMap<u32> = CategoryMap::with_value(0);
        map[Category::Parks] = 7;
        assert_eq!(map[Category::Parks], 7);
        assert_eq!(map[Category::General], 0);
    }

    #[test]
    fn test_category_map_iter() {
        let map: CategoryMap<usize> = CategoryMap::new(Category::index);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), Category::COUNT);
        assert_eq!(pairs[0], (Category::Cruise, &0));
        assert_eq!(pairs[4], (Category::Misc, &4));
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::Cruise).unwrap();
        assert_eq!(json, "\"cruise\"");

        let map: CategoryMap<u32> = CategoryMap::with_value(3);
        let json = serde_json::to_string(&map).unwrap();
        let back: CategoryMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
