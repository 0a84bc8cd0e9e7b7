//! Food catalog lookup.
//!
//! Supplies `FoodCatalogEntry` records to the nutrition core. Entries are
//! validated on construction, so every serving size handed to the unit
//! resolver has a positive gram weight.

mod loader;

use std::collections::HashSet;
use std::path::Path;

use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::FoodCatalogEntry;

pub use loader::{embedded_foods, load_catalog_csv, load_catalog_file, load_catalog_json};

/// Queries shorter than this return nothing.
pub const MIN_SEARCH_LEN: usize = 2;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Maximum fuzzy suggestions returned.
pub const MAX_FUZZY_RESULTS: usize = 5;

/// Foods suggested before the user has searched.
pub const POPULAR_FOOD_IDS: &[&str] = &[
    "egg-whole",
    "chicken-breast",
    "rice-white-cooked",
    "banana",
    "oats",
    "salmon",
    "avocado",
    "cottage-cheese",
    "potato",
    "broccoli",
    "tuna",
    "greek-yogurt",
];

/// An ordered, validated set of foods.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodCatalogEntry>,
}

impl FoodCatalog {
    /// Build a catalog, validating every entry.
    ///
    /// Deduplicates by id (last occurrence wins, keeping the first position).
    pub fn new(foods: Vec<FoodCatalogEntry>) -> Result<Self> {
        let mut deduped: Vec<FoodCatalogEntry> = Vec::with_capacity(foods.len());
        for food in foods {
            food.validate()?;
            tracing::trace!(food = %food.debug_string(), "catalog entry");
            match deduped.iter_mut().find(|f| f.id == food.id) {
                Some(existing) => {
                    tracing::warn!(id = %food.id, "duplicate catalog id, keeping the later entry");
                    *existing = food;
                }
                None => deduped.push(food),
            }
        }
        Ok(Self { foods: deduped })
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::new(embedded_foods()?)
    }

    /// Load from a JSON or CSV file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(load_catalog_file(path)?)
    }

    pub fn get(&self, id: &str) -> Option<&FoodCatalogEntry> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Exact, case-insensitive match on name or alias.
    pub fn find_by_name(&self, name: &str) -> Option<&FoodCatalogEntry> {
        self.foods.iter().find(|f| f.matches_name(name))
    }

    /// Resolve a user-typed reference: id first, then name.
    pub fn lookup(&self, reference: &str) -> Option<&FoodCatalogEntry> {
        self.get(reference.trim())
            .or_else(|| self.find_by_name(reference))
    }

    /// Substring search over name, aliases and category, in catalog order.
    ///
    /// Falls back to fuzzy name matching when nothing contains the query.
    pub fn search(&self, query: &str) -> Vec<&FoodCatalogEntry> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }

        let hits: Vec<&FoodCatalogEntry> = self
            .foods
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&query)
                    || f.aliases.iter().any(|a| a.to_lowercase().contains(&query))
                    || f.category.to_lowercase().contains(&query)
            })
            .collect();

        if !hits.is_empty() {
            return hits;
        }

        self.fuzzy_search(&query)
    }

    fn fuzzy_search(&self, query: &str) -> Vec<&FoodCatalogEntry> {
        let mut candidates: Vec<(&FoodCatalogEntry, f64)> = self
            .foods
            .iter()
            .map(|f| {
                let best = std::iter::once(&f.name)
                    .chain(f.aliases.iter())
                    .map(|n| jaro_winkler(&n.to_lowercase(), query))
                    .fold(0.0, f64::max);
                (f, best)
            })
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates
            .into_iter()
            .take(MAX_FUZZY_RESULTS)
            .map(|(f, _)| f)
            .collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&FoodCatalogEntry> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.foods
            .iter()
            .map(|f| f.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn popular(&self) -> Vec<&FoodCatalogEntry> {
        self.foods
            .iter()
            .filter(|f| POPULAR_FOOD_IDS.contains(&f.id.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodCatalogEntry> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
