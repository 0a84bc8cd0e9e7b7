use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{FoodCatalogEntry, MacroProfile};

/// Catalog compiled into the binary.
static EMBEDDED_FOODS_JSON: &str = include_str!("data/foods.json");

/// One row of a CSV catalog. CSV rows carry no serving sizes, so these foods
/// are offered units by name.
#[derive(Debug, Deserialize)]
struct CsvFoodRecord {
    id: String,
    name: String,
    #[serde(default)]
    category: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    #[serde(default)]
    default_unit: Option<String>,
}

impl From<CsvFoodRecord> for FoodCatalogEntry {
    fn from(record: CsvFoodRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            aliases: Vec::new(),
            category: record.category,
            per_100g: MacroProfile::new(record.calories, record.protein, record.carbs, record.fat),
            default_unit: record.default_unit.filter(|u| !u.trim().is_empty()),
            serving_sizes: Vec::new(),
        }
    }
}

pub fn parse_catalog_json(content: &str) -> Result<Vec<FoodCatalogEntry>> {
    Ok(serde_json::from_str(content)?)
}

pub fn embedded_foods() -> Result<Vec<FoodCatalogEntry>> {
    parse_catalog_json(EMBEDDED_FOODS_JSON)
}

/// Load catalog entries from a JSON array file.
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Vec<FoodCatalogEntry>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_json(&content)
}

/// Load catalog entries from a CSV file with a header row.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodCatalogEntry>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize::<CsvFoodRecord>() {
        foods.push(record?.into());
    }
    Ok(foods)
}

/// Load a catalog file, choosing the format from the extension.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<FoodCatalogEntry>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    tracing::debug!(path = %path.display(), csv = is_csv, "loading food catalog");

    if is_csv {
        load_catalog_csv(path)
    } else {
        load_catalog_json(path)
    }
}
