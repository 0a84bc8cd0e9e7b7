use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FitLogError, Result};

/// Macronutrients per 100 g of a food.
///
/// Missing fields deserialize to zero so partial records still aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fat: f64,
}

impl MacroProfile {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// True when every value is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A declared serving size of a catalog food, e.g. one egg weighs 50 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSizeDef {
    pub unit: String,
    pub label: String,
    pub grams: f64,
}

impl ServingSizeDef {
    pub fn new(unit: impl Into<String>, label: impl Into<String>, grams: f64) -> Self {
        Self {
            unit: unit.into(),
            label: label.into(),
            grams,
        }
    }
}

/// A food as supplied by the catalog. Read-only to the nutrition core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCatalogEntry {
    pub id: String,

    pub name: String,

    /// Alternative names (translations, common spellings) used by search.
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub per_100g: MacroProfile,

    #[serde(default)]
    pub default_unit: Option<String>,

    #[serde(default)]
    pub serving_sizes: Vec<ServingSizeDef>,
}

impl FoodCatalogEntry {
    /// Check the catalog invariants: positive grams per unit, unique unit
    /// codes and a sane macro profile.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for size in &self.serving_sizes {
            if !size.grams.is_finite() || size.grams <= 0.0 {
                return Err(FitLogError::InvalidServingSize {
                    food: self.name.clone(),
                    reason: format!("'{}' has {} grams per unit", size.unit, size.grams),
                });
            }
            if !seen.insert(size.unit.as_str()) {
                return Err(FitLogError::InvalidServingSize {
                    food: self.name.clone(),
                    reason: format!("duplicate unit code '{}'", size.unit),
                });
            }
        }

        if !self.per_100g.is_valid() {
            return Err(FitLogError::InvalidInput(format!(
                "{} has a negative or non-finite macro value",
                self.name
            )));
        }

        Ok(())
    }

    /// Case-insensitive match against the name or any alias.
    pub fn matches_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.name.to_lowercase() == wanted
            || self.aliases.iter().any(|a| a.to_lowercase() == wanted)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} kcal, P:{} C:{} F:{} per 100g, {} serving sizes",
            self.name,
            self.id,
            self.per_100g.calories,
            self.per_100g.protein,
            self.per_100g.carbs,
            self.per_100g.fat,
            self.serving_sizes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg() -> FoodCatalogEntry {
        FoodCatalogEntry {
            id: "egg-whole".to_string(),
            name: "Egg, whole, raw".to_string(),
            aliases: vec!["Œuf entier".to_string()],
            category: "Protein".to_string(),
            per_100g: MacroProfile::new(143.0, 12.6, 0.7, 9.5),
            default_unit: Some("piece".to_string()),
            serving_sizes: vec![
                ServingSizeDef::new("piece", "piece(s)", 50.0),
                ServingSizeDef::new("g", "grams", 1.0),
            ],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(egg().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_grams() {
        let mut food = egg();
        food.serving_sizes[0].grams = 0.0;
        assert!(matches!(
            food.validate(),
            Err(FitLogError::InvalidServingSize { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_units() {
        let mut food = egg();
        food.serving_sizes.push(ServingSizeDef::new("g", "grams again", 1.0));
        assert!(matches!(
            food.validate(),
            Err(FitLogError::InvalidServingSize { .. })
        ));
    }

    #[test]
    fn test_matches_alias_case_insensitive() {
        let food = egg();
        assert!(food.matches_name("egg, WHOLE, raw"));
        assert!(food.matches_name("œuf entier"));
        assert!(!food.matches_name("egg"));
    }

    #[test]
    fn test_missing_macros_default_to_zero() {
        let profile: MacroProfile = serde_json::from_str(r#"{"calories": 52}"#).unwrap();
        assert_eq!(profile, MacroProfile::new(52.0, 0.0, 0.0, 0.0));
    }
}
