use serde::{Deserialize, Serialize};

use crate::models::{FoodCatalogEntry, MacroProfile, Quantity, UnitOption};

/// A food placed into a meal.
///
/// The gram conversion and the per-100g profile are snapshots taken when the
/// entry was created. Later catalog edits never change a logged entry, and the
/// quantity only changes through [`FoodEntry::update_quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: u64,

    /// Catalog identifier, absent for foods typed in by hand.
    #[serde(default)]
    pub food_id: Option<String>,

    pub food_name: String,

    quantity: f64,

    unit: String,

    /// Conversion factor of `unit` at entry time.
    #[serde(default)]
    grams_per_unit: f64,

    /// `quantity * grams_per_unit`, frozen at entry time.
    #[serde(default)]
    grams_equivalent: f64,

    #[serde(default)]
    per_100g: MacroProfile,
}

impl FoodEntry {
    /// Snapshot a catalog food at the given quantity and unit.
    pub fn new(id: u64, food: &FoodCatalogEntry, quantity: Quantity, unit: &UnitOption) -> Self {
        let mut entry = Self::from_parts(id, food.name.clone(), quantity, unit, food.per_100g);
        entry.food_id = Some(food.id.clone());
        entry
    }

    /// Entry for a food outside the catalog.
    pub(crate) fn from_parts(
        id: u64,
        food_name: impl Into<String>,
        quantity: Quantity,
        unit: &UnitOption,
        per_100g: MacroProfile,
    ) -> Self {
        Self {
            id,
            food_id: None,
            food_name: food_name.into(),
            quantity: quantity.value(),
            unit: unit.code.clone(),
            grams_per_unit: unit.grams_per_unit,
            grams_equivalent: quantity.value() * unit.grams_per_unit,
            per_100g,
        }
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn grams_per_unit(&self) -> f64 {
        self.grams_per_unit
    }

    /// Stored gram equivalent; 0 for rows written without one.
    pub fn grams_equivalent(&self) -> f64 {
        self.grams_equivalent
    }

    pub fn per_100g(&self) -> &MacroProfile {
        &self.per_100g
    }

    /// Grams this entry contributes to totals.
    ///
    /// Rows written without a gram equivalent count their quantity as grams.
    pub fn effective_grams(&self) -> f64 {
        if self.grams_equivalent > 0.0 {
            self.grams_equivalent
        } else {
            self.quantity
        }
    }

    /// Conversion factor of the unit the entry was logged with.
    pub fn unit_factor(&self) -> f64 {
        if self.grams_per_unit > 0.0 {
            self.grams_per_unit
        } else if self.grams_equivalent > 0.0 && self.quantity > 0.0 {
            self.grams_equivalent / self.quantity
        } else {
            1.0
        }
    }

    /// Change the quantity, keeping the original unit's conversion factor.
    pub fn update_quantity(&mut self, quantity: Quantity) {
        let factor = self.unit_factor();
        self.quantity = quantity.value();
        self.grams_per_unit = factor;
        self.grams_equivalent = quantity.value() * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingSizeDef;

    fn banana() -> FoodCatalogEntry {
        FoodCatalogEntry {
            id: "banana".to_string(),
            name: "Banana".to_string(),
            aliases: Vec::new(),
            category: "Fruit".to_string(),
            per_100g: MacroProfile::new(89.0, 1.1, 23.0, 0.3),
            default_unit: Some("piece".to_string()),
            serving_sizes: vec![ServingSizeDef::new("piece", "piece(s)", 120.0)],
        }
    }

    #[test]
    fn test_new_freezes_grams_and_profile() {
        let mut food = banana();
        let unit = UnitOption::new("piece", "piece(s)", 120.0);
        let entry = FoodEntry::new(1, &food, Quantity::new(2.0).unwrap(), &unit);

        assert_eq!(entry.grams_equivalent(), 240.0);
        assert_eq!(entry.grams_per_unit(), 120.0);

        // Catalog edits do not leak into the snapshot
        food.per_100g.calories = 500.0;
        assert_eq!(entry.per_100g().calories, 89.0);
    }

    #[test]
    fn test_update_quantity_uses_original_factor() {
        let unit = UnitOption::new("piece", "piece(s)", 120.0);
        let mut entry = FoodEntry::new(1, &banana(), Quantity::new(2.0).unwrap(), &unit);

        entry.update_quantity(Quantity::new(3.0).unwrap());
        assert_eq!(entry.quantity(), 3.0);
        assert_eq!(entry.grams_equivalent(), 360.0);
        assert_eq!(entry.unit(), "piece");
    }

    #[test]
    fn test_legacy_entry_without_factor() {
        let json = r#"{"id": 7, "food_name": "Rice", "quantity": 2, "unit": "portion", "grams_equivalent": 160}"#;
        let mut entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.unit_factor(), 80.0);

        entry.update_quantity(Quantity::new(1.0).unwrap());
        assert_eq!(entry.grams_equivalent(), 80.0);
    }

    #[test]
    fn test_legacy_entry_without_grams_counts_quantity() {
        let json = r#"{"id": 8, "food_name": "Oats", "quantity": 60, "unit": "g"}"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.effective_grams(), 60.0);
        assert_eq!(*entry.per_100g(), MacroProfile::default());
    }

    #[test]
    fn test_snapshot_only_changes_through_update() {
        let unit = UnitOption::new("g", "grams", 1.0);
        let profile = MacroProfile::new(120.0, 20.0, 0.0, 4.0);
        let mut entry = FoodEntry::from_parts(3, "Turkey", Quantity::new(100.0).unwrap(), &unit, profile);
        assert_eq!(entry.food_id, None);
        assert_eq!(entry.grams_equivalent(), entry.quantity() * entry.grams_per_unit());

        entry.update_quantity(Quantity::new(3.0).unwrap());
        assert_eq!(entry.quantity(), 3.0);
        assert_eq!(entry.grams_equivalent(), entry.quantity() * entry.grams_per_unit());
        assert_eq!(*entry.per_100g(), profile);

        // Stored field names are unchanged
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["grams_equivalent"], 3.0);
        assert_eq!(json["per_100g"]["calories"], 120.0);
        let back: FoodEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
