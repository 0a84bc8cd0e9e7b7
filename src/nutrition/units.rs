//! Unit resolution: which measurement units a food can be logged in.
//!
//! Catalog-declared serving sizes win. Foods without them go through an
//! ordered keyword heuristic on the lower-cased name, and anything left over
//! is offered in grams only.

use crate::models::{ServingSizeDef, UnitOption};
use crate::nutrition::constants::*;

/// Food families recognised by the name heuristic, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Egg,
    Liquid,
    WholeFruit,
    Bread,
    PastaOrRice,
    MeatOrFish,
    Yogurt,
}

/// First match wins; the order is part of the contract.
const HEURISTIC_RULES: &[(FoodKind, &[&str])] = &[
    (FoodKind::Egg, EGG_KEYWORDS),
    (FoodKind::Liquid, LIQUID_KEYWORDS),
    (FoodKind::WholeFruit, WHOLE_FRUIT_KEYWORDS),
    (FoodKind::Bread, BREAD_KEYWORDS),
    (FoodKind::PastaOrRice, PASTA_RICE_KEYWORDS),
    (FoodKind::MeatOrFish, MEAT_FISH_KEYWORDS),
    (FoodKind::Yogurt, YOGURT_KEYWORDS),
];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

fn gram_unit() -> UnitOption {
    UnitOption::new(UNIT_GRAM, "grams", 1.0)
}

/// Classify a food name by keyword. `None` when no rule matches.
pub fn classify_food_name(food_name: &str) -> Option<FoodKind> {
    let name = food_name.to_lowercase();
    HEURISTIC_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&name, keywords))
        .map(|(kind, _)| *kind)
}

/// Unit list for a heuristic food family.
///
/// `food_name` is only consulted for pasta and rice, where a cooked keyword
/// switches to the larger cooked portion.
pub fn units_for_kind(kind: FoodKind, food_name: &str) -> Vec<UnitOption> {
    match kind {
        FoodKind::Egg => vec![
            UnitOption::new(UNIT_PIECE, "piece(s)", EGG_PIECE_GRAMS),
            gram_unit(),
        ],
        FoodKind::Liquid => vec![
            UnitOption::new(UNIT_MILLILITER, "ml", 1.0),
            UnitOption::new(UNIT_LITER, "liter(s)", LITER_GRAMS),
            UnitOption::new(UNIT_GLASS, "glass(es) (250ml)", GLASS_GRAMS),
            gram_unit(),
        ],
        FoodKind::WholeFruit => vec![
            UnitOption::new(UNIT_PIECE, "piece(s)", FRUIT_PIECE_GRAMS),
            gram_unit(),
        ],
        FoodKind::Bread => vec![
            UnitOption::new(UNIT_SLICE, "slice(s)", BREAD_SLICE_GRAMS),
            gram_unit(),
        ],
        FoodKind::PastaOrRice => {
            if contains_any(&food_name.to_lowercase(), COOKED_KEYWORDS) {
                vec![
                    UnitOption::new(UNIT_PORTION, "portion(s) (200g)", COOKED_PORTION_GRAMS),
                    gram_unit(),
                ]
            } else {
                vec![
                    UnitOption::new(UNIT_PORTION, "portion(s) (80g)", RAW_PORTION_GRAMS),
                    gram_unit(),
                ]
            }
        }
        FoodKind::MeatOrFish => vec![
            UnitOption::new(UNIT_PORTION, "portion(s) (150g)", MEAT_PORTION_GRAMS),
            gram_unit(),
        ],
        FoodKind::Yogurt => vec![
            UnitOption::new(UNIT_POT, "pot(s) (125g)", YOGURT_POT_GRAMS),
            gram_unit(),
        ],
    }
}

/// Resolve the selectable units for a food.
///
/// Never empty: unmatched names get a single gram unit.
pub fn resolve_units(food_name: &str, serving_sizes: Option<&[ServingSizeDef]>) -> Vec<UnitOption> {
    if let Some(sizes) = serving_sizes.filter(|s| !s.is_empty()) {
        return sizes.iter().map(UnitOption::from).collect();
    }

    match classify_food_name(food_name) {
        Some(kind) => units_for_kind(kind, food_name),
        None => vec![gram_unit()],
    }
}

/// Find a unit by its exact code.
pub fn find_unit<'a>(units: &'a [UnitOption], code: &str) -> Option<&'a UnitOption> {
    units.iter().find(|u| u.code == code)
}

/// The declared default unit when it is offered, otherwise the first unit.
pub fn default_unit<'a>(
    units: &'a [UnitOption],
    declared_default: Option<&str>,
) -> Option<&'a UnitOption> {
    declared_default
        .and_then(|code| find_unit(units, code))
        .or_else(|| units.first())
}

/// Suggested quantities for a unit code.
pub fn quick_quantities(unit_code: &str) -> &'static [f64] {
    if COUNT_LIKE_UNITS.contains(&unit_code) {
        return QUICK_QUANTITIES_COUNT;
    }
    match unit_code {
        UNIT_GRAM => QUICK_QUANTITIES_GRAMS,
        UNIT_MILLILITER => QUICK_QUANTITIES_ML,
        UNIT_LITER => QUICK_QUANTITIES_LITERS,
        _ => QUICK_QUANTITIES_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(units: &[UnitOption]) -> Vec<&str> {
        units.iter().map(|u| u.code.as_str()).collect()
    }

    #[test]
    fn test_explicit_serving_sizes_preserve_order() {
        let sizes = vec![
            ServingSizeDef::new("can", "can(s) (150g)", 150.0),
            ServingSizeDef::new("portion", "portion(s) (100g)", 100.0),
            ServingSizeDef::new("g", "grams", 1.0),
        ];
        let units = resolve_units("Tuna", Some(sizes.as_slice()));
        assert_eq!(codes(&units), vec!["can", "portion", "g"]);
        assert_eq!(units[0].grams_per_unit, 150.0);
    }

    #[test]
    fn test_empty_serving_sizes_use_heuristic() {
        let units = resolve_units("Tuna", Some(&[][..]));
        assert_eq!(codes(&units), vec!["portion", "g"]);
        assert_eq!(units[0].grams_per_unit, 150.0);
    }

    #[test]
    fn test_egg_rule() {
        assert_eq!(classify_food_name("Œuf dur"), Some(FoodKind::Egg));
        let units = resolve_units("Scrambled eggs", None);
        assert_eq!(units[0].grams_per_unit, 50.0);
    }

    #[test]
    fn test_egg_wins_over_later_rules() {
        // "egg" comes before "noodle" in the chain
        assert_eq!(classify_food_name("Egg noodles"), Some(FoodKind::Egg));
    }

    #[test]
    fn test_fruit_rule_french() {
        let units = resolve_units("Pomme golden", None);
        assert_eq!(codes(&units), vec!["piece", "g"]);
        assert_eq!(units[0].grams_per_unit, 150.0);
    }

    #[test]
    fn test_bread_rule() {
        let units = resolve_units("Whole wheat bread", None);
        assert_eq!(codes(&units), vec!["slice", "g"]);
        assert_eq!(units[0].grams_per_unit, 30.0);
    }

    #[test]
    fn test_rice_cooked_vs_raw() {
        let cooked = resolve_units("Rice, white, cooked", None);
        assert_eq!(cooked[0].grams_per_unit, 200.0);

        let raw = resolve_units("Riz basmati", None);
        assert_eq!(raw[0].grams_per_unit, 80.0);

        let cuit = resolve_units("Pâtes cuites", None);
        assert_eq!(cuit[0].grams_per_unit, 200.0);
    }

    #[test]
    fn test_yogurt_rule() {
        let units = resolve_units("Greek yoghurt", None);
        assert_eq!(codes(&units), vec!["pot", "g"]);
        assert_eq!(units[0].grams_per_unit, 125.0);
    }

    #[test]
    fn test_fallback_is_single_gram() {
        let units = resolve_units("Almonds", None);
        assert_eq!(units, vec![UnitOption::new("g", "grams", 1.0)]);

        let empty = resolve_units("", None);
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].grams_per_unit, 1.0);
    }

    #[test]
    fn test_default_unit() {
        let units = resolve_units("Milk", None);
        assert_eq!(default_unit(&units, Some("glass")).unwrap().code, "glass");
        assert_eq!(default_unit(&units, Some("cup")).unwrap().code, "ml");
        assert_eq!(default_unit(&units, None).unwrap().code, "ml");
    }

    #[test]
    fn test_quick_quantities() {
        assert_eq!(quick_quantities("piece"), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(quick_quantities("g"), &[50.0, 100.0, 150.0, 200.0, 250.0]);
        assert_eq!(quick_quantities("ml"), &[100.0, 200.0, 250.0, 500.0]);
        assert_eq!(quick_quantities("L"), &[0.25, 0.5, 1.0, 1.5]);
        assert_eq!(quick_quantities("scoop"), &[1.0, 2.0, 3.0, 4.0]);
    }
}
