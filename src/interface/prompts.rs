use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::{FitLogError, Result};
use crate::models::{FoodCatalogEntry, Quantity, UnitOption};
use crate::nutrition::{default_unit, quick_quantities};

/// Pick a food for a typed reference.
///
/// An exact id or name wins outright. Otherwise the search results are
/// offered, with a confirmation when there is only one.
pub fn prompt_food_choice<'a>(
    catalog: &'a FoodCatalog,
    reference: &str,
) -> Result<&'a FoodCatalogEntry> {
    if let Some(food) = catalog.lookup(reference) {
        return Ok(food);
    }

    let candidates = catalog.search(reference);
    match candidates.as_slice() {
        [] => Err(FitLogError::FoodNotFound(reference.to_string())),
        [only] => {
            if prompt_yes_no(&format!("Did you mean '{}'?", only.name), true)? {
                Ok(*only)
            } else {
                Err(FitLogError::FoodNotFound(reference.to_string()))
            }
        }
        many => {
            let mut options: Vec<String> = many
                .iter()
                .map(|f| format!("{} ({})", f.name, f.category))
                .collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which food?")
                .items(&options)
                .default(0)
                .interact()?;

            many.get(selection)
                .copied()
                .ok_or_else(|| FitLogError::FoodNotFound(reference.to_string()))
        }
    }
}

/// Pick one of the resolved units, preselecting the food's default.
pub fn prompt_unit<'a>(
    units: &'a [UnitOption],
    preferred: Option<&str>,
) -> Result<&'a UnitOption> {
    let fallback = default_unit(units, preferred);
    if units.len() == 1 {
        return fallback.ok_or_else(|| FitLogError::InvalidInput("no units available".to_string()));
    }

    let default_index = fallback
        .and_then(|d| units.iter().position(|u| u.code == d.code))
        .unwrap_or(0);

    let options: Vec<String> = units
        .iter()
        .map(|u| format!("{} ({} g)", u.label, u.grams_per_unit))
        .collect();

    let selection = Select::new()
        .with_prompt("Unit")
        .items(&options)
        .default(default_index)
        .interact()?;

    units
        .get(selection)
        .ok_or_else(|| FitLogError::InvalidInput("no unit selected".to_string()))
}

/// Ask for a quantity, offering the usual amounts for the unit first.
pub fn prompt_quantity(unit: &UnitOption) -> Result<Quantity> {
    let quick = quick_quantities(&unit.code);
    let mut options: Vec<String> = quick
        .iter()
        .map(|q| format!("{} {}", q, unit.label))
        .collect();
    options.push("Other...".to_string());

    let selection = Select::new()
        .with_prompt("Quantity")
        .items(&options)
        .default(0)
        .interact()?;

    if let Some(value) = quick.get(selection) {
        return Quantity::new(*value);
    }

    let input: String = Input::new()
        .with_prompt(format!("Quantity in {}", unit.label))
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            s.trim()
                .parse::<f64>()
                .map_err(|_| "Not a number".to_string())
                .and_then(|v| Quantity::new(v).map(|_| ()).map_err(|e| e.to_string()))
        })
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| FitLogError::InvalidInput("Invalid number".to_string()))?;
    Quantity::new(value)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
