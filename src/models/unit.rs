use serde::{Deserialize, Serialize};

use crate::error::{FitLogError, Result};
use crate::models::ServingSizeDef;

/// A selectable measurement unit with its gram conversion factor.
///
/// Derived on every unit resolution and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOption {
    pub code: String,
    pub label: String,
    pub grams_per_unit: f64,
}

impl UnitOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>, grams_per_unit: f64) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            grams_per_unit,
        }
    }
}

impl From<&ServingSizeDef> for UnitOption {
    fn from(size: &ServingSizeDef) -> Self {
        Self::new(size.unit.clone(), size.label.clone(), size.grams)
    }
}

/// A user-entered amount. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(FitLogError::InvalidQuantity(value))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = FitLogError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}
