//! Meal Model

use serde::{Deserialize, Serialize};

/// Meal variant chosen by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealVariant {
    Veg,
    #[serde(rename = "nonveg")]
    NonVeg,
    Egg,
}

/// Per-variant price overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantPricing {
    pub veg: Option<f64>,
    #[serde(rename = "nonveg", alias = "nonVeg")]
    pub non_veg: Option<f64>,
    pub egg: Option<f64>,
}

/// Meal entity (only the attributes relevant to pricing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Price of a single day's meal
    pub price: f64,
    /// Strike-through price shown on the menu
    pub original_price: Option<f64>,
    pub variant_pricing: Option<VariantPricing>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            variant_pricing: None,
            is_active: true,
        }
    }

    /// Price of one meal for the given variant, falling back to `price`
    /// when no override exists
    pub fn unit_price(&self, variant: Option<MealVariant>) -> f64 {
        let overridden = match (variant, &self.variant_pricing) {
            (Some(MealVariant::Veg), Some(p)) => p.veg,
            (Some(MealVariant::NonVeg), Some(p)) => p.non_veg,
            (Some(MealVariant::Egg), Some(p)) => p.egg,
            _ => None,
        };
        overridden.unwrap_or(self.price)
    }
}
