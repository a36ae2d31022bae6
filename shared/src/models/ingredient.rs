//! Ingredient Model (stock)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::RecordId;
use crate::error::{ValidationError, ValidationResult};
use crate::search::Searchable;
use crate::util::{digits_only, parse_int, required};

/// Ingredient entity
///
/// The backend's column names carry its own spelling; they are mapped as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "id_ingedient")]
    pub id: RecordId,
    #[serde(rename = "nom_igredient")]
    pub name: String,
    /// Unit-less stock level
    #[serde(rename = "quantité_ing", default)]
    pub quantity: i64,
    #[serde(default)]
    pub category: Option<String>,
}

impl Ingredient {
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Unknown")
    }
}

impl Searchable for Ingredient {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Borrowed(self.category_label())]
    }
}

/// Ingredient form as typed by the manager
#[derive(Debug, Clone, Default)]
pub struct IngredientForm {
    pub name: String,
    pub quantity: String,
}

impl IngredientForm {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult<IngredientCreate> {
        let name = required("name", &self.name)?;
        let quantity = parse_int("quantity", &self.quantity)?;
        if quantity < 0 {
            return Err(ValidationError::out_of_range("quantity", "must not be negative"));
        }
        Ok(IngredientCreate { name, quantity })
    }
}

/// Create ingredient payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCreate {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "quantite")]
    pub quantity: i64,
}

/// Stock level edit as typed in the update screen
///
/// Anything that is not a digit is dropped (`"12 kg"` becomes `12`).
#[derive(Debug, Clone, Default)]
pub struct StockAdjustment {
    pub quantity: String,
}

impl StockAdjustment {
    pub fn new(quantity: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult<StockUpdate> {
        let digits = digits_only(&self.quantity);
        if digits.is_empty() {
            return Err(ValidationError::not_numeric("quantity", self.quantity.trim()));
        }
        let quantity = digits
            .parse::<i64>()
            .map_err(|_| ValidationError::out_of_range("quantity", "too large"))?;
        Ok(StockUpdate { quantity })
    }
}

/// Stock update payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    #[serde(rename = "quantite")]
    pub quantity: i64,
}
