//! Dish Model (Gerant_plat)

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

use crate::RecordId;
use crate::error::{ValidationError, ValidationResult};
use crate::search::Searchable;
use crate::util::{parse_decimal, parse_int_or, required};

/// Category used when the form leaves it blank
pub const DEFAULT_DISH_CATEGORY: &str = "viande";

/// Dish entity (menu item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "id_plat")]
    pub id: RecordId,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Accepts both JSON numbers and numeric strings
    #[serde(rename = "prix")]
    pub price: Decimal,
    #[serde(rename = "calorie", default, deserialize_with = "lenient_number")]
    pub calories: i64,
    #[serde(rename = "categorie", default)]
    pub category: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Creation date as stored by the backend
    #[serde(default)]
    pub date: Option<String>,
    /// Order count, computed by the backend
    #[serde(rename = "commandes", default, deserialize_with = "lenient_number")]
    pub orders: i64,
    /// Average rating, computed by the backend
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<DishIngredient>,
    /// Health alert references
    #[serde(rename = "maladies", default)]
    pub health_alerts: Vec<RecordId>,
}

impl Dish {
    /// Price as shown on the menu (`"12.50da"`)
    pub fn price_label(&self) -> String {
        format!("{}da", self.price)
    }
}

impl Searchable for Dish {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Borrowed(&self.category)]
    }
}

/// Ingredient line of a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishIngredient {
    #[serde(rename = "id_ingredient")]
    pub ingredient_id: RecordId,
    #[serde(rename = "quantite")]
    pub quantity: i64,
}

impl DishIngredient {
    pub fn new(ingredient_id: RecordId, quantity: i64) -> Self {
        Self {
            ingredient_id,
            quantity,
        }
    }
}

/// Dish form as typed by the manager
#[derive(Debug, Clone, Default)]
pub struct DishForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub calories: String,
    pub category: String,
    pub image: String,
    /// Defaults to today (`%Y-%m-%d`) when absent
    pub date: Option<String>,
    pub ingredients: Vec<DishIngredient>,
    pub health_alerts: Vec<RecordId>,
}

impl DishForm {
    /// Check the form and build the create payload.
    ///
    /// A dish needs a name, a numeric non-negative price, at least one
    /// ingredient with a positive quantity and at least one health alert.
    pub fn validate(&self) -> ValidationResult<DishCreate> {
        let name = required("name", &self.name)?;
        let price = parse_decimal("price", &self.price)?;
        if price.is_sign_negative() {
            return Err(ValidationError::out_of_range("price", "must not be negative"));
        }
        let calories = parse_int_or("calories", &self.calories, 0)?;
        if calories < 0 {
            return Err(ValidationError::out_of_range("calories", "must not be negative"));
        }
        if self.ingredients.is_empty() {
            return Err(ValidationError::empty("ingredient"));
        }
        if let Some(line) = self.ingredients.iter().find(|line| line.quantity <= 0) {
            return Err(ValidationError::out_of_range(
                "quantity",
                format!("ingredient {} needs a positive quantity", line.ingredient_id),
            ));
        }
        if self.health_alerts.is_empty() {
            return Err(ValidationError::empty("health alert"));
        }

        let category = match self.category.trim() {
            "" => DEFAULT_DISH_CATEGORY.to_string(),
            other => other.to_string(),
        };
        let date = match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => chrono::Local::now().format("%Y-%m-%d").to_string(),
        };

        Ok(DishCreate {
            name,
            description: self.description.trim().to_string(),
            price,
            calories,
            category,
            date,
            ingredients: self.ingredients.clone(),
            health_alerts: self.health_alerts.clone(),
            image: self.image.trim().to_string(),
        })
    }
}

/// Create dish payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishCreate {
    #[serde(rename = "nom")]
    pub name: String,
    pub description: String,
    #[serde(rename = "prix", serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    #[serde(rename = "calorie")]
    pub calories: i64,
    #[serde(rename = "categorie")]
    pub category: String,
    pub date: String,
    pub ingredients: Vec<DishIngredient>,
    #[serde(rename = "maladies")]
    pub health_alerts: Vec<RecordId>,
    pub image: String,
}

/// New menu price as typed by the manager
#[derive(Debug, Clone, Default)]
pub struct PriceChange {
    pub price: String,
}

impl PriceChange {
    pub fn new(price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult<Decimal> {
        let price = parse_decimal("price", &self.price)?;
        if price.is_sign_negative() {
            return Err(ValidationError::out_of_range("price", "must not be negative"));
        }
        Ok(price)
    }
}

/// Price update payload; the dish is keyed in the body, not the path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishPriceUpdate {
    #[serde(rename = "id_plat")]
    pub dish_id: RecordId,
    #[serde(rename = "prix", serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
}

/// Body for attaching or re-weighting an ingredient on a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DishIngredientLink {
    #[serde(rename = "id_plat")]
    pub dish_id: RecordId,
    #[serde(rename = "id_ingredient")]
    pub ingredient_id: RecordId,
    #[serde(rename = "quantite")]
    pub quantity: i64,
}

impl DishIngredientLink {
    pub fn new(dish_id: RecordId, ingredient_id: RecordId, quantity: i64) -> ValidationResult<Self> {
        if quantity <= 0 {
            return Err(ValidationError::out_of_range("quantity", "must be positive"));
        }
        Ok(Self {
            dish_id,
            ingredient_id,
            quantity,
        })
    }
}

/// Body for detaching an ingredient from a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DishIngredientUnlink {
    #[serde(rename = "id_plat")]
    pub dish_id: RecordId,
    #[serde(rename = "id_ingredient")]
    pub ingredient_id: RecordId,
}

/// Backend numbers sometimes arrive as text (`"450"`)
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

impl<T: FromStr> NumberOrText<T> {
    fn into_number(self) -> Option<T> {
        match self {
            Self::Number(n) => Some(n),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Number or numeric string; null, blank or unreadable text is the default
fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
{
    Ok(lenient_optional_number(deserializer)?.unwrap_or_default())
}

fn lenient_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    let raw = Option::<NumberOrText<T>>::deserialize(deserializer)?;
    Ok(raw.and_then(NumberOrText::into_number))
}
