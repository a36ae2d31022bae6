//! Promotion Model (Gerant_offre)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::RecordId;
use crate::error::{ValidationError, ValidationResult};
use crate::search::Searchable;
use crate::util::{leading_number, required};

/// Discount applied when the form text carries no number
pub const DEFAULT_DISCOUNT_PERCENT: u32 = 20;

/// Promotion entity
///
/// Dates are opaque strings in whatever format the manager typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(rename = "id_offre")]
    pub id: RecordId,
    /// Discount percentage
    #[serde(default)]
    pub reduction: u32,
    #[serde(rename = "date_deb_offre", alias = "date_deb", default)]
    pub start_date: String,
    #[serde(rename = "date_fin_offre", alias = "date_fin", default)]
    pub end_date: String,
    /// Associated dish references
    #[serde(rename = "plats", default)]
    pub dish_ids: Vec<RecordId>,
}

impl Promotion {
    pub fn display_name(&self) -> String {
        format!("Promotion {}", self.id)
    }

    pub fn discount_label(&self) -> String {
        format!("{}% Off", self.reduction)
    }

    pub fn period_label(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

impl Searchable for Promotion {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.display_name()),
            Cow::Owned(self.discount_label()),
            Cow::Owned(self.period_label()),
        ]
    }
}

/// Promotion form as typed by the manager
#[derive(Debug, Clone, Default)]
pub struct PromotionForm {
    /// Free text such as `"15% Off"`; the first number is the percentage
    pub discount: String,
    pub start_date: String,
    pub end_date: String,
}

impl PromotionForm {
    pub fn new(
        discount: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            discount: discount.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult<PromotionPayload> {
        let reduction =
            leading_number("reduction", &self.discount)?.unwrap_or(DEFAULT_DISCOUNT_PERCENT);
        if reduction > 100 {
            return Err(ValidationError::out_of_range(
                "reduction",
                format!("{reduction}% is over 100%"),
            ));
        }
        required("start date", &self.start_date)?;
        required("end date", &self.end_date)?;
        Ok(PromotionPayload {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            reduction,
        })
    }
}

/// Create/update promotion payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionPayload {
    #[serde(rename = "date_deb")]
    pub start_date: String,
    #[serde(rename = "date_fin")]
    pub end_date: String,
    pub reduction: u32,
}

/// Promotion-to-dish association body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionDishLink {
    #[serde(rename = "id_offre")]
    pub promotion_id: RecordId,
    #[serde(rename = "id_plat")]
    pub dish_id: RecordId,
}
