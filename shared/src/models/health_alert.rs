//! Health Alert Model (maladie)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::RecordId;
use crate::error::ValidationResult;
use crate::search::Searchable;
use crate::util::required;

/// Health alert entity, used as a tag on dishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    #[serde(rename = "id_maladie")]
    pub id: RecordId,
    #[serde(rename = "nom_maladie")]
    pub name: String,
    #[serde(rename = "desc_maladie", default)]
    pub description: String,
}

impl Searchable for HealthAlert {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name)]
    }
}

/// Health alert form as typed by the manager
#[derive(Debug, Clone, Default)]
pub struct HealthAlertForm {
    pub name: String,
    pub description: String,
}

impl HealthAlertForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Both name and description are required
    pub fn validate(&self) -> ValidationResult<HealthAlertCreate> {
        Ok(HealthAlertCreate {
            name: required("name", &self.name)?,
            description: required("description", &self.description)?,
        })
    }
}

/// Create health alert payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlertCreate {
    #[serde(rename = "nom_maladie")]
    pub name: String,
    #[serde(rename = "desc_maladie")]
    pub description: String,
}
