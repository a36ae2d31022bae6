//! Staff Model (Personnel)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::RecordId;
use crate::error::{ValidationError, ValidationResult};
use crate::search::Searchable;
use crate::util::{parse_int, required};

/// Staff member (password is never read back)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(rename = "id_personnel")]
    pub id: RecordId,
    #[serde(rename = "prenom", default)]
    pub first_name: String,
    #[serde(rename = "nom", default)]
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(rename = "poste", default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telephone", default)]
    pub phone: String,
    /// Assigned table references
    #[serde(rename = "tables", default)]
    pub table_ids: Vec<RecordId>,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Searchable for Staff {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(self.full_name()), Cow::Borrowed(&self.job_title)]
    }
}

/// Write-only credential.
///
/// Serializes to the plain value for the sign-up request only; `Debug` and
/// `Display` are redacted so it never lands in a log line.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Staff sign-up form as typed by the manager
#[derive(Debug, Clone, Default)]
pub struct StaffForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub password: Password,
    pub table_ids: Vec<RecordId>,
}

impl StaffForm {
    /// First name, last name, job title and password are required
    pub fn validate(&self) -> ValidationResult<StaffCreate> {
        let first_name = required("first name", &self.first_name)?;
        let last_name = required("last name", &self.last_name)?;
        let job_title = required("job title", &self.job_title)?;
        if self.password.is_blank() {
            return Err(ValidationError::missing("password"));
        }
        let age = if self.age.trim().is_empty() {
            None
        } else {
            let age = parse_int("age", &self.age)?;
            let age = u32::try_from(age)
                .map_err(|_| ValidationError::out_of_range("age", "must not be negative"))?;
            Some(age)
        };

        Ok(StaffCreate {
            first_name,
            last_name,
            age,
            job_title,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            table_ids: self.table_ids.clone(),
        })
    }
}

/// Staff sign-up payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffCreate {
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "poste")]
    pub job_title: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "mot_de_passe")]
    pub password: Password,
    #[serde(rename = "tables")]
    pub table_ids: Vec<RecordId>,
}

/// Table reassignment payload for a waiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAssignment {
    #[serde(rename = "id_table")]
    pub table_id: RecordId,
}

impl TableAssignment {
    pub fn new(table_id: RecordId) -> Self {
        Self { table_id }
    }
}
