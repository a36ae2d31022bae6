//! Reservation Model
//!
//! Reservations are read-only here. Their status is not stored by the backend;
//! it is derived from the current time and the booked window every time it is
//! asked for.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::RecordId;
use crate::search::Searchable;

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "id_reserv")]
    pub id: RecordId,
    #[serde(rename = "id_client", default)]
    pub client_id: RecordId,
    #[serde(rename = "id_table", default)]
    pub table_id: RecordId,
    #[serde(rename = "nb_personne", default)]
    pub person_count: u32,
    /// `None` when the backend value is missing or unparseable
    #[serde(rename = "date_deb_res", default, deserialize_with = "lenient_timestamp")]
    pub start: Option<DateTime<Utc>>,
    #[serde(rename = "date_fin_res", default, deserialize_with = "lenient_timestamp")]
    pub end: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Status at `now`; a reservation without a full window is `Planned`
    pub fn status_at(&self, now: DateTime<Utc>) -> ReservationStatus {
        match (self.start, self.end) {
            (Some(start), Some(end)) => ReservationStatus::at(now, start, end),
            _ => ReservationStatus::Planned,
        }
    }

    pub fn duration(&self) -> Option<TimeDelta> {
        Some(self.end? - self.start?)
    }

    /// `"2h"`, `"2h 30min"` or `"45min"`
    pub fn duration_label(&self) -> Option<String> {
        self.duration().map(format_duration)
    }
}

impl Searchable for Reservation {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Owned(self.client_id.to_string()),
            Cow::Owned(self.table_id.to_string()),
            Cow::Owned(self.person_count.to_string()),
        ];
        fields.extend(
            [self.start, self.end]
                .into_iter()
                .flatten()
                .map(|ts| Cow::Owned(ts.format("%d %b %Y, %H:%M").to_string())),
        );
        fields
    }
}

/// Derived reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Starts in 24 hours or more
    Planned,
    /// Starts in less than one hour
    Imminent,
    /// Starts in less than 24 hours
    Today,
    /// Inside the booked window
    Active,
    /// Window is over
    Completed,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 5] = [
        Self::Planned,
        Self::Imminent,
        Self::Today,
        Self::Active,
        Self::Completed,
    ];

    /// Status of the window `[start, end]` seen at `now`.
    ///
    /// Both window bounds count as active. Lead-time thresholds are
    /// half-open: exactly one hour ahead is `Today`, exactly 24 hours ahead is
    /// `Planned`.
    pub fn at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if now > end {
            return Self::Completed;
        }
        if now >= start {
            return Self::Active;
        }
        let lead = start - now;
        if lead < TimeDelta::hours(1) {
            Self::Imminent
        } else if lead < TimeDelta::hours(24) {
            Self::Today
        } else {
            Self::Planned
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Imminent => "Imminent",
            Self::Today => "Today",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn format_duration(duration: TimeDelta) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    match (hours, minutes) {
        (h, 0) if h > 0 => format!("{h}h"),
        (h, m) if h > 0 => format!("{h}h {m}min"),
        (_, m) => format!("{m}min"),
    }
}

/// Accept RFC 3339 or a naive `YYYY-MM-DD HH:MM:SS` (read as UTC); anything
/// else becomes `None` instead of failing the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
