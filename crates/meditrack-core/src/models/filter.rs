//! Query inputs: hospital scope, filters, and sort order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{is_iso_date, PatientRecord};

/// Reserved selector value meaning "every hospital".
pub const ALL_HOSPITALS: &str = "all";

/// Which hospital's records are in scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum HospitalSelector {
    #[default]
    All,
    Hospital(String),
}

impl HospitalSelector {
    pub fn hospital(id: impl Into<String>) -> Self {
        Self::Hospital(id.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record with `hospital_id` is in scope.
    pub fn includes(&self, hospital_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Hospital(id) => id == hospital_id,
        }
    }

    /// Selected hospital ID, if any.
    pub fn hospital_id(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Hospital(id) => Some(id),
        }
    }
}

impl From<String> for HospitalSelector {
    fn from(value: String) -> Self {
        if value == ALL_HOSPITALS {
            Self::All
        } else {
            Self::Hospital(value)
        }
    }
}

impl From<&str> for HospitalSelector {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<HospitalSelector> for String {
    fn from(selector: HospitalSelector) -> Self {
        match selector {
            HospitalSelector::All => ALL_HOSPITALS.to_string(),
            HospitalSelector::Hospital(id) => id,
        }
    }
}

impl fmt::Display for HospitalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_HOSPITALS),
            Self::Hospital(id) => f.write_str(id),
        }
    }
}

/// Search and date-range filters.
///
/// `hospital_id` mirrors the top-level selector and is not consulted by the
/// query engine; it exists so a cleared filter set resets it too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Case-insensitive substring over name, phone, and diagnosis
    pub search_query: String,
    pub hospital_id: HospitalSelector,
    /// Inclusive lower bound on visit date, empty = unbounded
    pub start_date: String,
    /// Inclusive upper bound on visit date, empty = unbounded
    pub end_date: String,
}

impl FilterState {
    /// Merge a partial update.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(query) = patch.search_query {
            self.search_query = query;
        }
        if let Some(hospital_id) = patch.hospital_id {
            self.hospital_id = hospital_id;
        }
        if let Some(start) = patch.start_date {
            self.start_date = start;
        }
        if let Some(end) = patch.end_date {
            self.end_date = end;
        }
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial filter update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search_query: Option<String>,
    pub hospital_id: Option<HospitalSelector>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterPatch {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Self::default()
        }
    }

    /// Set date bounds that are neither empty nor `YYYY-MM-DD`.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [("startDate", &self.start_date), ("endDate", &self.end_date)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_some_and(|v| !v.is_empty() && !is_iso_date(v)))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Sortable record columns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    VisitDate,
    PatientName,
    NextVisitDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisitDate => "visitDate",
            Self::PatientName => "patientName",
            Self::NextVisitDate => "nextVisitDate",
        }
    }

    /// Sort key of `record` for this column.
    pub fn key<'a>(&self, record: &'a PatientRecord) -> &'a str {
        match self {
            Self::VisitDate => &record.visit_date,
            Self::PatientName => &record.patient_name,
            Self::NextVisitDate => &record.next_visit_date,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized sort field or order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort {kind}: {value}")]
pub struct UnknownSort {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for SortField {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "visitDate" | "visit-date" | "visit_date" => Ok(Self::VisitDate),
            "patientName" | "patient-name" | "patient_name" | "name" => Ok(Self::PatientName),
            "nextVisitDate" | "next-visit-date" | "next_visit_date" => Ok(Self::NextVisitDate),
            other => Err(UnknownSort {
                kind: "field",
                value: other.to_string(),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    /// Newest/largest first
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(UnknownSort {
                kind: "order",
                value: other.to_string(),
            }),
        }
    }
}

/// Active sort column and direction. Defaults to newest visit first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Header-click behaviour: same column flips direction, a new column
    /// starts descending.
    pub fn toggled_by(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.order.toggle())
        } else {
            Self::new(field, SortOrder::Desc)
        }
    }
}
