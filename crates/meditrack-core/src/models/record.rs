//! Patient visit records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage format of visit and next-visit dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `value` is a real calendar date written as zero-padded `YYYY-MM-DD`.
///
/// Lexicographic comparison of stored dates relies on the padding, which
/// `NaiveDate` parsing alone does not enforce.
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
        && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Care status of a visit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RecordStatus {
    /// Ongoing treatment
    #[default]
    Active,
    /// Treatment finished
    Completed,
    /// Patient is expected back
    FollowUp,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [Self::Active, Self::FollowUp, Self::Completed];

    /// Stored name (`active`, `completed`, `follow-up`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::FollowUp => "follow-up",
        }
    }

    /// Human-readable label for forms and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::FollowUp => "Follow Up Required",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for RecordStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "follow-up" | "followup" | "follow_up" => Ok(Self::FollowUp),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A single patient visit recorded against a hospital.
///
/// `hospital_id` is a weak reference: the hospital may have been deleted since.
/// Dates are `YYYY-MM-DD` strings so lexicographic order is chronological.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Unique ID, immutable after creation
    pub id: String,
    pub hospital_id: String,
    pub visit_date: String,
    pub patient_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub clinical_findings: String,
    /// Empty when no follow-up is scheduled
    #[serde(default)]
    pub next_visit_date: String,
    #[serde(default)]
    pub doctor_comments: String,
    #[serde(default)]
    pub status: RecordStatus,
}

/// Contents of the record form: every field of a record except its ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub hospital_id: String,
    pub visit_date: String,
    pub patient_name: String,
    pub phone_number: String,
    pub diagnosis: String,
    pub clinical_findings: String,
    pub next_visit_date: String,
    pub doctor_comments: String,
    pub status: RecordStatus,
}

impl RecordDraft {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("patientName", &self.patient_name),
            ("hospitalId", &self.hospital_id),
            ("visitDate", &self.visit_date),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Names of date fields that are filled in but not `YYYY-MM-DD`.
    ///
    /// A blank visit date is reported by [`missing_fields`](Self::missing_fields)
    /// instead; a blank next-visit date means none is scheduled.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("visitDate", &self.visit_date),
            ("nextVisitDate", &self.next_visit_date),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty() && !is_iso_date(value))
        .map(|(name, _)| name)
        .collect()
    }

    /// Build a record with the given ID from this draft.
    pub fn into_record(self, id: String) -> PatientRecord {
        PatientRecord {
            id,
            hospital_id: self.hospital_id,
            visit_date: self.visit_date,
            patient_name: self.patient_name,
            phone_number: self.phone_number,
            diagnosis: self.diagnosis,
            clinical_findings: self.clinical_findings,
            next_visit_date: self.next_visit_date,
            doctor_comments: self.doctor_comments,
            status: self.status,
        }
    }
}

impl From<&PatientRecord> for RecordDraft {
    fn from(record: &PatientRecord) -> Self {
        Self {
            hospital_id: record.hospital_id.clone(),
            visit_date: record.visit_date.clone(),
            patient_name: record.patient_name.clone(),
            phone_number: record.phone_number.clone(),
            diagnosis: record.diagnosis.clone(),
            clinical_findings: record.clinical_findings.clone(),
            next_visit_date: record.next_visit_date.clone(),
            doctor_comments: record.doctor_comments.clone(),
            status: record.status,
        }
    }
}

/// Partial update of a record. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    pub hospital_id: Option<String>,
    pub visit_date: Option<String>,
    pub patient_name: Option<String>,
    pub phone_number: Option<String>,
    pub diagnosis: Option<String>,
    pub clinical_findings: Option<String>,
    pub next_visit_date: Option<String>,
    pub doctor_comments: Option<String>,
    pub status: Option<RecordStatus>,
}

impl RecordPatch {
    /// Inline edit of the next-visit cell.
    pub fn next_visit_date(date: impl Into<String>) -> Self {
        Self {
            next_visit_date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Inline edit of the doctor's comments cell.
    pub fn doctor_comments(comments: impl Into<String>) -> Self {
        Self {
            doctor_comments: Some(comments.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set fields that would blank a required field of the record.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("patientName", &self.patient_name),
            ("hospitalId", &self.hospital_id),
            ("visitDate", &self.visit_date),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    /// Set date fields that are not `YYYY-MM-DD`. Clearing the next-visit
    /// date is allowed.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("visitDate", &self.visit_date),
            ("nextVisitDate", &self.next_visit_date),
        ]
        .into_iter()
        .filter(|(_, value)| {
            value
                .as_deref()
                .is_some_and(|v| !v.trim().is_empty() && !is_iso_date(v))
        })
        .map(|(name, _)| name)
        .collect()
    }

    /// Merge the set fields into `record`.
    pub fn apply_to(self, record: &mut PatientRecord) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut record.hospital_id, self.hospital_id);
        merge(&mut record.visit_date, self.visit_date);
        merge(&mut record.patient_name, self.patient_name);
        merge(&mut record.phone_number, self.phone_number);
        merge(&mut record.diagnosis, self.diagnosis);
        merge(&mut record.clinical_findings, self.clinical_findings);
        merge(&mut record.next_visit_date, self.next_visit_date);
        merge(&mut record.doctor_comments, self.doctor_comments);
        merge(&mut record.status, self.status);
    }
}
