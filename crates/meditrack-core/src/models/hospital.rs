//! Hospital models.

use serde::{Deserialize, Serialize};

/// Presentation tag assigned to hospitals created through the add flow.
pub const DEFAULT_HOSPITAL_COLOR: &str = "bg-blue-500";

/// A hospital or clinic that patient visits are recorded against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hospital {
    /// Unique ID, immutable after creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text location, may be empty
    #[serde(default)]
    pub location: String,
    /// Presentation tag (no meaning to the core)
    #[serde(default)]
    pub color: String,
}

impl Hospital {
    /// Create a hospital from a validated draft with a fresh ID.
    pub fn new(draft: HospitalDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            location: draft.location,
            color: DEFAULT_HOSPITAL_COLOR.to_string(),
        }
    }
}

/// Contents of the "add hospital" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HospitalDraft {
    pub name: String,
    pub location: String,
}

impl HospitalDraft {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.name.trim().is_empty() {
            vec!["name"]
        } else {
            Vec::new()
        }
    }
}
