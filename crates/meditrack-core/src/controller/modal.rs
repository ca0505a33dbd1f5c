//! Edit/modal flow state.

use crate::models::{HospitalDraft, RecordDraft};

/// Record form state: `Closed`, or open on a draft that is either new or a
/// copy of the record being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordModal {
    #[default]
    Closed,
    Open {
        /// ID of the record being edited; `None` for a new record
        editing: Option<String>,
        draft: RecordDraft,
    },
}

impl RecordModal {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// ID of the record being edited.
    pub fn editing(&self) -> Option<&str> {
        match self {
            Self::Open { editing, .. } => editing.as_deref(),
            Self::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&RecordDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut RecordDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Form heading.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Open { editing: Some(_), .. } => Some("Edit Patient Record"),
            Self::Open { editing: None, .. } => Some("New Patient Record"),
            Self::Closed => None,
        }
    }
}

/// Hospital management form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HospitalModal {
    #[default]
    Closed,
    Open { draft: HospitalDraft },
}

impl HospitalModal {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn draft(&self) -> Option<&HospitalDraft> {
        match self {
            Self::Open { draft } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut HospitalDraft> {
        match self {
            Self::Open { draft } => Some(draft),
            Self::Closed => None,
        }
    }
}
