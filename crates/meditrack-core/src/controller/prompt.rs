//! User-facing collaborators the controller calls back into.

/// Blocking yes/no confirmation and notices, supplied by the front end.
pub trait Prompt {
    /// Ask the user to confirm a destructive action.
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking notice (e.g. a failed validation).
    fn notify(&self, message: &str);
}

/// Prompt for hosts that confirm before calling in. Approves everything and
/// drops notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreConfirmed;

impl Prompt for PreConfirmed {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn notify(&self, _message: &str) {}
}

/// Confirmation text for deleting a record.
pub const CONFIRM_DELETE_RECORD: &str = "Are you sure you want to delete this record?";

/// Confirmation text for deleting a hospital.
pub const CONFIRM_DELETE_HOSPITAL: &str =
    "Delete this hospital? Associated records will remain but may need reassignment.";

/// Notice shown when a record form is missing required fields.
pub const NOTICE_REQUIRED_FIELDS: &str = "Please fill in required fields";

/// Notice shown when a record form has a date not written as `YYYY-MM-DD`.
pub const NOTICE_INVALID_DATES: &str = "Please enter dates as YYYY-MM-DD";
