//! Visibility owner for the upload dialog.

/// Holds the "modal requested" flag for the upload button.
///
/// The modal follows this flag via
/// [`StagingModal::sync_visibility`](crate::StagingModal::sync_visibility).
/// Opening an already-open modal is a no-op, so a double click on the
/// button never wipes a staged file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadTrigger {
    modal_requested: bool,
}

impl UploadTrigger {
    /// A trigger with the modal closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modal_requested: false,
        }
    }

    /// Request the modal. Returns `true` if it was closed before.
    pub const fn open_modal(&mut self) -> bool {
        let changed = !self.modal_requested;
        self.modal_requested = true;
        changed
    }

    /// Dismiss the modal. Returns `true` if it was open before.
    pub const fn close_modal(&mut self) -> bool {
        let changed = self.modal_requested;
        self.modal_requested = false;
        changed
    }

    /// Whether the modal should be shown.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_requested
    }
}
