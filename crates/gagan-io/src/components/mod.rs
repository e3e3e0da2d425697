//! Dioxus UI components for gagan.
//!
//! Provides the upload button, the file-staging modal it opens, and
//! the notification banner.

mod notification;
mod staging_modal;
mod upload_trigger;

pub use notification::NotificationBanner;
pub use staging_modal::FileStagingModal;
pub use upload_trigger::UploadTrigger;
