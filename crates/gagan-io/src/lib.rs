//! gagan-io: Browser I/O and Dioxus component library.
//!
//! Bridges browser file events into the `gagan-staging` state
//! machines, schedules notification expiry, and provides the upload
//! components for the gagan web application.

pub mod components;
pub mod file;
pub mod notifier;

pub use components::{FileStagingModal, NotificationBanner, UploadTrigger};
pub use notifier::{Notifier, use_notifier};
