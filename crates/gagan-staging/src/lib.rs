//! gagan-staging: the upload dialog's state machines (sans-IO).
//!
//! A modal that stages exactly one candidate file, validated against an
//! accepted-format pattern, and hands it to an uploader only on
//! confirmation. Feedback goes through a single-slot, auto-expiring
//! notification channel.
//!
//! This crate has **no browser dependencies** -- file handles are an
//! opaque type parameter and time is injected. Dioxus components and
//! timers live in `gagan-io`.

pub mod modal;
pub mod notification;
pub mod trigger;
pub mod types;

pub use modal::{CandidateOffer, ModalState, OfferSource, StagingModal, Uploader};
pub use notification::{ExpiryTicket, Notification, NotificationChannel, Notify};
pub use trigger::UploadTrigger;
pub use types::{
    AcceptFormat, DEFAULT_ACCEPT_FORMAT, DEFAULT_NOTICE_TTL, FormatPolicy, StagedFile,
    StagingConfig, StagingError,
};
