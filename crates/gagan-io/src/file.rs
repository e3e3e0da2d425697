//! Bridge from Dioxus file events to [`StagedFile`]s.
//!
//! The picker and drag-and-drop both hand over a `Vec<FileData>`; this
//! module turns them into the same offer so the modal has one code path.
//! File contents are never read here.

use dioxus::html::FileData;
use gagan_staging::{OfferSource, StagedFile, StagingError};

/// Wrap one host file without touching its bytes.
#[must_use]
pub fn stage_file(file: FileData) -> StagedFile<FileData> {
    let name = file.name();
    let size = file.size();
    let media_type = file.content_type().unwrap_or_default();
    StagedFile::new(name, size, media_type, file)
}

/// Wrap every file of an event, preserving the host's order.
#[must_use]
pub fn stage_files(files: Vec<FileData>) -> Vec<StagedFile<FileData>> {
    files.into_iter().map(stage_file).collect()
}

/// Console line describing an offer, e.g. `drop: a.cdf (+1 ignored)`.
#[must_use]
pub fn describe_offer<H>(source: OfferSource, files: &[StagedFile<H>]) -> String {
    let origin = match source {
        OfferSource::Browse => "browse",
        OfferSource::Drop => "drop",
    };
    match files.split_first() {
        None => format!("{origin}: no file"),
        Some((first, [])) => format!("{origin}: {} ({} bytes)", first.name(), first.size()),
        Some((first, rest)) => format!(
            "{origin}: {} ({} bytes, +{} ignored)",
            first.name(),
            first.size(),
            rest.len()
        ),
    }
}

/// Log an offer to the browser console.
pub fn log_offer<H>(source: OfferSource, files: &[StagedFile<H>]) {
    web_sys::console::log_1(&describe_offer(source, files).into());
}

/// Log a rejected modal event. Closed-modal events are expected during
/// teardown and are not reported.
pub fn log_rejection(err: &StagingError) {
    if !matches!(err, StagingError::ModalClosed) {
        web_sys::console::warn_1(&format!("upload dialog: {err}").into());
    }
}
