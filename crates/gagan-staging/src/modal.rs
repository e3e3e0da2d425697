//! The file-staging modal state machine.
//!
//! ```text
//!            open()                 offer(files)
//!  Closed ───────────▶ OpenEmpty ─────────────────▶ OpenStaged
//!    ▲                    │  ▲                          │  ▲ │
//!    │   cancel()/close() │  └──── offer([]) ───────────┘  │ │ offer(files)
//!    ├────────────────────┘                                └─┘
//!    │            confirm() / cancel() / close()            │
//!    └──────────────────────────────────────────────────────┘
//! ```
//!
//! Picker selection and drag-and-drop both arrive as a
//! [`CandidateOffer`] and go through the same transition. Drag hover
//! is tracked separately and never changes the state.

use crate::notification::Notify;
use crate::types::{AcceptFormat, FormatPolicy, StagedFile, StagingConfig, StagingError};

/// Receives the confirmed file. The single hand-off point to whatever
/// performs the actual transfer.
pub trait Uploader<H> {
    /// Take ownership of the confirmed file.
    fn upload(&mut self, file: StagedFile<H>);
}

impl<H, F> Uploader<H> for F
where
    F: FnMut(StagedFile<H>),
{
    fn upload(&mut self, file: StagedFile<H>) {
        self(file);
    }
}

/// Where an offer came from. Only used for diagnostics; both sources
/// are handled identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferSource {
    /// The file picker (`<input type="file">`).
    Browse,
    /// A drag-and-drop onto the drop zone.
    Drop,
}

/// One or more files offered to the modal at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOffer<H> {
    /// Where the files came from.
    pub source: OfferSource,
    /// Files in the order the host listed them. Only the first is kept.
    pub files: Vec<StagedFile<H>>,
}

/// Lifecycle of the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState<H> {
    /// Not shown; holds nothing.
    Closed,
    /// Shown, nothing staged.
    OpenEmpty,
    /// Shown, one file staged.
    OpenStaged(StagedFile<H>),
}

// Manual impl: the derive would demand `H: Default`.
impl<H> Default for ModalState<H> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<H> ModalState<H> {
    /// Whether the modal is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// The file-staging dialog. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct StagingModal<H> {
    accept: AcceptFormat,
    policy: FormatPolicy,
    state: ModalState<H>,
    drag_active: bool,
}

impl<H> StagingModal<H> {
    /// A closed modal accepting `accept` under `policy`.
    #[must_use]
    pub const fn new(accept: AcceptFormat, policy: FormatPolicy) -> Self {
        Self {
            accept,
            policy,
            state: ModalState::Closed,
            drag_active: false,
        }
    }

    /// A closed modal built from the dialog configuration.
    #[must_use]
    pub fn from_config(config: &StagingConfig) -> Self {
        Self::new(config.accept_format.clone(), config.policy)
    }

    /// The accepted-format constraint.
    #[must_use]
    pub const fn accept_format(&self) -> &AcceptFormat {
        &self.accept
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &ModalState<H> {
        &self.state
    }

    /// Whether the modal is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The staged file, if any.
    #[must_use]
    pub const fn candidate(&self) -> Option<&StagedFile<H>> {
        match &self.state {
            ModalState::OpenStaged(file) => Some(file),
            ModalState::Closed | ModalState::OpenEmpty => None,
        }
    }

    /// Whether confirm would go through. Drives the confirm button's
    /// enabled state.
    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        self.candidate().is_some()
    }

    /// Whether a drag is hovering over the drop zone.
    #[must_use]
    pub const fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Show the modal with nothing staged. Any stale candidate is dropped.
    pub fn open(&mut self) {
        self.state = ModalState::OpenEmpty;
        self.drag_active = false;
    }

    /// Hide the modal and release the staged file without uploading it.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.drag_active = false;
    }

    /// User dismissed the dialog. Same as [`close`](Self::close).
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Follow a visibility flag owned by the container.
    ///
    /// Opens when `is_open` becomes true and closes when it becomes
    /// false. Does nothing if the modal already agrees, so a staged
    /// file survives repeated syncs.
    pub fn sync_visibility(&mut self, is_open: bool) {
        match (is_open, self.is_open()) {
            (true, false) => self.open(),
            (false, true) => self.close(),
            _ => {}
        }
    }

    /// A drag entered or moved over the drop zone.
    pub const fn drag_over(&mut self) {
        self.drag_active = true;
    }

    /// A drag left the drop zone.
    pub const fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Files chosen through the picker.
    ///
    /// # Errors
    ///
    /// See [`offer`](Self::offer).
    pub fn select_candidate<N>(
        &mut self,
        files: Vec<StagedFile<H>>,
        notices: &mut N,
    ) -> Result<(), StagingError>
    where
        N: Notify + ?Sized,
    {
        self.offer(
            CandidateOffer {
                source: OfferSource::Browse,
                files,
            },
            notices,
        )
    }

    /// Files dropped onto the drop zone. Clears the drag hover.
    ///
    /// The browser layer must have prevented the default navigation
    /// before calling this.
    ///
    /// # Errors
    ///
    /// See [`offer`](Self::offer).
    pub fn drop_files<N>(
        &mut self,
        files: Vec<StagedFile<H>>,
        notices: &mut N,
    ) -> Result<(), StagingError>
    where
        N: Notify + ?Sized,
    {
        self.drag_active = false;
        self.offer(
            CandidateOffer {
                source: OfferSource::Drop,
                files,
            },
            notices,
        )
    }

    /// Stage the first offered file, replacing any earlier candidate.
    ///
    /// An empty offer (the host gave us nothing, e.g. the picker was
    /// dismissed or access was denied) leaves the modal open with
    /// nothing staged.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError::ModalClosed`] if the modal is closed; the
    /// offer is ignored. Under [`FormatPolicy::Enforced`], returns
    /// [`StagingError::UnsupportedFormat`] when the first file does not
    /// match the accepted format; the message is published to
    /// `notices` and the previous candidate is kept.
    pub fn offer<N>(&mut self, offer: CandidateOffer<H>, notices: &mut N) -> Result<(), StagingError>
    where
        N: Notify + ?Sized,
    {
        if !self.is_open() {
            return Err(StagingError::ModalClosed);
        }

        let Some(file) = offer.files.into_iter().next() else {
            self.state = ModalState::OpenEmpty;
            return Ok(());
        };

        if self.policy == FormatPolicy::Enforced && !self.accept.accepts(&file) {
            let err = StagingError::UnsupportedFormat {
                name: file.name().to_owned(),
                accept: self.accept.to_string(),
            };
            notices.notify(err.to_string());
            return Err(err);
        }

        self.state = ModalState::OpenStaged(file);
        Ok(())
    }

    /// Hand the staged file to `uploader` and close.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError::NoFileSelected`] if nothing is staged. The
    /// message is published to `notices` and the modal stays open.
    /// Returns [`StagingError::ModalClosed`] if the modal is closed.
    pub fn confirm<U, N>(&mut self, uploader: &mut U, notices: &mut N) -> Result<(), StagingError>
    where
        U: Uploader<H> + ?Sized,
        N: Notify + ?Sized,
    {
        match std::mem::take(&mut self.state) {
            ModalState::OpenStaged(file) => {
                self.drag_active = false;
                uploader.upload(file);
                Ok(())
            }
            ModalState::OpenEmpty => {
                self.state = ModalState::OpenEmpty;
                let err = StagingError::NoFileSelected;
                notices.notify(err.to_string());
                Err(err)
            }
            ModalState::Closed => Err(StagingError::ModalClosed),
        }
    }
}

impl<H> Default for StagingModal<H> {
    fn default() -> Self {
        Self::new(AcceptFormat::default(), FormatPolicy::default())
    }
}
