//! Integration test: drive the trigger, modal and notification channel
//! together the way the browser components do.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use gagan_staging::{
    AcceptFormat, FormatPolicy, ModalState, Notification, NotificationChannel, StagedFile,
    StagingConfig, StagingModal, UploadTrigger,
};
use web_time::Instant;

/// Host handle stand-in: just an id.
type Handle = u32;

/// Everything the upload button owns, wired like the Dioxus tree.
struct Dialog {
    trigger: UploadTrigger,
    modal: StagingModal<Handle>,
    notices: NotificationChannel,
    uploaded: Vec<StagedFile<Handle>>,
}

impl Dialog {
    fn new(policy: FormatPolicy) -> Self {
        let config = StagingConfig {
            policy,
            ..StagingConfig::default()
        };
        Self {
            trigger: UploadTrigger::new(),
            modal: StagingModal::from_config(&config),
            notices: NotificationChannel::from_config(&config),
            uploaded: Vec::new(),
        }
    }

    fn open(&mut self) {
        self.trigger.open_modal();
        self.modal.sync_visibility(self.trigger.is_modal_open());
    }

    fn close(&mut self) {
        self.trigger.close_modal();
        self.modal.sync_visibility(self.trigger.is_modal_open());
    }

    fn cancel(&mut self) {
        self.modal.cancel();
        self.close();
    }

    fn confirm(&mut self) -> bool {
        let uploaded = &mut self.uploaded;
        let ok = self
            .modal
            .confirm(&mut |file| uploaded.push(file), &mut self.notices)
            .is_ok();
        if ok {
            self.close();
        }
        ok
    }

    fn notice_text(&self) -> Option<&str> {
        self.notices.current().map(Notification::text)
    }
}

fn cdf(name: &str, size: u64, id: Handle) -> StagedFile<Handle> {
    StagedFile::new(name, size, "", id)
}

#[test]
fn scenario_a_browse_then_confirm() {
    let mut dialog = Dialog::new(FormatPolicy::Advisory);
    dialog.open();

    dialog
        .modal
        .select_candidate(vec![cdf("config.cdf", 2048, 7)], &mut dialog.notices)
        .unwrap();
    assert!(dialog.modal.can_confirm());

    assert!(dialog.confirm());

    assert_eq!(dialog.uploaded.len(), 1);
    let file = &dialog.uploaded[0];
    assert_eq!(file.name(), "config.cdf");
    assert_eq!(file.size(), 2048);
    assert_eq!(*file.handle(), 7);

    assert_eq!(dialog.modal.state(), &ModalState::Closed);
    assert!(!dialog.trigger.is_modal_open());
}

#[test]
fn scenario_b_drop_two_files_keeps_first() {
    let mut dialog = Dialog::new(FormatPolicy::Advisory);
    dialog.open();

    dialog.modal.drag_over();
    dialog
        .modal
        .drop_files(
            vec![cdf("a.cdf", 10, 1), cdf("b.cdf", 20, 2)],
            &mut dialog.notices,
        )
        .unwrap();

    let staged = dialog.modal.candidate().expect("a file should be staged");
    assert_eq!(staged.name(), "a.cdf");
    assert_eq!(*staged.handle(), 1);
    assert!(!dialog.modal.is_drag_active());
}

#[test]
fn scenario_c_confirm_without_selection() {
    let mut dialog = Dialog::new(FormatPolicy::Advisory);
    dialog.open();

    assert!(!dialog.confirm());

    assert!(dialog.uploaded.is_empty());
    assert_eq!(dialog.notice_text(), Some("Please select a file to upload."));
    assert_eq!(dialog.modal.state(), &ModalState::OpenEmpty);
    assert!(dialog.trigger.is_modal_open());
}

#[test]
fn scenario_d_candidate_not_retained_across_reopen() {
    let mut dialog = Dialog::new(FormatPolicy::Advisory);
    dialog.open();
    dialog
        .modal
        .select_candidate(vec![cdf("x.cdf", 1, 3)], &mut dialog.notices)
        .unwrap();

    dialog.cancel();
    assert!(dialog.uploaded.is_empty());
    assert_eq!(dialog.modal.state(), &ModalState::Closed);

    dialog.open();
    assert!(dialog.modal.candidate().is_none());
    assert_eq!(dialog.modal.state(), &ModalState::OpenEmpty);
}

#[test]
fn double_open_keeps_staged_file() {
    let mut dialog = Dialog::new(FormatPolicy::Advisory);
    dialog.open();
    dialog
        .modal
        .select_candidate(vec![cdf("keep.cdf", 1, 4)], &mut dialog.notices)
        .unwrap();

    dialog.open();
    assert_eq!(dialog.modal.candidate().map(StagedFile::name), Some("keep.cdf"));
}

#[test]
fn enforced_policy_reports_rejected_drop() {
    let mut dialog = Dialog::new(FormatPolicy::Enforced);
    dialog.open();

    let result = dialog
        .modal
        .drop_files(vec![StagedFile::new("notes.txt", 5, "text/plain", 9)], &mut dialog.notices);

    assert!(result.is_err());
    assert!(dialog.modal.candidate().is_none());
    assert!(
        dialog
            .notice_text()
            .is_some_and(|text| text.starts_with("Unsupported file type: notes.txt")),
        "got {:?}",
        dialog.notice_text()
    );
    assert_eq!(dialog.modal.accept_format(), &AcceptFormat::new(".cdf"));
}

#[test]
fn rejection_notice_replaced_by_later_message() {
    let t0 = Instant::now();
    let mut dialog = Dialog::new(FormatPolicy::Advisory);
    dialog.open();

    // Confirm with nothing staged, then a second message one second later.
    assert!(!dialog.confirm());
    let stale = dialog.notices.ticket().unwrap();
    dialog.notices.publish_at("File selected", t0 + Duration::from_secs(1));

    assert_eq!(dialog.notice_text(), Some("File selected"));
    assert!(!dialog.notices.expire(stale));
    assert!(!dialog.notices.expire_elapsed(t0 + Duration::from_secs(3)));
    assert!(dialog.notices.expire_elapsed(t0 + Duration::from_secs(4)));
    assert!(dialog.notice_text().is_none());
}
