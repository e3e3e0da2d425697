//! Modal dialog that stages one file for upload.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdUpload, LdX};
use gagan_staging::{AcceptFormat, FormatPolicy, OfferSource, StagedFile, StagingModal};

use crate::file::{log_offer, log_rejection, stage_files};
use crate::notifier::Notifier;

/// Props for the [`FileStagingModal`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileStagingModalProps {
    /// Accepted formats, used for the picker filter and the hint text.
    accept_format: AcceptFormat,
    /// Whether drops are checked against `accept_format` too.
    #[props(default)]
    policy: FormatPolicy,
    /// Visibility, owned by the container.
    is_open: bool,
    /// Asks the container to hide the dialog.
    on_close: EventHandler<()>,
    /// Receives the confirmed file, exactly once per successful confirm.
    on_upload: EventHandler<StagedFile<FileData>>,
    /// Where validation feedback is published.
    notifier: Notifier,
}

/// Drop zone border/background for the current drag state.
#[must_use]
pub const fn drop_zone_class(drag_active: bool) -> &'static str {
    if drag_active {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    }
}

/// Confirm button styling for the enabled/disabled state.
#[must_use]
pub const fn confirm_class(enabled: bool) -> &'static str {
    if enabled {
        "bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] text-white shadow-md"
    } else {
        "bg-[var(--btn-disabled)] text-[var(--text-disabled)] cursor-not-allowed"
    }
}

/// Line under the drop prompt: the staged file, or what is accepted.
#[must_use]
pub fn hint_text(staged: Option<&str>, accept: &AcceptFormat) -> String {
    match staged {
        Some(name) => format!("Selected: {name}"),
        None if accept.accepts_anything() => "Any file type".to_owned(),
        None => format!("Accepted format: {accept}"),
    }
}

/// Upload dialog with a drag-and-drop zone, a file picker, and a
/// confirm button.
///
/// The picker and the drop zone feed the same staging transition; only
/// the first file of either is kept. Confirm is disabled until a file
/// is staged. On confirm the file goes to `on_upload` and `on_close` is
/// called; the close button discards the file without uploading.
#[component]
pub fn FileStagingModal(props: FileStagingModalProps) -> Element {
    let FileStagingModalProps {
        accept_format,
        policy,
        is_open,
        on_close,
        on_upload,
        notifier,
    } = props;

    let mut modal = use_signal(|| StagingModal::<FileData>::new(accept_format.clone(), policy));

    // Follow the container's flag. Closing releases the staged handle,
    // reopening starts empty.
    use_effect(use_reactive((&is_open,), move |(is_open,)| {
        modal.write().sync_visibility(is_open);
    }));

    if !is_open {
        return rsx! {};
    }

    let handle_files = move |evt: FormEvent| {
        let files = stage_files(evt.files());
        log_offer(OfferSource::Browse, &files);
        let mut notices = notifier;
        if let Err(err) = modal.write().select_candidate(files, &mut notices) {
            log_rejection(&err);
        }
    };

    let handle_drop = move |evt: DragEvent| {
        // Keep the browser from navigating to the dropped file.
        evt.prevent_default();
        let files = stage_files(evt.files());
        log_offer(OfferSource::Drop, &files);
        let mut notices = notifier;
        if let Err(err) = modal.write().drop_files(files, &mut notices) {
            log_rejection(&err);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut notices = notifier;
        let mut uploader = |file: StagedFile<FileData>| {
            web_sys::console::log_1(&format!("confirmed upload: {}", file.name()).into());
            on_upload.call(file);
        };
        let result = modal.write().confirm(&mut uploader, &mut notices);
        match result {
            Ok(()) => on_close.call(()),
            Err(err) => log_rejection(&err),
        }
    };

    let handle_cancel = move |_| {
        modal.write().cancel();
        on_close.call(());
    };

    let state = modal.read();
    let hint = hint_text(state.candidate().map(StagedFile::name), &accept_format);
    let zone_class = drop_zone_class(state.is_drag_active());
    let can_confirm = state.can_confirm();
    let button_class = confirm_class(can_confirm);
    drop(state);

    rsx! {
        // Overlay
        div { class: "fixed inset-0 bg-black/70 flex items-center justify-center p-4 z-50 backdrop-blur-sm",
            div {
                class: "bg-[var(--surface)] rounded-xl shadow-2xl w-full max-w-lg mx-auto p-6",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "upload-modal-title",

                // Header
                div { class: "flex justify-between items-start border-b border-[var(--border)] pb-3 mb-4",
                    h3 {
                        id: "upload-modal-title",
                        class: "text-xl font-bold text-[var(--text-heading)]",
                        "Select Configuration Data File"
                    }
                    button {
                        r#type: "button",
                        class: "p-2 rounded-full text-[var(--muted)] hover:bg-[var(--surface-active)] transition-colors",
                        aria_label: "Close upload modal",
                        onclick: handle_cancel,
                        Icon { width: 20, height: 20, icon: LdX }
                    }
                }

                form { onsubmit: handle_submit,
                    label {
                        class: "block mb-6 cursor-pointer",
                        ondragover: move |evt: DragEvent| {
                            evt.prevent_default();
                            modal.write().drag_over();
                        },
                        ondragleave: move |evt: DragEvent| {
                            evt.prevent_default();
                            modal.write().drag_leave();
                        },
                        ondrop: handle_drop,

                        div { class: "w-full p-8 border-2 border-dashed rounded-lg text-center transition-colors {zone_class}",
                            div { class: "flex justify-center mb-3 text-[var(--accent)]",
                                Icon { width: 40, height: 40, icon: LdUpload }
                            }
                            p { class: "text-sm font-semibold text-[var(--text-secondary)]",
                                "Drag and drop your file here, or "
                                span { class: "text-[var(--accent)] font-bold underline", "browse" }
                            }
                            p { class: "text-xs text-[var(--muted)] mt-1", "{hint}" }
                        }
                        input {
                            r#type: "file",
                            accept: "{accept_format}",
                            class: "hidden",
                            onchange: handle_files,
                        }
                    }

                    div { class: "flex justify-end pt-2",
                        button {
                            r#type: "submit",
                            disabled: !can_confirm,
                            class: "py-2 px-6 rounded-xl font-semibold transition-colors {button_class}",
                            "Confirm Upload"
                        }
                    }
                }
            }
        }
    }
}
