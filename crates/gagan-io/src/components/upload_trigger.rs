//! Upload button that owns the staging modal's visibility.

use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use gagan_staging::{StagedFile, StagingConfig, UploadTrigger as TriggerState};

use super::staging_modal::FileStagingModal;
use crate::notifier::Notifier;

/// Props for the [`UploadTrigger`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadTriggerProps {
    /// Accepted format and validation policy for the modal.
    config: StagingConfig,
    /// Passed through to the modal for validation feedback.
    notifier: Notifier,
    /// Receives each confirmed file. This is where a real transfer
    /// would start.
    on_confirmed_upload: EventHandler<StagedFile<FileData>>,
    /// Button label.
    #[props(default = "Upload CDF File".to_owned())]
    label: String,
}

/// Full-width upload button plus the modal it opens.
#[component]
pub fn UploadTrigger(props: UploadTriggerProps) -> Element {
    let mut trigger = use_signal(TriggerState::new);

    let open_modal = move |_| {
        trigger.write().open_modal();
    };
    let close_modal = move |()| {
        trigger.write().close_modal();
    };
    let label = props.label.clone();
    let is_open = trigger.read().is_modal_open();

    rsx! {
        div { class: "flex flex-col items-center justify-center",
            button {
                r#type: "button",
                class: "w-full bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] text-white font-medium py-3 px-4 rounded-xl flex items-center justify-center gap-2 transition-colors shadow-lg",
                onclick: open_modal,
                Icon { width: 20, height: 20, icon: LdUpload }
                "{label}"
            }

            FileStagingModal {
                accept_format: props.config.accept_format.clone(),
                policy: props.config.policy,
                is_open,
                on_close: close_modal,
                on_upload: props.on_confirmed_upload,
                notifier: props.notifier,
            }
        }
    }
}
