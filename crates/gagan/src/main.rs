use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdSatellite;
use gagan_io::{NotificationBanner, UploadTrigger, use_notifier};
use gagan_staging::{StagedFile, StagingConfig};

fn main() {
    dioxus::launch(app);
}

/// Acknowledgement shown once the uploader has taken the file.
fn upload_started_message(name: &str) -> String {
    format!("File selected and simulation of upload started: {name}")
}

/// Console line recorded when a confirmed file reaches the uploader.
fn hand_off_line<H>(file: &StagedFile<H>) -> String {
    format!(
        "upload hand-off: {} ({} bytes, .{} {:?})",
        file.name(),
        file.size(),
        file.extension().unwrap_or("?"),
        file.media_type()
    )
}

/// Root application component.
///
/// Creates the notification channel once and hands it to both the
/// upload trigger (publisher) and the banner (renderer).
fn app() -> Element {
    let config = use_hook(StagingConfig::default);
    let mut notifier = use_notifier(config.notice_ttl);

    // --- Uploader collaborator ---
    // The single hand-off point for a confirmed file. Network transfer
    // is not implemented; the file is acknowledged and released.
    let on_confirmed_upload = move |file: StagedFile<FileData>| {
        web_sys::console::log_1(&hand_off_line(&file).into());
        notifier.publish(upload_started_message(file.name()));
    };

    // --- Layout ---
    rsx! {
        // Tailwind CSS utilities, compiled by build.rs.
        style { dangerous_inner_html: include_str!(env!("TAILWIND_CSS_PATH")) }
        style { dangerous_inner_html: include_str!("../theme.css") }

        div { class: "min-h-screen bg-(--bg) text-(--text) flex flex-col",
            // Header
            header { class: "px-6 py-4 border-b border-(--border) bg-(--surface)",
                h1 { class: "text-2xl font-bold flex items-center gap-2",
                    span { class: "text-(--accent)",
                        Icon { width: 32, height: 32, icon: LdSatellite }
                    }
                    "Gagan-Yatri"
                }
                p { class: "text-(--muted) text-sm",
                    "Mission configuration upload"
                }
            }

            // Main content area
            main { class: "flex-1 flex items-center justify-center p-6",
                div { class: "w-full max-w-sm",
                    UploadTrigger {
                        config: config.clone(),
                        notifier,
                        on_confirmed_upload,
                    }
                }
            }

            NotificationBanner { notifier }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgement_names_the_file() {
        assert_eq!(
            upload_started_message("config.cdf"),
            "File selected and simulation of upload started: config.cdf"
        );
    }

    #[test]
    fn hand_off_line_reports_extension() {
        let file = StagedFile::new("config.cdf", 2048, "application/x-cdf", ());
        assert_eq!(
            hand_off_line(&file),
            "upload hand-off: config.cdf (2048 bytes, .cdf \"application/x-cdf\")"
        );
        let bare = StagedFile::new("README", 1, "", ());
        assert_eq!(hand_off_line(&bare), "upload hand-off: README (1 bytes, .? \"\")");
    }
}
