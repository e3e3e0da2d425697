//! Toast banner for the notification channel.

use std::time::Duration;

use dioxus::prelude::*;

use crate::notifier::Notifier;

/// Milliseconds for `TimeoutFuture`, saturating at `u32::MAX`.
#[must_use]
pub fn timeout_millis(ttl: Duration) -> u32 {
    u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX)
}

/// Tailwind classes that show or hide the banner.
#[must_use]
pub const fn visibility_class(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-4 pointer-events-none"
    }
}

/// Bottom-right toast showing the channel's current message.
///
/// Owns the expiry timer: each publish re-runs the resource below,
/// which drops the previous timer and starts a new one for the fresh
/// ticket. Unmounting the banner cancels any pending timer.
#[component]
pub fn NotificationBanner(notifier: Notifier) -> Element {
    let channel = notifier.channel();
    let ttl = timeout_millis(channel.peek().ttl());

    let _expiry = use_resource(move || async move {
        let mut channel = channel;
        let Some(ticket) = channel.read().ticket() else {
            return;
        };
        gloo_timers::future::TimeoutFuture::new(ttl).await;
        channel.write().expire(ticket);
    });

    let text = channel
        .read()
        .current()
        .map(|n| n.text().to_owned());
    let visibility = visibility_class(text.is_some());

    rsx! {
        div {
            class: "fixed bottom-5 right-5 p-4 rounded-lg shadow-2xl transition-all duration-300 z-[999] bg-[var(--notice-bg)] text-white {visibility}",
            role: "status",
            aria_live: "polite",
            if let Some(ref text) = text {
                p { "{text}" }
            }
        }
    }
}
