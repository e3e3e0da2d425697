//! Browser-side handle to the notification channel.
//!
//! The app creates one [`Notifier`] at the root with [`use_notifier`]
//! and passes it down as a prop to every component that publishes or
//! renders messages. Nothing looks it up globally.

use std::time::Duration;

use dioxus::prelude::*;
use gagan_staging::{ExpiryTicket, NotificationChannel, Notify};

/// Cheap, `Copy` handle to the shared [`NotificationChannel`].
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    channel: Signal<NotificationChannel>,
}

impl Notifier {
    /// Wrap an existing channel signal.
    #[must_use]
    pub const fn new(channel: Signal<NotificationChannel>) -> Self {
        Self { channel }
    }

    /// The underlying signal, for components that render the message.
    #[must_use]
    pub const fn channel(&self) -> Signal<NotificationChannel> {
        self.channel
    }

    /// Replace the visible message with `text`.
    ///
    /// Expiry is scheduled by the `NotificationBanner` observing the
    /// channel, so publishing works from any event handler.
    pub fn publish(&mut self, text: impl Into<String>) -> ExpiryTicket {
        let text = text.into();
        web_sys::console::log_1(&format!("notice: {text}").into());
        self.channel.write().publish(text)
    }
}

impl Notify for Notifier {
    fn notify(&mut self, text: String) {
        self.publish(text);
    }
}

/// Create the application's notifier. Call once, at the root component.
pub fn use_notifier(ttl: Duration) -> Notifier {
    let channel = use_signal(|| NotificationChannel::new(ttl));
    Notifier::new(channel)
}
