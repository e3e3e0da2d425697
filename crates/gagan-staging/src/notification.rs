//! Single-slot, auto-expiring notification channel.
//!
//! [`NotificationChannel`] holds at most one message. Publishing
//! replaces whatever is showing and hands back a fresh
//! [`ExpiryTicket`]; only the holder of the current ticket can expire
//! the message, so a timer started for an older message is a no-op
//! once something newer has been published.
//!
//! The channel does no scheduling of its own. Callers either pass the
//! ticket to a timer ([`expire`](NotificationChannel::expire)) or poll
//! with a clock ([`expire_elapsed`](NotificationChannel::expire_elapsed)).

use std::time::Duration;

use web_time::Instant;

use crate::types::{DEFAULT_NOTICE_TTL, StagingConfig};

/// Anything that can show a short message to the user.
///
/// The staging modal reports through this seam so it does not care
/// whether the message lands in a signal, a test recorder, or a bare
/// [`NotificationChannel`].
pub trait Notify {
    /// Show `text`, replacing any message currently visible.
    fn notify(&mut self, text: String);
}

/// Identifies one publish. Invalidated by the next publish or a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryTicket(u64);

/// The message currently occupying the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    text: String,
    created_at: Instant,
    ticket: ExpiryTicket,
}

impl Notification {
    /// Message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ticket that expires this message.
    #[must_use]
    pub const fn ticket(&self) -> ExpiryTicket {
        self.ticket
    }
}

/// Latest-wins feedback slot. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    slot: Option<Notification>,
    next_ticket: u64,
    ttl: Duration,
}

impl NotificationChannel {
    /// An empty channel whose messages live for `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            slot: None,
            next_ticket: 0,
            ttl,
        }
    }

    /// An empty channel using the configured lifetime.
    #[must_use]
    pub const fn from_config(config: &StagingConfig) -> Self {
        Self::new(config.notice_ttl)
    }

    /// How long each message stays visible.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Publish `text` now. See [`publish_at`](Self::publish_at).
    pub fn publish(&mut self, text: impl Into<String>) -> ExpiryTicket {
        self.publish_at(text, Instant::now())
    }

    /// Replace the slot with `text`, stamped at `now`.
    ///
    /// Returns the ticket for the new message. Every previously issued
    /// ticket stops working.
    pub fn publish_at(&mut self, text: impl Into<String>, now: Instant) -> ExpiryTicket {
        let ticket = ExpiryTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.slot = Some(Notification {
            text: text.into(),
            created_at: now,
            ticket,
        });
        ticket
    }

    /// The visible message, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.slot.as_ref()
    }

    /// Whether a message is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.slot.is_some()
    }

    /// Ticket of the visible message, if any.
    #[must_use]
    pub fn ticket(&self) -> Option<ExpiryTicket> {
        self.slot.as_ref().map(Notification::ticket)
    }

    /// When the visible message is due to disappear.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.slot.as_ref().map(|n| n.created_at + self.ttl)
    }

    /// Clear the message if `ticket` still belongs to it.
    ///
    /// Returns `true` if a message was cleared.
    pub fn expire(&mut self, ticket: ExpiryTicket) -> bool {
        if self.ticket() == Some(ticket) {
            self.slot = None;
            true
        } else {
            false
        }
    }

    /// Clear the message if its time is up at `now`.
    ///
    /// Returns `true` if a message was cleared.
    pub fn expire_elapsed(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the visible message unconditionally.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notify for NotificationChannel {
    fn notify(&mut self, text: String) {
        self.publish(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3);

    #[test]
    fn publish_makes_message_visible() {
        let mut channel = NotificationChannel::new(TTL);
        assert!(!channel.is_visible());

        channel.publish("hello");
        assert!(channel.is_visible());
        assert_eq!(channel.current().map(Notification::text), Some("hello"));
    }

    #[test]
    fn message_clears_after_ttl() {
        let t0 = Instant::now();
        let mut channel = NotificationChannel::new(TTL);
        channel.publish_at("hello", t0);

        assert!(!channel.expire_elapsed(t0 + Duration::from_millis(2999)));
        assert!(channel.is_visible());
        assert!(channel.expire_elapsed(t0 + TTL));
        assert!(!channel.is_visible());
    }

    #[test]
    fn second_publish_replaces_and_resets_countdown() {
        let t0 = Instant::now();
        let mut channel = NotificationChannel::new(TTL);
        channel.publish_at("first", t0);
        channel.publish_at("second", t0 + Duration::from_secs(2));

        assert_eq!(channel.current().map(Notification::text), Some("second"));

        // The first message's deadline has passed, the second's has not.
        assert!(!channel.expire_elapsed(t0 + Duration::from_secs(4)));
        assert_eq!(channel.current().map(Notification::text), Some("second"));

        assert!(channel.expire_elapsed(t0 + Duration::from_secs(5)));
        assert!(channel.current().is_none());
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_message() {
        let mut channel = NotificationChannel::new(TTL);
        let first = channel.publish("first");
        let second = channel.publish("second");
        assert_ne!(first, second);

        assert!(!channel.expire(first));
        assert_eq!(channel.current().map(Notification::text), Some("second"));

        assert!(channel.expire(second));
        assert!(!channel.is_visible());
        // Expiring twice is harmless.
        assert!(!channel.expire(second));
    }

    #[test]
    fn ticket_issued_before_clear_stays_dead() {
        let mut channel = NotificationChannel::new(TTL);
        let ticket = channel.publish("gone");
        channel.clear();
        let fresh = channel.publish("fresh");

        assert!(!channel.expire(ticket));
        assert_eq!(channel.ticket(), Some(fresh));
    }

    #[test]
    fn deadline_follows_latest_publish() {
        let t0 = Instant::now();
        let mut channel = NotificationChannel::new(TTL);
        assert_eq!(channel.deadline(), None);

        channel.publish_at("a", t0);
        assert_eq!(channel.deadline(), Some(t0 + TTL));

        let t1 = t0 + Duration::from_secs(1);
        channel.publish_at("b", t1);
        assert_eq!(channel.deadline(), Some(t1 + TTL));
    }

    #[test]
    fn notify_publishes() {
        let mut channel = NotificationChannel::default();
        channel.notify("via trait".to_owned());
        assert_eq!(channel.current().map(Notification::text), Some("via trait"));
        assert_eq!(channel.ttl(), TTL);
    }
}
