//! Shared types for the file-staging dialog.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a published notification stays visible.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Accepted format used by the upload trigger out of the box.
pub const DEFAULT_ACCEPT_FORMAT: &str = ".cdf";

/// A file the user picked or dropped, held by the modal until it is
/// confirmed or discarded.
///
/// `H` is the host's handle to the underlying file. The dialog never
/// reads through it; it is only passed on to the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile<H> {
    name: String,
    size: u64,
    media_type: String,
    handle: H,
}

impl<H> StagedFile<H> {
    /// Wrap a host file handle together with its metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
            handle,
        }
    }

    /// File name as reported by the host, including the extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// MIME type reported by the host. Empty when the host does not know.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Extension after the last `.`, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// The opaque host handle.
    #[must_use]
    pub const fn handle(&self) -> &H {
        &self.handle
    }
}

/// One token of an [`AcceptFormat`] pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AcceptToken {
    /// `.cdf` or `.tar.gz` -- matched as a suffix of the file name,
    /// leading dot included.
    Extension(String),
    /// `image/*` -- matched against the media type's top-level type.
    MediaWildcard(String),
    /// `application/json` -- matched against the full media type.
    Media(String),
}

impl AcceptToken {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.starts_with('.') {
            return Some(Self::Extension(raw.to_ascii_lowercase()));
        }
        match raw.split_once('/') {
            Some((top, "*")) => Some(Self::MediaWildcard(top.to_ascii_lowercase())),
            Some(_) => Some(Self::Media(raw.to_ascii_lowercase())),
            // A bare word is treated as an extension without the dot.
            None => Some(Self::Extension(format!(".{}", raw.to_ascii_lowercase()))),
        }
    }

    fn matches(&self, name: &str, media_type: &str) -> bool {
        match self {
            Self::Extension(suffix) => name
                .len()
                .checked_sub(suffix.len())
                .and_then(|start| name.get(start..))
                .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix)),
            Self::MediaWildcard(top) if top == "*" => true,
            Self::MediaWildcard(top) => media_type
                .split_once('/')
                .is_some_and(|(t, _)| t.eq_ignore_ascii_case(top)),
            Self::Media(full) => media_type.eq_ignore_ascii_case(full),
        }
    }
}

/// Accepted-format constraint in HTML `accept` attribute syntax.
///
/// A comma-separated list of `.ext`, `type/*`, or `type/subtype`
/// tokens, e.g. `".cdf, application/x-netcdf"`. An empty pattern
/// accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AcceptFormat {
    pattern: String,
    tokens: Vec<AcceptToken>,
}

impl AcceptFormat {
    /// Parse an `accept` pattern. Blank tokens are skipped.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let tokens = pattern.split(',').filter_map(AcceptToken::parse).collect();
        Self { pattern, tokens }
    }

    /// The pattern as given, suitable for an `<input accept=...>` attribute.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern places no restriction at all.
    #[must_use]
    pub fn accepts_anything(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether a file with this name and media type satisfies the pattern.
    #[must_use]
    pub fn matches(&self, name: &str, media_type: &str) -> bool {
        self.accepts_anything() || self.tokens.iter().any(|t| t.matches(name, media_type))
    }

    /// Convenience wrapper around [`matches`](Self::matches) for a staged file.
    #[must_use]
    pub fn accepts<H>(&self, file: &StagedFile<H>) -> bool {
        self.matches(file.name(), file.media_type())
    }
}

impl Default for AcceptFormat {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPT_FORMAT)
    }
}

impl From<String> for AcceptFormat {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<&str> for AcceptFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<AcceptFormat> for String {
    fn from(format: AcceptFormat) -> Self {
        format.pattern
    }
}

impl fmt::Display for AcceptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Whether dropped files are checked against the [`AcceptFormat`].
///
/// The browse affordance always filters through the `accept` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPolicy {
    /// Only the file picker filters. Anything offered is staged as-is.
    #[default]
    Advisory,
    /// Every offer, picked or dropped, must match the accepted format.
    Enforced,
}

/// Configuration for the upload dialog.
///
/// Every field has a default, so a partial JSON object deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Which files the dialog accepts.
    pub accept_format: AcceptFormat,

    /// Whether drops are validated against `accept_format`.
    pub policy: FormatPolicy,

    /// How long notifications stay on screen.
    #[serde(with = "millis")]
    pub notice_ttl: Duration,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            accept_format: AcceptFormat::default(),
            policy: FormatPolicy::default(),
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }
}

/// `Duration` as whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::cast_possible_truncation)] // durations beyond u64 ms are not meaningful here
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Errors produced by the staging state machine.
///
/// None of these are fatal. The user-facing variants' `Display` text is
/// what gets published to the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StagingError {
    /// Confirm was requested with nothing staged.
    #[error("Please select a file to upload.")]
    NoFileSelected,

    /// The offered file does not match the accepted format.
    #[error("Unsupported file type: {name} (accepted: {accept})")]
    UnsupportedFormat {
        /// Name of the rejected file.
        name: String,
        /// The accept pattern it was checked against.
        accept: String,
    },

    /// An event reached the modal while it was closed.
    #[error("the upload dialog is not open")]
    ModalClosed,
}
