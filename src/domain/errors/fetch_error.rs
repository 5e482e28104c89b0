//! Image fetch error types.

use thiserror::Error;

use crate::domain::entities::LoadedImage;

/// Terminal outcome of one image request.
pub type FetchResult = Result<LoadedImage, FetchError>;

/// Fetch error variants. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("invalid image URL: {url:?}")]
    InvalidUrl { url: String },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("failed to decode image: {message}")]
    Decode { message: String },
}

/// Payload-free discriminant of [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum FetchErrorKind {
    InvalidUrl,
    Transport,
    Http(u16),
    Decode,
}

impl FetchError {
    /// Creates invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates HTTP status error.
    #[must_use]
    pub const fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns the error kind, dropping free-form messages.
    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            Self::Transport { .. } => FetchErrorKind::Transport,
            Self::Http { status } => FetchErrorKind::Http(*status),
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }
}
