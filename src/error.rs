// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
}

/// Specific error types for media playback issues.
///
/// Playback failures are cosmetic by design: the UI state machine is driven
/// by actual media events, so a failed request never corrupts visual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// A play request was rejected by the media element.
    PlaybackRejected(String),

    /// The video source could not be loaded; the poster stays visible.
    SourceUnavailable(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::PlaybackRejected(id) => {
                write!(f, "play request rejected for '{}'", id)
            }
            MediaError::SourceUnavailable(source) => {
                write!(f, "video source unavailable: {}", source)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
