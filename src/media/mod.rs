// SPDX-License-Identifier: MPL-2.0
//! Media element port.
//!
//! This module defines the [`MediaElement`] trait, the command-side interface
//! to whatever plays the video. Controllers issue requests through it and
//! never assume a request succeeded: visual state is driven exclusively by
//! [`MediaEvent`]s emitted by the element itself.
//!
//! # Design Notes
//!
//! - Commands are synchronous; the Iced runtime owns all scheduling
//! - `play` is fallible: a rejected request surfaces as an error the caller
//!   logs and otherwise ignores
//! - Events are produced by the concrete element (see [`session`]) and
//!   dispatched by the application loop, so state updates always run after
//!   the real playback change

pub mod session;

pub use session::PlaybackSession;

use crate::error::MediaError;
use std::time::Duration;

/// Events emitted by a media element, mirroring the host's media event set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback started (button, autoplay, or any other trigger).
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end of the stream.
    Ended,
    /// Stream metadata became available; fired once per source.
    LoadedMetadata,
    /// The source failed to load. Carries the source description.
    SourceError(String),
}

/// Port for media playback primitives.
///
/// Implementations maintain their own playback state; the controller treats
/// them as the single source of truth and reacts to their events.
pub trait MediaElement {
    /// Requests playback to start.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::PlaybackRejected`] when the element cannot start
    /// playback (e.g. the source is unavailable). Callers log and continue.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Requests playback to pause. Never fails.
    fn pause(&mut self);

    /// Returns true when the element is not currently playing.
    fn is_paused(&self) -> bool;

    /// Sets the playback volume, clamped to [0.0, 1.0].
    fn set_volume(&mut self, volume: f32);

    /// Returns the current playback volume.
    fn volume(&self) -> f32;

    /// Moves the playback position, clamped to the stream duration.
    fn set_position(&mut self, position: Duration);

    /// Returns the current playback position.
    fn position(&self) -> Duration;

    /// Enables or disables the element's native control chrome.
    fn set_native_controls(&mut self, enabled: bool);
}
