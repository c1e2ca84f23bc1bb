// SPDX-License-Identifier: MPL-2.0
//! Clock-driven playback session.
//!
//! [`PlaybackSession`] is the in-process stand-in for a host media element.
//! It tracks position against a declared duration, advanced by the
//! application tick, and queues [`MediaEvent`]s for the dispatch loop to
//! drain. Frame decoding is out of scope; panes render the poster image.

use super::{MediaElement, MediaEvent};
use crate::config::{MAX_VOLUME, MIN_VOLUME};
use crate::error::MediaError;
use std::time::Duration;

/// Media element implementation backed by a wall-clock position counter.
#[derive(Debug)]
pub struct PlaybackSession {
    /// Identifier of the backing video entry, used in event payloads and logs.
    source_id: String,
    duration: Duration,
    position: Duration,
    playing: bool,
    volume: f32,
    native_controls: bool,
    /// False when the source file could not be found at bind time.
    source_available: bool,
    pending: Vec<MediaEvent>,
}

impl PlaybackSession {
    /// Creates a session for a source of the given duration.
    ///
    /// Queues the initial lifecycle event: `LoadedMetadata` when the source
    /// is available, `SourceError` otherwise (the poster fallback path).
    pub fn new(source_id: impl Into<String>, duration: Duration, source_available: bool) -> Self {
        let source_id = source_id.into();
        let pending = if source_available {
            vec![MediaEvent::LoadedMetadata]
        } else {
            vec![MediaEvent::SourceError(source_id.clone())]
        };
        Self {
            source_id,
            duration,
            position: Duration::ZERO,
            playing: false,
            volume: MAX_VOLUME,
            native_controls: true,
            source_available,
            pending,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn native_controls(&self) -> bool {
        self.native_controls
    }

    /// Advances the playback clock. Emits `Ended` when the stream finishes.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.playing {
            return;
        }
        self.position += elapsed;
        if !self.duration.is_zero() && self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            self.pending.push(MediaEvent::Ended);
        }
    }

    /// Drains the queued media events in emission order.
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl MediaElement for PlaybackSession {
    fn play(&mut self) -> Result<(), MediaError> {
        if !self.source_available {
            return Err(MediaError::SourceUnavailable(self.source_id.clone()));
        }
        if !self.playing {
            // Restart from the top when a finished video is played again.
            if !self.duration.is_zero() && self.position >= self.duration {
                self.position = Duration::ZERO;
            }
            self.playing = true;
            self.pending.push(MediaEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.pending.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_position(&mut self, position: Duration) {
        self.position = position.min(self.duration);
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_native_controls(&mut self, enabled: bool) {
        self.native_controls = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PlaybackSession {
        let mut s = PlaybackSession::new("test-video", Duration::from_secs(10), true);
        s.take_events(); // discard LoadedMetadata
        s
    }

    #[test]
    fn new_session_announces_metadata() {
        let mut s = PlaybackSession::new("test-video", Duration::from_secs(10), true);
        assert_eq!(s.take_events(), vec![MediaEvent::LoadedMetadata]);
        assert!(s.take_events().is_empty());
    }

    #[test]
    fn missing_source_announces_error_and_rejects_play() {
        let mut s = PlaybackSession::new("broken", Duration::from_secs(10), false);
        assert_eq!(
            s.take_events(),
            vec![MediaEvent::SourceError("broken".to_string())]
        );
        assert!(matches!(
            s.play(),
            Err(MediaError::SourceUnavailable(id)) if id == "broken"
        ));
        assert!(s.is_paused());
        assert!(s.take_events().is_empty());
    }

    #[test]
    fn play_emits_event_once() {
        let mut s = session();
        s.play().unwrap();
        s.play().unwrap();
        assert_eq!(s.take_events(), vec![MediaEvent::Play]);
        assert!(!s.is_paused());
    }

    #[test]
    fn pause_emits_event_only_while_playing() {
        let mut s = session();
        s.pause();
        assert!(s.take_events().is_empty());

        s.play().unwrap();
        s.take_events();
        s.pause();
        assert_eq!(s.take_events(), vec![MediaEvent::Pause]);
    }

    #[test]
    fn advance_moves_position_only_while_playing() {
        let mut s = session();
        s.advance(Duration::from_secs(3));
        assert_eq!(s.position(), Duration::ZERO);

        s.play().unwrap();
        s.advance(Duration::from_secs(3));
        assert_eq!(s.position(), Duration::from_secs(3));
    }

    #[test]
    fn reaching_duration_emits_ended_and_stops() {
        let mut s = session();
        s.play().unwrap();
        s.take_events();
        s.advance(Duration::from_secs(11));
        assert_eq!(s.position(), Duration::from_secs(10));
        assert!(s.is_paused());
        assert_eq!(s.take_events(), vec![MediaEvent::Ended]);
    }

    #[test]
    fn replay_after_end_restarts_from_zero() {
        let mut s = session();
        s.play().unwrap();
        s.advance(Duration::from_secs(11));
        s.take_events();

        s.play().unwrap();
        assert_eq!(s.position(), Duration::ZERO);
        assert!(!s.is_paused());
    }

    #[test]
    fn set_volume_clamps() {
        let mut s = session();
        s.set_volume(1.7);
        assert_eq!(s.volume(), 1.0);
        s.set_volume(-0.3);
        assert_eq!(s.volume(), 0.0);
    }

    #[test]
    fn set_position_clamps_to_duration() {
        let mut s = session();
        s.set_position(Duration::from_secs(99));
        assert_eq!(s.position(), Duration::from_secs(10));
    }
}
