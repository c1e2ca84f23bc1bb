// SPDX-License-Identifier: MPL-2.0
//! Playback phase and controls-visibility state machine.
//!
//! Visibility is derived, never stored: the controller records the instant
//! of the last qualifying interaction and [`InactivityTracker::visibility`]
//! computes the current state from it. There is no timer object to cancel,
//! so "at most one pending timer per controller" holds by construction —
//! recording a new interaction *is* the reschedule.

use crate::config::INACTIVITY_TIMEOUT_MS;
use std::time::{Duration, Instant};

/// Playback phase as reported by the media element's own events.
///
/// `Idle` holds until the first play/pause event arrives; afterwards exactly
/// one of `Playing`/`Paused` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl PlaybackPhase {
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Whether the overlay controls are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsVisibility {
    Visible,
    /// Hidden because playback is active and the idle timeout elapsed.
    HiddenIdle,
}

/// Tracks the last qualifying user interaction for the auto-hide timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct InactivityTracker {
    last_interaction: Option<Instant>,
}

impl InactivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a qualifying interaction, restarting the idle window.
    pub fn record(&mut self, now: Instant) {
        self.last_interaction = Some(now);
    }

    /// Derives visibility. Controls only hide while playback is active and
    /// the idle timeout has elapsed since the last interaction.
    pub fn visibility(&self, playing: bool, now: Instant) -> ControlsVisibility {
        if !playing {
            return ControlsVisibility::Visible;
        }
        match self.last_interaction {
            // Playback without a recorded interaction means the hide timer
            // was never armed; controls stay visible.
            None => ControlsVisibility::Visible,
            Some(t) => {
                if now.duration_since(t) < Duration::from_millis(INACTIVITY_TIMEOUT_MS) {
                    ControlsVisibility::Visible
                } else {
                    ControlsVisibility::HiddenIdle
                }
            }
        }
    }
}

/// Visual state record consumed by the view layer.
///
/// Derived from one place so the class combinations can never conflict:
/// `touch_active` is cleared whenever `inactive` is asserted, which is what
/// the host styling needs to hide touch-revealed controls correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateClasses {
    pub playing: bool,
    pub paused: bool,
    pub inactive: bool,
    pub touch_active: bool,
}

impl StateClasses {
    pub fn derive(
        phase: PlaybackPhase,
        visibility: ControlsVisibility,
        touch_active: bool,
    ) -> Self {
        let inactive = matches!(visibility, ControlsVisibility::HiddenIdle);
        Self {
            playing: matches!(phase, PlaybackPhase::Playing),
            paused: matches!(phase, PlaybackPhase::Paused),
            inactive,
            touch_active: touch_active && !inactive,
        }
    }
}
