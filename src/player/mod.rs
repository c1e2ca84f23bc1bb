// SPDX-License-Identifier: MPL-2.0
//! Per-video playback controller.
//!
//! This module owns the behavior the showcase page substitutes for the
//! host's native controls: the play/pause toggle, the volume slider and
//! mute icon, the inactivity-driven auto-hide of the overlay, and the
//! device-class specific wiring for touch screens.

mod controller;
mod device;
mod poster;
mod state;
mod volume;

pub use controller::PlayerController;
pub use device::DeviceClass;
pub use poster::PosterGuard;
pub use state::{ControlsVisibility, InactivityTracker, PlaybackPhase, StateClasses};
pub use volume::{volume_from_touch, Volume, VolumeControl, VolumeTier};
