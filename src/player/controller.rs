// SPDX-License-Identifier: MPL-2.0
//! The per-video player controller.
//!
//! A controller binds one media element to its custom controls and owns all
//! interactive behavior for that pair. Binding only succeeds when the page
//! manifest resolves the video entry, the controls descriptor, and the
//! enclosing container role; a missing piece aborts construction with no
//! side effects.
//!
//! Visual playback state (`playing`/`paused` and the play glyph) is driven
//! exclusively by the element's own events, never set optimistically by the
//! click handlers. This keeps the display correct when playback starts by
//! other means, such as autoplay.

use super::{
    volume_from_touch, DeviceClass, InactivityTracker, PlaybackPhase, StateClasses, Volume,
    VolumeControl,
};
use crate::media::{MediaElement, MediaEvent};
use crate::page::{PageManifest, VideoEntry};
use std::time::{Duration, Instant};

pub struct PlayerController<M: MediaElement> {
    video_id: String,
    controls_id: String,
    /// Whether the controls descriptor carries volume widgets.
    has_volume: bool,
    element: M,
    phase: PlaybackPhase,
    volume: VolumeControl,
    tracker: InactivityTracker,
    device: DeviceClass,
    touch_active: bool,
    hovered: bool,
}

impl<M: MediaElement> PlayerController<M> {
    /// Binds a controller to the identified video/controls pair.
    ///
    /// Looks up the video entry, the controls descriptor, and the container
    /// role. Returns `None` when any of the three is absent — the element is
    /// never constructed in that case, so no side effect occurs. On success
    /// the element's native controls are disabled and the initial volume is
    /// applied.
    pub fn bind<F>(
        page: &PageManifest,
        video_id: &str,
        controls_id: &str,
        initial_volume: Volume,
        device: DeviceClass,
        now: Instant,
        make_element: F,
    ) -> Option<Self>
    where
        F: FnOnce(&VideoEntry) -> M,
    {
        let Some(binding) = page.resolve(video_id, controls_id) else {
            log::debug!(
                "skipping player setup: '{}'/'{}' not fully present on the page",
                video_id,
                controls_id
            );
            return None;
        };

        let mut element = make_element(binding.video);
        element.set_native_controls(false);

        let has_volume = binding.controls.has_volume;
        let volume = VolumeControl::new(initial_volume);
        if has_volume {
            element.set_volume(initial_volume.value());
        }

        let mut tracker = InactivityTracker::new();
        let touch_active = device.is_touch();
        if touch_active {
            // Touch devices show the controls on load; they auto-hide after
            // the idle window when the video is already playing.
            tracker.record(now);
        }

        Some(Self {
            video_id: video_id.to_string(),
            controls_id: controls_id.to_string(),
            has_volume,
            element,
            phase: PlaybackPhase::Idle,
            volume,
            tracker,
            device,
            touch_active,
            hovered: false,
        })
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn controls_id(&self) -> &str {
        &self.controls_id
    }

    pub fn has_volume(&self) -> bool {
        self.has_volume
    }

    pub fn element(&self) -> &M {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut M {
        &mut self.element
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn volume(&self) -> Volume {
        self.volume.current()
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Derives the current visual state record.
    pub fn state_classes(&self, now: Instant) -> StateClasses {
        let visibility = self.tracker.visibility(self.phase.is_playing(), now);
        StateClasses::derive(self.phase, visibility, self.touch_active)
    }

    /// Reacts to an event emitted by the owned media element.
    pub fn handle_media_event(&mut self, event: &MediaEvent, now: Instant) {
        match event {
            MediaEvent::Play => {
                self.phase = PlaybackPhase::Playing;
                self.tracker.record(now);
            }
            MediaEvent::Pause => {
                self.phase = PlaybackPhase::Paused;
            }
            MediaEvent::Ended => {
                // End of stream behaves like a pause, plus a rewind so the
                // poster frame is shown again.
                self.phase = PlaybackPhase::Paused;
                self.element.set_position(Duration::ZERO);
            }
            MediaEvent::LoadedMetadata | MediaEvent::SourceError(_) => {
                // Poster fallback handles these; see `PosterGuard`.
            }
        }
    }

    /// Play-button click: requests the opposite of the current phase.
    ///
    /// A rejected play request is logged and otherwise ignored; the phase
    /// only changes when the element reports the transition.
    pub fn toggle_playback(&mut self, now: Instant) {
        if self.phase.is_playing() {
            self.element.pause();
        } else if let Err(e) = self.element.play() {
            log::error!("video playback error: {}", e);
        }
        self.tracker.record(now);
    }

    /// Slider interaction: sets the volume directly.
    pub fn set_volume(&mut self, value: f32, now: Instant) {
        if !self.has_volume {
            return;
        }
        let vol = Volume::new(value);
        self.volume.set(vol);
        self.element.set_volume(vol.value());
        self.tracker.record(now);
    }

    /// Volume-icon click: toggles mute, remembering the previous level.
    pub fn toggle_mute(&mut self, now: Instant) {
        if !self.has_volume {
            return;
        }
        let vol = self.volume.toggle_mute();
        self.element.set_volume(vol.value());
        self.tracker.record(now);
    }

    /// Touch drag across the volume slider, computed from the touch position
    /// relative to the slider bounds (the default gesture is suppressed).
    pub fn touch_volume_drag(
        &mut self,
        touch_x: f32,
        slider_x: f32,
        slider_width: f32,
        now: Instant,
    ) {
        if !self.device.is_touch() || !self.has_volume {
            return;
        }
        let vol = volume_from_touch(touch_x, slider_x, slider_width);
        self.volume.set(vol);
        self.element.set_volume(vol.value());
        self.tracker.record(now);
    }

    /// Touch-end on the play button, a gesture distinct from click so no
    /// duplicate click fires.
    pub fn play_button_touch(&mut self, now: Instant) {
        if !self.device.is_touch() {
            return;
        }
        self.toggle_playback(now);
    }

    /// Touch-end on the volume icon; same contract as [`Self::play_button_touch`].
    pub fn volume_icon_touch(&mut self, now: Instant) {
        if !self.device.is_touch() {
            return;
        }
        self.toggle_mute(now);
    }

    /// Touch on the container or the video surface outside the controls:
    /// reveals the controls and arms the idle window.
    pub fn touch_reveal(&mut self, now: Instant) {
        if !self.device.is_touch() {
            return;
        }
        self.touch_active = true;
        self.tracker.record(now);
    }

    /// Mouse entered the video container (pointer devices).
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
    }

    /// Mouse left the video container; the view hides controls only while
    /// playback is active.
    pub fn pointer_exited(&mut self) {
        self.hovered = false;
    }
}
