// SPDX-License-Identifier: MPL-2.0
//! End-to-end controller behavior against a command-recording media element.
//!
//! The fake element never emits events on its own, which makes the
//! event-driven contract visible: a controller only changes its visual state
//! when the test feeds it the element's event, never when a request is
//! issued.

use std::time::{Duration, Instant};

use vitrine::config::INACTIVITY_TIMEOUT_MS;
use vitrine::error::MediaError;
use vitrine::media::{MediaElement, MediaEvent};
use vitrine::page::PageManifest;
use vitrine::player::{DeviceClass, PlayerController, Volume};

const TIMEOUT: Duration = Duration::from_millis(INACTIVITY_TIMEOUT_MS);

#[derive(Debug, Default)]
struct FakeElement {
    playing: bool,
    volume: f32,
    position: Duration,
    native_controls: bool,
    reject_play: bool,
    play_requests: u32,
    pause_requests: u32,
}

impl FakeElement {
    fn new() -> Self {
        Self {
            native_controls: true,
            volume: 1.0,
            ..Self::default()
        }
    }

    fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::new()
        }
    }
}

impl MediaElement for FakeElement {
    fn play(&mut self) -> Result<(), MediaError> {
        self.play_requests += 1;
        if self.reject_play {
            return Err(MediaError::PlaybackRejected("fake".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_requests += 1;
        self.playing = false;
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_position(&mut self, position: Duration) {
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_native_controls(&mut self, enabled: bool) {
        self.native_controls = enabled;
    }
}

fn manifest() -> PageManifest {
    PageManifest::embedded().expect("embedded manifest parses")
}

fn bind(device: DeviceClass, element: FakeElement) -> PlayerController<FakeElement> {
    PlayerController::bind(
        &manifest(),
        "about-video",
        "about-controls",
        Volume::default(),
        device,
        Instant::now(),
        |_| element,
    )
    .expect("binding resolves")
}

#[test]
fn binding_disables_native_chrome_and_applies_volume() {
    let controller = bind(DeviceClass::Pointer, FakeElement::new());
    assert!(!controller.element().native_controls);
    assert_eq!(controller.element().volume, Volume::default().value());
}

#[test]
fn binding_aborts_before_touching_the_element() {
    let mut factory_calls = 0;
    let result = PlayerController::bind(
        &manifest(),
        "about-video",
        "controls-that-do-not-exist",
        Volume::default(),
        DeviceClass::Pointer,
        Instant::now(),
        |_| {
            factory_calls += 1;
            FakeElement::new()
        },
    );
    assert!(result.is_none());
    assert_eq!(factory_calls, 0);
}

#[test]
fn visual_state_follows_events_not_requests() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();

    controller.toggle_playback(t0);
    assert_eq!(controller.element().play_requests, 1);
    // No event yet: the play glyph must still show.
    let classes = controller.state_classes(t0);
    assert!(!classes.playing);

    controller.handle_media_event(&MediaEvent::Play, t0);
    let classes = controller.state_classes(t0);
    assert!(classes.playing && !classes.paused);

    controller.handle_media_event(&MediaEvent::Pause, t0);
    let classes = controller.state_classes(t0);
    assert!(classes.paused && !classes.playing);
}

#[test]
fn second_toggle_requests_pause() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();

    controller.toggle_playback(t0);
    controller.handle_media_event(&MediaEvent::Play, t0);
    controller.toggle_playback(t0);
    assert_eq!(controller.element().pause_requests, 1);
}

#[test]
fn rejected_play_leaves_everything_untouched() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::rejecting());
    let t0 = Instant::now();

    controller.toggle_playback(t0);
    assert_eq!(controller.element().play_requests, 1);
    assert!(!controller.is_playing());
    let classes = controller.state_classes(t0);
    assert!(!classes.playing && !classes.paused);
}

#[test]
fn ended_shows_paused_state_and_rewinds() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();

    controller.handle_media_event(&MediaEvent::Play, t0);
    controller.element_mut().position = Duration::from_secs(42);

    controller.handle_media_event(&MediaEvent::Ended, t0);
    let classes = controller.state_classes(t0);
    assert!(classes.paused && !classes.playing);
    assert_eq!(controller.element().position, Duration::ZERO);
}

#[test]
fn controls_hide_after_the_idle_window_while_playing() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();
    controller.handle_media_event(&MediaEvent::Play, t0);

    assert!(!controller.state_classes(t0 + TIMEOUT - Duration::from_millis(1)).inactive);
    assert!(controller.state_classes(t0 + TIMEOUT).inactive);
}

#[test]
fn interaction_restarts_the_idle_window() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();
    controller.handle_media_event(&MediaEvent::Play, t0);

    let t1 = t0 + Duration::from_millis(1500);
    controller.set_volume(0.4, t1);

    assert!(!controller.state_classes(t0 + TIMEOUT).inactive);
    assert!(controller.state_classes(t1 + TIMEOUT).inactive);
}

#[test]
fn paused_player_never_goes_inactive() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();
    controller.handle_media_event(&MediaEvent::Play, t0);
    controller.handle_media_event(&MediaEvent::Pause, t0);

    assert!(!controller.state_classes(t0 + TIMEOUT * 10).inactive);
}

#[test]
fn mute_round_trip_restores_the_previous_level() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();

    controller.set_volume(0.8, t0);
    controller.toggle_mute(t0);
    assert_eq!(controller.element().volume, 0.0);
    assert!(controller.volume().is_silent());

    controller.toggle_mute(t0);
    assert_eq!(controller.element().volume, 0.8);
}

#[test]
fn unmute_without_history_restores_the_default() {
    let mut controller = bind(DeviceClass::Pointer, FakeElement::new());
    let t0 = Instant::now();

    controller.set_volume(0.0, t0);
    controller.toggle_mute(t0);
    assert_eq!(controller.element().volume, 0.5);
}

#[test]
fn touch_drag_maps_position_to_element_volume() {
    let mut controller = bind(DeviceClass::Touch, FakeElement::new());
    let t0 = Instant::now();

    controller.touch_volume_drag(175.0, 100.0, 100.0, t0);
    assert_eq!(controller.element().volume, 0.75);

    // Touches outside the slider clamp to the range ends.
    controller.touch_volume_drag(20.0, 100.0, 100.0, t0);
    assert_eq!(controller.element().volume, 0.0);
    controller.touch_volume_drag(500.0, 100.0, 100.0, t0);
    assert_eq!(controller.element().volume, 1.0);
}

#[test]
fn touch_reveal_expires_with_the_idle_window() {
    let mut controller = bind(DeviceClass::Touch, FakeElement::new());
    let t0 = Instant::now();
    controller.handle_media_event(&MediaEvent::Play, t0);

    let t1 = t0 + Duration::from_secs(10);
    controller.touch_reveal(t1);
    let classes = controller.state_classes(t1);
    assert!(classes.touch_active && !classes.inactive);

    // Once hidden, the touch class must never linger.
    let classes = controller.state_classes(t1 + TIMEOUT);
    assert!(classes.inactive && !classes.touch_active);
}

#[test]
fn touch_gesture_handlers_mirror_the_click_handlers() {
    let mut controller = bind(DeviceClass::Touch, FakeElement::new());
    let t0 = Instant::now();

    controller.play_button_touch(t0);
    assert_eq!(controller.element().play_requests, 1);

    controller.set_volume(0.6, t0);
    controller.volume_icon_touch(t0);
    assert_eq!(controller.element().volume, 0.0);
}
