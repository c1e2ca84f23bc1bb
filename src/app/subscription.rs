// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The playback clock only runs while something is playing; an idle page
//! subscribes to nothing. On touch devices a raw-event listener picks up
//! finger presses no widget consumed, which is the "tap outside the
//! controls" reveal gesture.

use super::{App, Message, TICK_INTERVAL};
use iced::{event, time, touch, Subscription};

pub fn subscription(app: &App) -> Subscription<Message> {
    let tick = if app.any_playing() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    };

    let touch_reveal = if app.device.is_touch() {
        event::listen_with(|event, status, _window| match (event, status) {
            // Only presses no widget captured count; taps on the controls
            // themselves are handled by the widgets.
            (
                event::Event::Touch(touch::Event::FingerPressed { .. }),
                event::Status::Ignored,
            ) => Some(Message::SurfaceTapped),
            _ => None,
        })
    } else {
        Subscription::none()
    };

    Subscription::batch([tick, touch_reveal])
}
