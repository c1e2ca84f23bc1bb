// SPDX-License-Identifier: MPL-2.0
//! Custom playback controls overlay.
//!
//! Renders the play/pause button and the volume widgets for one player, and
//! decides whether the overlay is shown at all. Everything is derived from
//! the controller's state record; the widgets hold no state of their own.

use crate::i18n::fluent::I18n;
use crate::player::{DeviceClass, StateClasses, Volume};
use crate::ui::{icons, styles};
use iced::widget::{button, container, row, slider, tooltip, Text};
use iced::{Alignment, Element, Length};

const ICON_SIZE: f32 = 22.0;
const SLIDER_WIDTH: f32 = 80.0;

/// Messages emitted by the overlay widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,
    /// Adjust volume (0.0 to 1.0).
    SetVolume(f32),
    /// Toggle mute state.
    ToggleMute,
}

/// Snapshot of one player's controls for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ControlsState {
    pub classes: StateClasses,
    pub volume: Volume,
    pub has_volume: bool,
}

/// Decides whether the overlay is visible.
///
/// Hidden wins over everything, then a non-playing video always shows its
/// controls. While playing, touch devices show them only after an explicit
/// reveal, pointer devices only while the cursor is over the container.
pub fn should_show(classes: StateClasses, device: DeviceClass, hovered: bool) -> bool {
    if classes.inactive {
        return false;
    }
    if !classes.playing {
        return true;
    }
    match device {
        DeviceClass::Touch => classes.touch_active,
        DeviceClass::Pointer => hovered,
    }
}

/// Renders the control row.
pub fn view<'a>(i18n: &I18n, state: ControlsState) -> Element<'a, Message> {
    let (play_icon, play_tip) = if state.classes.playing {
        (icons::pause(), i18n.tr("tooltip-pause"))
    } else {
        (icons::play(), i18n.tr("tooltip-play"))
    };

    let play_button: Element<'_, Message> = button(icons::sized(play_icon, ICON_SIZE))
        .on_press(Message::TogglePlayback)
        .style(styles::overlay_button)
        .padding(6)
        .into();

    let mut controls = row![tooltip(
        play_button,
        Text::new(play_tip),
        tooltip::Position::Top,
    )
    .gap(4)]
    .spacing(8)
    .padding(6)
    .align_y(Alignment::Center);

    if state.has_volume {
        let tier = state.volume.tier();
        let mute_tip = if state.volume.is_silent() {
            i18n.tr("tooltip-unmute")
        } else {
            i18n.tr("tooltip-mute")
        };
        let volume_button: Element<'_, Message> = button(icons::sized(icons::for_tier(tier), ICON_SIZE))
            .on_press(Message::ToggleMute)
            .style(styles::overlay_button)
            .padding(6)
            .into();

        let volume_slider = slider(0.0..=1.0, state.volume.value(), Message::SetVolume)
            .style(styles::volume_slider)
            .width(Length::Fixed(SLIDER_WIDTH))
            .step(0.01);

        controls = controls
            .push(tooltip(volume_button, Text::new(mute_tip), tooltip::Position::Top).gap(4))
            .push(volume_slider);
    }

    container(controls).style(styles::overlay).into()
}
