// SPDX-License-Identifier: MPL-2.0
//! Style definitions for the overlay controls.
//!
//! The overlay sits on top of video content, so every style here assumes a
//! dark background regardless of the application theme.

use iced::widget::{button, container, slider};
use iced::{Background, Border, Color, Theme};

/// Scrim behind the control row.
const OVERLAY_BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.55,
};

const RAIL_EMPTY: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.3,
};

const HOVER_HIGHLIGHT: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.15,
};

/// Style for the control-row container overlaying the video.
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(OVERLAY_BACKGROUND)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

/// Style for the poster surface behind the overlay.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        ..container::Style::default()
    }
}

/// Transparent icon button for the overlay, with a faint hover highlight.
pub fn overlay_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(HOVER_HIGHLIGHT))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        ..button::Style::default()
    }
}

/// Volume slider: white filled track against a faint rail, round handle.
///
/// The rail's first background is the filled side, so the track fill stays
/// proportional to the current value without extra bookkeeping.
pub fn volume_slider(_theme: &Theme, _status: slider::Status) -> slider::Style {
    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(Color::WHITE),
                Background::Color(RAIL_EMPTY),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 6.0 },
            background: Background::Color(Color::WHITE),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
