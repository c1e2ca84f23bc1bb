// SPDX-License-Identifier: MPL-2.0
//! Video panes: poster surface plus the controls layer.
//!
//! Two variants exist. [`player`] is the custom-controls pane with the
//! overlay and hover tracking; [`native`] keeps a plain control bar for the
//! construction video, which deliberately opts out of the custom chrome.

use crate::i18n::fluent::I18n;
use crate::media::{MediaElement, PlaybackSession};
use crate::page::VideoEntry;
use crate::player::DeviceClass;
use crate::ui::{controls, icons, styles};
use iced::widget::{button, column, container, image, mouse_area, row, stack, text};
use iced::{Alignment, Element, Length};

const PANE_WIDTH: f32 = 640.0;
const PANE_HEIGHT: f32 = 360.0;

/// Messages emitted by a custom-controls pane.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Controls(controls::Message),
    PointerEntered,
    PointerExited,
}

/// Control messages for the native-chrome pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeControl {
    Toggle,
}

/// Renders the poster surface for a video entry.
///
/// Falls back to a black surface with the entry title when no poster is
/// declared; a declared-but-missing file degrades the same way inside the
/// image widget.
fn poster_surface<'a, M: 'a>(i18n: &I18n, video: &VideoEntry) -> Element<'a, M> {
    let content: Element<'a, M> = match &video.poster {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(i18n.tr(&video.title)).size(20).into(),
    };

    container(content)
        .style(styles::video_surface)
        .width(Length::Fixed(PANE_WIDTH))
        .height(Length::Fixed(PANE_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

/// Renders a custom-controls player pane.
pub fn player<'a>(
    i18n: &I18n,
    video: &VideoEntry,
    state: controls::ControlsState,
    device: DeviceClass,
    hovered: bool,
) -> Element<'a, Message> {
    let surface = poster_surface(i18n, video);

    let layered: Element<'a, Message> = if controls::should_show(state.classes, device, hovered) {
        let overlay = container(controls::view(i18n, state).map(Message::Controls))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::End)
            .padding(12);
        stack![surface, overlay].into()
    } else {
        surface
    };

    mouse_area(layered)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerExited)
        .into()
}

/// Renders the native-chrome pane: poster with an always-visible control bar.
pub fn native<'a>(i18n: &I18n, video: &VideoEntry, session: &PlaybackSession) -> Element<'a, NativeControl> {
    let glyph = if session.is_paused() {
        icons::play()
    } else {
        icons::pause()
    };
    let toggle = button(icons::sized(glyph, 18.0))
        .on_press(NativeControl::Toggle)
        .style(styles::overlay_button)
        .padding(4);

    let time = text(format!(
        "{} / {}",
        format_time(session.position().as_secs_f64()),
        format_time(session.duration().as_secs_f64()),
    ))
    .size(14);

    let bar = container(
        row![toggle, time]
            .spacing(8)
            .padding(4)
            .align_y(Alignment::Center),
    )
    .style(styles::overlay)
    .width(Length::Fixed(PANE_WIDTH));

    column![poster_surface(i18n, video), bar].spacing(0).into()
}

/// Formats a position in MM:SS or HH:MM:SS.
fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{ControlsVisibility, PlaybackPhase, StateClasses, Volume};
    use std::time::Duration;

    fn entry() -> VideoEntry {
        VideoEntry {
            id: "about-video".into(),
            title: "video-about-title".into(),
            source: "missing.mp4".into(),
            poster: None,
            duration_secs: 10.0,
            container: Some("video-container".into()),
        }
    }

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_handles_minutes_and_hours() {
        assert_eq!(format_time(125.0), "02:05");
        assert_eq!(format_time(3665.0), "01:01:05");
    }

    #[test]
    fn format_time_clamps_negative() {
        assert_eq!(format_time(-10.0), "00:00");
    }

    #[test]
    fn player_pane_renders() {
        let i18n = I18n::default();
        let state = controls::ControlsState {
            classes: StateClasses::derive(
                PlaybackPhase::Paused,
                ControlsVisibility::Visible,
                false,
            ),
            volume: Volume::default(),
            has_volume: true,
        };
        let _ = player(&i18n, &entry(), state, DeviceClass::Pointer, false);
    }

    #[test]
    fn native_pane_renders() {
        let i18n = I18n::default();
        let session = PlaybackSession::new("construction-video", Duration::from_secs(45), false);
        let _ = native(&i18n, &entry(), &session);
    }
}
