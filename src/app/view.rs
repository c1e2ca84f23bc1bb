// SPDX-License-Identifier: MPL-2.0
//! Top-level page layout.

use super::{App, Message};
use crate::ui::{controls, pane};
use iced::widget::{column, container, pick_list, row, scrollable, text};
use iced::{Alignment, Element, Length};
use std::time::Instant;

pub fn view(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let header = row![
        text(app.i18n.tr("app-title")).size(28),
        iced::widget::Space::new().width(Length::Fill),
        text(app.i18n.tr("language-label")).size(16),
        pick_list(
            app.i18n.available_locales.clone(),
            Some(app.i18n.current_locale().clone()),
            Message::LanguagePicked,
        ),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(24).padding(20).width(Length::Fill);

    if let Some((index, slot)) = app.active_player() {
        if let Some(video) = app.page.video(slot.controller.video_id()) {
            let state = controls::ControlsState {
                classes: slot.controller.state_classes(now),
                volume: slot.controller.volume(),
                has_volume: slot.controller.has_volume(),
            };
            let player = pane::player(
                &app.i18n,
                video,
                state,
                slot.controller.device(),
                slot.controller.is_hovered(),
            )
            .map(move |msg| Message::Player(index, msg));

            content = content
                .push(text(app.i18n.tr(&video.title)).size(22))
                .push(container(player).center_x(Length::Fill));
        }
    }

    if let Some(native) = &app.showcase.construction {
        if let Some(video) = app.page.video(&native.id) {
            let bar = pane::native(&app.i18n, video, &native.session).map(Message::Native);
            content = content
                .push(text(app.i18n.tr(&video.title)).size(22))
                .push(container(bar).center_x(Length::Fill));
        }
    }

    scrollable(content).into()
}
