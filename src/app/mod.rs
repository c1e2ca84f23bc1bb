// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the page manifest, localization, and the bound
//! players together and translates messages into controller calls and config
//! persistence. Media events queued by the playback sessions are drained
//! after every update that can produce them, so controller state always
//! follows the element's reported transitions rather than the request that
//! triggered them.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, TICK_INTERVAL_MS, WINDOW_DEFAULT_WIDTH};
use crate::i18n::fluent::I18n;
use crate::media::MediaElement;
use crate::page::{self, PageManifest, PlayerSlot, Showcase};
use crate::player::DeviceClass;
use crate::ui::{controls, pane};
use iced::{Element, Subscription, Task, Theme};
use std::time::Instant;

pub struct App {
    pub i18n: I18n,
    config: Config,
    page: PageManifest,
    device: DeviceClass,
    showcase: Showcase,
    /// Instant of the last processed tick; `None` while the clock is idle.
    last_tick: Option<Instant>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|e| {
            log::warn!("failed to load settings, using defaults: {}", e);
            Config::default()
        });

        let page = match &flags.page {
            Some(path) => PageManifest::load(path).unwrap_or_else(|e| {
                log::error!("failed to load page manifest override: {}", e);
                embedded_manifest()
            }),
            None => embedded_manifest(),
        };

        let device = if flags.touch {
            DeviceClass::Touch
        } else {
            DeviceClass::from_viewport_width(WINDOW_DEFAULT_WIDTH as f32)
        };

        let i18n = I18n::new(flags.lang, &config);
        let app = Self::from_parts(i18n, config, page, device);
        (app, Task::none())
    }

    fn from_parts(i18n: I18n, config: Config, page: PageManifest, device: DeviceClass) -> Self {
        let showcase = page::init_players(&page, &config, device, Instant::now());
        Self {
            i18n,
            config,
            page,
            device,
            showcase,
            last_tick: None,
        }
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|t| now.saturating_duration_since(t))
                    .unwrap_or_default();
                self.last_tick = Some(now);

                for slot in &mut self.showcase.players {
                    slot.controller.element_mut().advance(elapsed);
                }
                if let Some(native) = &mut self.showcase.construction {
                    native.session.advance(elapsed);
                }
                self.drain_media_events(now);

                if !self.any_playing() {
                    self.last_tick = None;
                }
            }
            Message::Player(index, msg) => {
                let now = Instant::now();
                self.handle_player_message(index, msg, now);
                self.drain_media_events(now);
                self.arm_clock(now);
            }
            Message::Native(pane::NativeControl::Toggle) => {
                let now = Instant::now();
                if let Some(native) = &mut self.showcase.construction {
                    if native.session.is_paused() {
                        if let Err(e) = native.session.play() {
                            log::error!("video playback error: {}", e);
                        }
                    } else {
                        native.session.pause();
                    }
                    // Native chrome reads the session directly; events are
                    // not routed anywhere.
                    native.session.take_events();
                }
                self.arm_clock(now);
            }
            Message::SurfaceTapped => {
                let now = Instant::now();
                if let Some((_, slot)) = self.active_player_mut() {
                    slot.controller.touch_reveal(now);
                }
            }
            Message::LanguagePicked(locale) => {
                self.i18n.set_locale(locale);
                self.config.language = Some(self.i18n.current_locale().to_string());
                if let Err(e) = config::save(&self.config) {
                    log::warn!("failed to save settings: {}", e);
                }
            }
        }
        Task::none()
    }

    fn handle_player_message(&mut self, index: usize, msg: pane::Message, now: Instant) {
        let Some(slot) = self.showcase.players.get_mut(index) else {
            return;
        };
        match msg {
            pane::Message::Controls(controls::Message::TogglePlayback) => {
                slot.controller.toggle_playback(now);
            }
            pane::Message::Controls(controls::Message::SetVolume(value)) => {
                slot.controller.set_volume(value, now);
                self.persist_volume();
            }
            pane::Message::Controls(controls::Message::ToggleMute) => {
                slot.controller.toggle_mute(now);
                self.persist_volume();
            }
            pane::Message::PointerEntered => slot.controller.pointer_entered(),
            pane::Message::PointerExited => slot.controller.pointer_exited(),
        }
    }

    /// Routes queued media events through the poster guards and controllers.
    fn drain_media_events(&mut self, now: Instant) {
        for slot in &mut self.showcase.players {
            let events = slot.controller.element_mut().take_events();
            for event in events {
                if let Some(guard) = slot.guard.as_mut() {
                    guard.handle_event(&event, slot.controller.element_mut());
                }
                slot.controller.handle_media_event(&event, now);
            }
        }
        if let Some(native) = &mut self.showcase.construction {
            native.session.take_events();
        }
    }

    fn persist_volume(&mut self) {
        let volume = self
            .active_player()
            .map(|(_, slot)| slot.controller.volume().value());
        if let Some(value) = volume {
            self.config.volume = Some(value);
        }
        if let Err(e) = config::save(&self.config) {
            log::warn!("failed to save settings: {}", e);
        }
    }

    /// Starts the playback clock when a request may have begun playback.
    fn arm_clock(&mut self, now: Instant) {
        if self.last_tick.is_none() && self.any_playing() {
            self.last_tick = Some(now);
        }
    }

    fn any_playing(&self) -> bool {
        let players = self
            .showcase
            .players
            .iter()
            .any(|s| !s.controller.element().is_paused());
        let native = self
            .showcase
            .construction
            .as_ref()
            .is_some_and(|n| !n.session.is_paused());
        players || native
    }

    /// The player pane shown for the current locale.
    fn active_player(&self) -> Option<(usize, &PlayerSlot)> {
        let (video_id, _) = page::binding_for_locale(&self.i18n.current_locale().to_string());
        self.showcase
            .players
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.controller.video_id() == video_id)
    }

    fn active_player_mut(&mut self) -> Option<(usize, &mut PlayerSlot)> {
        let (video_id, _) = page::binding_for_locale(&self.i18n.current_locale().to_string());
        self.showcase
            .players
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.controller.video_id() == video_id)
    }
}

fn embedded_manifest() -> PageManifest {
    PageManifest::embedded().unwrap_or_else(|e| {
        log::error!("embedded page manifest is invalid: {}", e);
        PageManifest {
            videos: Vec::new(),
            controls: Vec::new(),
        }
    })
}

// Keep the tick interval available to the subscription module.
pub(crate) const TICK_INTERVAL: std::time::Duration =
    std::time::Duration::from_millis(TICK_INTERVAL_MS);
