// SPDX-License-Identifier: MPL-2.0
//! Page manifest and player bootstrap.
//!
//! The manifest is the showcase page's structure: which video entries exist,
//! which controls descriptors accompany them, and which entries sit inside a
//! player container. Controllers only come to life for pairs the manifest
//! fully resolves, so a page variant that omits a video or its controls
//! degrades to doing nothing for that pair.

use crate::config::{Config, DEFAULT_VOLUME};
use crate::error::{Error, Result};
use crate::media::{MediaElement, PlaybackSession};
use crate::player::{DeviceClass, PlayerController, PosterGuard, Volume};
use serde::Deserialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// Role marker a video entry must carry to participate in custom controls.
pub const CONTAINER_ROLE: &str = "video-container";

/// The custom-controlled video/controls pairs, one per showcase language.
pub const PLAYER_BINDINGS: [(&str, &str); 3] = [
    ("about-video", "about-controls"),
    ("about-video-en", "about-controls-en"),
    ("about-video-de", "about-controls-de"),
];

/// The construction-progress video keeps its native control chrome.
pub const CONSTRUCTION_VIDEO_ID: &str = "construction-video";

const EMBEDDED_MANIFEST: &str = include_str!("../../assets/page.toml");

/// One video element on the page.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    /// Fluent key for the entry's display title.
    pub title: String,
    pub source: String,
    pub poster: Option<String>,
    pub duration_secs: f64,
    /// Role of the enclosing container, when any.
    pub container: Option<String>,
}

impl VideoEntry {
    /// Declared duration. Values a `Duration` cannot represent (negative,
    /// NaN, out of range) degrade to zero instead of aborting bootstrap.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_secs).unwrap_or_else(|_| {
            log::warn!(
                "invalid duration {} for '{}', treating as zero",
                self.duration_secs,
                self.id
            );
            Duration::ZERO
        })
    }

    pub fn source_available(&self) -> bool {
        Path::new(&self.source).exists()
    }

    fn in_player_container(&self) -> bool {
        self.container.as_deref() == Some(CONTAINER_ROLE)
    }
}

/// One custom-controls block on the page.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlsEntry {
    pub id: String,
    /// False when the block only carries the play button.
    #[serde(default = "default_has_volume")]
    pub has_volume: bool,
}

fn default_has_volume() -> bool {
    true
}

/// A fully resolved video/controls pair, ready for binding.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBinding<'a> {
    pub video: &'a VideoEntry,
    pub controls: &'a ControlsEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    #[serde(default)]
    pub controls: Vec<ControlsEntry>,
}

impl PageManifest {
    /// Parses the manifest compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_MANIFEST)
    }

    /// Loads a manifest override from disk (the `--page` flag).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(format!("page manifest: {e}")))
    }

    pub fn video(&self, id: &str) -> Option<&VideoEntry> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn controls(&self, id: &str) -> Option<&ControlsEntry> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Resolves a video/controls pair.
    ///
    /// All three checks must pass: the video entry exists, the controls
    /// descriptor exists, and the video sits inside a player container.
    pub fn resolve(&self, video_id: &str, controls_id: &str) -> Option<ResolvedBinding<'_>> {
        let video = self.video(video_id)?;
        if !video.in_player_container() {
            return None;
        }
        let controls = self.controls(controls_id)?;
        Some(ResolvedBinding { video, controls })
    }
}

/// Picks the video/controls pair shown for a locale.
///
/// English and German locales get their dedicated pairs; everything else
/// falls back to the Czech one.
pub fn binding_for_locale(locale: &str) -> (&'static str, &'static str) {
    if locale.starts_with("en") {
        PLAYER_BINDINGS[1]
    } else if locale.starts_with("de") {
        PLAYER_BINDINGS[2]
    } else {
        PLAYER_BINDINGS[0]
    }
}

/// A bound controller plus its optional poster fallback.
pub struct PlayerSlot {
    pub controller: PlayerController<PlaybackSession>,
    pub guard: Option<PosterGuard>,
}

/// The construction-progress video, playing with native chrome.
pub struct NativeVideo {
    pub id: String,
    pub session: PlaybackSession,
}

/// Everything the bootstrap wired up.
pub struct Showcase {
    pub players: Vec<PlayerSlot>,
    pub construction: Option<NativeVideo>,
}

impl Showcase {
    /// Returns the player bound to the given video id.
    pub fn player_mut(&mut self, video_id: &str) -> Option<&mut PlayerSlot> {
        self.players
            .iter_mut()
            .find(|p| p.controller.video_id() == video_id)
    }
}

/// Wires up every player the manifest resolves, plus the native-controls
/// construction video.
///
/// Missing pairs are skipped silently (logged at debug level inside the
/// binding). When autoplay is configured, the play request is issued here;
/// a rejection is logged and the player stays paused with visible controls.
pub fn init_players(
    page: &PageManifest,
    config: &Config,
    device: DeviceClass,
    now: Instant,
) -> Showcase {
    let initial_volume = Volume::new(config.volume.unwrap_or(DEFAULT_VOLUME));
    let autoplay = config.autoplay.unwrap_or(false);

    let mut players = Vec::new();
    for (video_id, controls_id) in PLAYER_BINDINGS {
        let Some(controller) = PlayerController::bind(
            page,
            video_id,
            controls_id,
            initial_volume,
            device,
            now,
            |entry| PlaybackSession::new(entry.id.clone(), entry.duration(), entry.source_available()),
        ) else {
            continue;
        };

        let guard = page
            .video(video_id)
            .filter(|entry| entry.poster.is_some())
            .map(|entry| PosterGuard::new(entry.id.clone()));

        let mut slot = PlayerSlot { controller, guard };
        if autoplay {
            if let Err(e) = slot.controller.element_mut().play() {
                log::warn!("autoplay rejected for '{}': {}", video_id, e);
            }
        }
        players.push(slot);
    }

    let construction = page.video(CONSTRUCTION_VIDEO_ID).map(|entry| NativeVideo {
        id: entry.id.clone(),
        session: PlaybackSession::new(
            entry.id.clone(),
            entry.duration(),
            entry.source_available(),
        ),
    });

    Showcase {
        players,
        construction,
    }
}
