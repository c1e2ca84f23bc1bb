// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::ui::pane;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Command-line flags collected by `main`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Page manifest override (`--page`).
    pub page: Option<PathBuf>,
    /// Forces touch-device wiring regardless of window size (`--touch`).
    pub touch: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic playback clock, active only while something plays.
    Tick(Instant),
    /// A message from the player pane at the given showcase index.
    Player(usize, pane::Message),
    /// The construction video's native control bar.
    Native(pane::NativeControl),
    /// A touch landed outside every widget; reveals the active player's
    /// controls on touch devices.
    SurfaceTapped,
    /// Language selection from the picker.
    LanguagePicked(LanguageIdentifier),
}
