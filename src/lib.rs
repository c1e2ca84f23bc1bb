// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is a promotional video showcase built with the Iced GUI framework.
//!
//! It presents one showcase video per supported language plus a secondary
//! video with native controls, replacing the host's playback chrome with a
//! custom overlay (play/pause, volume with mute memory, inactivity auto-hide,
//! touch-device adaptations).

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod page;
pub mod player;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
