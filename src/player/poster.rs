// SPDX-License-Identifier: MPL-2.0
//! Poster-image fallback guard.
//!
//! Applies to every poster-bearing video independently of the per-player
//! wiring: a source load error is logged (the poster attribute already
//! covers the visual), and the first metadata-loaded event rewinds the
//! position to the start so the poster frame stays visible. The rewind runs
//! once per element, tracked by a guard flag.

use crate::media::{MediaElement, MediaEvent};
use std::time::Duration;

#[derive(Debug)]
pub struct PosterGuard {
    entry_id: String,
    applied: bool,
}

impl PosterGuard {
    pub fn new(entry_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            applied: false,
        }
    }

    /// Reacts to lifecycle events of the guarded element.
    pub fn handle_event(&mut self, event: &MediaEvent, element: &mut impl MediaElement) {
        match event {
            MediaEvent::LoadedMetadata => {
                if !self.applied {
                    self.applied = true;
                    element.set_position(Duration::ZERO);
                }
            }
            MediaEvent::SourceError(source) => {
                log::warn!(
                    "video source failed to load for '{}' ({}), keeping poster image",
                    self.entry_id,
                    source
                );
            }
            _ => {}
        }
    }
}
