// SPDX-License-Identifier: MPL-2.0
//! Device classification for input wiring.

use crate::config::TOUCH_VIEWPORT_MAX_WIDTH;

/// Input device class, decided once at startup from the viewport width.
///
/// The snapshot is deliberately not re-evaluated on resize; this mirrors the
/// page's documented baseline behavior. Deployments where the initial width
/// is misleading can force touch wiring with the `--touch` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Mouse/trackpad input; controls follow hover.
    Pointer,
    /// Touch input; controls are revealed by taps and auto-hidden.
    Touch,
}

impl DeviceClass {
    /// Classifies the device from the viewport width at initialization time.
    #[must_use]
    pub fn from_viewport_width(width: f32) -> Self {
        if width <= TOUCH_VIEWPORT_MAX_WIDTH {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}
