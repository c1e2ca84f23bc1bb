// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Playback volume bounds, mute restore default, icon tiers
//! - **Controls**: Inactivity auto-hide timing and tick cadence
//! - **Device**: Touch device classification
//! - **Window**: Default window geometry

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume, also restored on unmute when nothing was stored.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume below this threshold (and above zero) renders the low-volume glyph.
pub const LOW_VOLUME_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Idle time after which overlay controls hide during playback.
pub const INACTIVITY_TIMEOUT_MS: u64 = 2000;

/// Cadence of the periodic tick driving playback advance and auto-hide.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Device Defaults
// ==========================================================================

/// Viewport widths at or below this are treated as touch devices.
/// Evaluated once at startup, not re-evaluated on resize.
pub const TOUCH_VIEWPORT_MAX_WIDTH: f32 = 768.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(LOW_VOLUME_THRESHOLD > MIN_VOLUME);
    assert!(LOW_VOLUME_THRESHOLD <= MAX_VOLUME);

    // Controls validation
    assert!(INACTIVITY_TIMEOUT_MS > 0);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < INACTIVITY_TIMEOUT_MS);

    // Device validation
    assert!(TOUCH_VIEWPORT_MAX_WIDTH > 0.0);

    // Window validation
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME, 0.5);
        assert!(DEFAULT_VOLUME >= MIN_VOLUME);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
        assert_eq!(LOW_VOLUME_THRESHOLD, 0.5);
    }

    #[test]
    fn inactivity_timeout_is_two_seconds() {
        assert_eq!(INACTIVITY_TIMEOUT_MS, 2000);
        assert!(TICK_INTERVAL_MS < INACTIVITY_TIMEOUT_MS);
    }

    #[test]
    fn touch_breakpoint_matches_contract() {
        assert_eq!(TOUCH_VIEWPORT_MAX_WIDTH, 768.0);
    }
}
