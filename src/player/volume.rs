// SPDX-License-Identifier: MPL-2.0
//! Volume domain types.
//!
//! [`Volume`] is a type-safe wrapper guaranteeing the value stays within
//! [0.0, 1.0]. [`VolumeControl`] adds the mute toggle with its remembered
//! previous volume, and [`volume_from_touch`] is the manual slider-position
//! computation used for touch drags.

use crate::config::{DEFAULT_VOLUME, LOW_VOLUME_THRESHOLD, MAX_VOLUME, MIN_VOLUME};

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use vitrine::player::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when the volume is fully silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= MIN_VOLUME
    }

    /// Returns the icon tier for this volume level.
    #[must_use]
    pub fn tier(self) -> VolumeTier {
        if self.is_silent() {
            VolumeTier::Muted
        } else if self.0 < LOW_VOLUME_THRESHOLD {
            VolumeTier::Low
        } else {
            VolumeTier::High
        }
    }

    /// Returns the filled-track proportion for the slider visual (0–100).
    #[must_use]
    pub fn fill_percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// Icon tier selected by the current volume level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    /// Volume is exactly zero.
    Muted,
    /// Nonzero but below the low/high threshold.
    Low,
    /// At or above the threshold.
    High,
}

/// Current volume plus the previous level remembered across a mute.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeControl {
    current: Volume,
    previous: Option<Volume>,
}

impl VolumeControl {
    pub fn new(initial: Volume) -> Self {
        Self {
            current: initial,
            previous: None,
        }
    }

    pub fn current(&self) -> Volume {
        self.current
    }

    /// Sets the volume directly (slider interaction).
    pub fn set(&mut self, volume: Volume) {
        self.current = volume;
    }

    /// Toggles mute and returns the resulting volume.
    ///
    /// A nonzero volume is stored before dropping to silence; unmuting
    /// restores the stored level, or 0.5 when nothing was ever stored.
    pub fn toggle_mute(&mut self) -> Volume {
        if !self.current.is_silent() {
            self.previous = Some(self.current);
            self.current = Volume::new(MIN_VOLUME);
        } else {
            self.current = self.previous.unwrap_or(Volume::new(DEFAULT_VOLUME));
        }
        self.current
    }
}

/// Computes a volume from a touch x-position relative to the slider bounds.
///
/// The default touch interaction on the slider is suppressed so the gesture
/// does not scroll the page; this reproduces the value manually, clamped to
/// [0.0, 1.0] even when the touch lands outside the bounds.
#[must_use]
pub fn volume_from_touch(touch_x: f32, slider_x: f32, slider_width: f32) -> Volume {
    if slider_width <= 0.0 {
        return Volume::new(MIN_VOLUME);
    }
    Volume::new((touch_x - slider_x) / slider_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
    }

    #[test]
    fn default_is_expected_volume() {
        assert_abs_diff_eq!(Volume::default().value(), DEFAULT_VOLUME);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Volume::new(0.0).tier(), VolumeTier::Muted);
        assert_eq!(Volume::new(0.49).tier(), VolumeTier::Low);
        assert_eq!(Volume::new(0.5).tier(), VolumeTier::High);
        assert_eq!(Volume::new(1.0).tier(), VolumeTier::High);
    }

    #[test]
    fn fill_percent_is_proportional() {
        assert_abs_diff_eq!(Volume::new(0.3).fill_percent(), 30.0, epsilon = 0.001);
        assert_abs_diff_eq!(Volume::new(1.0).fill_percent(), 100.0);
    }

    #[test]
    fn mute_stores_and_restores_previous_volume() {
        let mut control = VolumeControl::new(Volume::new(0.8));

        let muted = control.toggle_mute();
        assert!(muted.is_silent());

        let restored = control.toggle_mute();
        assert_abs_diff_eq!(restored.value(), 0.8);
    }

    #[test]
    fn unmute_without_stored_volume_restores_default() {
        let mut control = VolumeControl::new(Volume::new(0.0));
        let restored = control.toggle_mute();
        assert_abs_diff_eq!(restored.value(), 0.5);
    }

    #[test]
    fn repeated_unmute_restores_same_value() {
        let mut control = VolumeControl::new(Volume::new(0.7));
        control.toggle_mute();
        control.toggle_mute();
        control.toggle_mute();
        let restored = control.toggle_mute();
        assert_abs_diff_eq!(restored.value(), 0.7);
    }

    #[test]
    fn touch_position_maps_linearly() {
        let vol = volume_from_touch(150.0, 100.0, 100.0);
        assert_abs_diff_eq!(vol.value(), 0.5);
    }

    #[test]
    fn touch_position_clamps_outside_bounds() {
        assert_abs_diff_eq!(volume_from_touch(50.0, 100.0, 100.0).value(), 0.0);
        assert_abs_diff_eq!(volume_from_touch(350.0, 100.0, 100.0).value(), 1.0);
    }

    #[test]
    fn degenerate_slider_width_is_silent() {
        assert!(volume_from_touch(10.0, 0.0, 0.0).is_silent());
    }
}
