// SPDX-License-Identifier: MPL-2.0
//! UI widgets and styling for the showcase page.

pub mod controls;
pub mod icons;
pub mod pane;
pub mod styles;
