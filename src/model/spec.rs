// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Guide configuration as carried on page elements.
//!
//! The wire format is the serialized JSON attribute: camelCase keys, sparse objects where every
//! missing field takes its default. `GridSpec` is immutable for the duration of one render pass
//! and discarded when the pass ends.

use serde::{Deserialize, Serialize};

/// Stroke style of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Policy for computing a line's run extent: the whole document, a centered share of the
/// viewport, or a centered share of the owning element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    #[default]
    Page,
    Absolute,
    Relative,
}

/// Configuration for one side (or one linked axis pair) of an element's guides.
///
/// A disabled config is inert and produces no output no matter what the other fields say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SideConfig {
    pub enabled: bool,
    pub style: LineStyle,
    /// Line thickness in px, >= 1.
    pub width: f64,
    /// Hex RGB, optional leading `#`.
    pub color: String,
    /// 0.0..=1.0.
    pub opacity: f64,
    pub length_mode: LengthMode,
    /// 1..=200, ignored when `length_mode` is `Page`.
    pub length_percent: f64,
}

impl Default for SideConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            style: LineStyle::Solid,
            width: 1.0,
            color: "#000000".to_owned(),
            opacity: 0.1,
            length_mode: LengthMode::Page,
            length_percent: 100.0,
        }
    }
}

/// A numeric field outside its documented range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
}

impl SideConfig {
    /// Checks the documented numeric ranges. Decoders reject configs that fail this; the render
    /// path assumes it already ran.
    pub fn check_ranges(&self) -> Result<(), RangeViolation> {
        if !(self.width >= 1.0) {
            return Err(RangeViolation {
                field: "width",
                value: self.width,
            });
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(RangeViolation {
                field: "opacity",
                value: self.opacity,
            });
        }
        if !(1.0..=200.0).contains(&self.length_percent) {
            return Err(RangeViolation {
                field: "lengthPercent",
                value: self.length_percent,
            });
        }
        Ok(())
    }
}

/// Everything an element's guide attribute can carry.
///
/// When `linked` is true, `top_bottom` governs both horizontal sides and `left_right` both
/// vertical sides; the four independent slots are ignored. `preset` is carried for editor
/// round-trips and ignored by the render path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSpec {
    pub enabled: bool,
    pub preset: String,
    pub linked: bool,
    pub prevent_overlap: bool,
    pub disable_on_mobile: bool,
    /// Comma-separated selector list; matched boxes become splitter obstacles.
    pub exclusion_selectors: String,
    /// Comma-separated selector list; matched elements are raised above the guides.
    pub overlay_selectors: String,
    pub top_bottom: SideConfig,
    pub left_right: SideConfig,
    pub top: SideConfig,
    pub right: SideConfig,
    pub bottom: SideConfig,
    pub left: SideConfig,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            enabled: false,
            preset: "custom".to_owned(),
            linked: true,
            prevent_overlap: false,
            disable_on_mobile: true,
            exclusion_selectors: String::new(),
            overlay_selectors: String::new(),
            top_bottom: SideConfig::default(),
            left_right: SideConfig::default(),
            top: SideConfig::default(),
            right: SideConfig::default(),
            bottom: SideConfig::default(),
            left: SideConfig::default(),
        }
    }
}

impl GridSpec {
    /// The six config slots in attribute order, paired with their camelCase wire names.
    pub fn slots(&self) -> [(&'static str, &SideConfig); 6] {
        [
            ("topBottom", &self.top_bottom),
            ("leftRight", &self.left_right),
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
    }
}
