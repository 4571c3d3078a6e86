// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Named guide presets.
//!
//! A preset stamps one look onto every side slot of a spec. `custom` is the identity preset:
//! applying it only records the name and leaves the slots alone.

use super::spec::{GridSpec, LengthMode, LineStyle, SideConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub style: LineStyle,
    pub width: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub length_mode: LengthMode,
    pub length_percent: f64,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        id: "tailwind",
        label: "Tailwind Style",
        style: LineStyle::Solid,
        width: 1.0,
        color: "#e5e7eb",
        opacity: 1.0,
        length_mode: LengthMode::Page,
        length_percent: 100.0,
    },
    Preset {
        id: "modern",
        label: "Modern Grid",
        style: LineStyle::Solid,
        width: 1.0,
        color: "#3b82f6",
        opacity: 0.15,
        length_mode: LengthMode::Page,
        length_percent: 100.0,
    },
    Preset {
        id: "subtle",
        label: "Subtle Lines",
        style: LineStyle::Dashed,
        width: 1.0,
        color: "#000000",
        opacity: 0.05,
        length_mode: LengthMode::Page,
        length_percent: 100.0,
    },
    Preset {
        id: "custom",
        label: "Custom",
        style: LineStyle::Solid,
        width: 1.0,
        color: "#000000",
        opacity: 0.1,
        length_mode: LengthMode::Page,
        length_percent: 100.0,
    },
];

pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

impl Preset {
    fn side_config(&self) -> SideConfig {
        SideConfig {
            enabled: true,
            style: self.style,
            width: self.width,
            color: self.color.to_owned(),
            opacity: self.opacity,
            length_mode: self.length_mode,
            length_percent: self.length_percent,
        }
    }
}

/// Returns `spec` restyled by the named preset. Unknown ids and `custom` only set the preset
/// name, leaving the side slots untouched.
pub fn apply_preset(spec: &GridSpec, id: &str) -> GridSpec {
    let mut next = spec.clone();
    next.preset = id.to_owned();

    let Some(preset) = preset(id) else {
        return next;
    };
    if preset.id == "custom" {
        return next;
    }

    let config = preset.side_config();
    next.top_bottom = config.clone();
    next.left_right = config.clone();
    next.top = config.clone();
    next.right = config.clone();
    next.bottom = config.clone();
    next.left = config;
    next
}
