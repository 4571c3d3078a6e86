// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Colors and line fills.
//!
//! Color parsing never fails the render: anything that is not a 6-hex-digit color falls back to
//! opaque black at the requested opacity. Fills render to the CSS `background` values the host
//! puts on fragment elements.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::side::Orientation;
use crate::model::spec::LineStyle;

/// Dash pattern: painted px / gap px along the run axis.
const DASH_PAINT: f64 = 8.0;
const DASH_PERIOD: f64 = 16.0;
/// Dot pattern: painted px / gap px along the run axis.
const DOT_PAINT: f64 = 2.0;
const DOT_PERIOD: f64 = 6.0;

/// An 8-bit RGB color with fractional alpha, displayed in CSS `rgba()` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Literal pattern; cannot fail to compile.
        Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid pattern")
    })
}

/// Parses a 6-hex-digit color (optional leading `#`) and attaches the given opacity. Any parse
/// failure silently yields opaque black at that opacity.
pub fn color_with_opacity(hex: &str, opacity: f64) -> Rgba {
    let Some(captures) = hex_color_re().captures(hex) else {
        return Rgba::new(0, 0, 0, opacity);
    };
    // Each capture is exactly two hex digits.
    let channel =
        |index: usize| u8::from_str_radix(&captures[index], 16).expect("two hex digits");
    Rgba::new(channel(1), channel(2), channel(3), opacity)
}

/// Paint for a guide line: a flat color, or a repeating dash/dot pattern whose repeat direction
/// runs along the line rather than across its thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Pattern {
        color: Rgba,
        /// Gradient angle: 90° for horizontal lines, 180° for vertical ones.
        angle_deg: u16,
        paint: f64,
        period: f64,
    },
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::Pattern {
                color,
                angle_deg,
                paint,
                period,
            } => write!(
                f,
                "repeating-linear-gradient({angle_deg}deg, {color} 0px, {color} {paint}px, transparent {paint}px, transparent {period}px)"
            ),
        }
    }
}

/// Builds the fill for one line from its style, color and orientation.
pub fn pattern_fill(style: LineStyle, color: Rgba, orientation: Orientation) -> Fill {
    let angle_deg = match orientation {
        Orientation::Horizontal => 90,
        Orientation::Vertical => 180,
    };
    match style {
        LineStyle::Solid => Fill::Solid(color),
        LineStyle::Dashed => Fill::Pattern {
            color,
            angle_deg,
            paint: DASH_PAINT,
            period: DASH_PERIOD,
        },
        LineStyle::Dotted => Fill::Pattern {
            color,
            angle_deg,
            paint: DOT_PAINT,
            period: DOT_PERIOD,
        },
    }
}
