// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static CSS rule generation: the measurement-free fallback path.
//!
//! One element's guides become pseudo-element rules keyed by a data-attribute id: `::before`
//! draws the top line, `::after` the bottom line, and left/right lines are stacked
//! `background-image` gradients on the element itself (both pseudo-elements are taken). This
//! path does no exclusion splitting and no dedup; lengths use `vw`/`vh`/`%` units instead of
//! measured pixels.

use std::fmt::Write as _;

use crate::layout::resolve_sides;
use crate::model::side::{Orientation, Side};
use crate::model::spec::{GridSpec, LengthMode, LineStyle, SideConfig};
use crate::render::paint::{color_with_opacity, pattern_fill, Rgba};

/// The attribute the generated rules key on.
pub const ID_ATTR: &str = "data-horos-id";

fn length_value(config: &SideConfig, orientation: Orientation) -> String {
    let unit = match orientation {
        Orientation::Horizontal => "vw",
        Orientation::Vertical => "vh",
    };
    match config.length_mode {
        LengthMode::Page => format!("100{unit}"),
        LengthMode::Absolute => format!("{}{unit}", config.length_percent),
        LengthMode::Relative => format!("{}%", config.length_percent),
    }
}

/// Gradient usable inside `background-image`; solid colors become a two-stop gradient since a
/// flat color is not a valid image.
fn vertical_gradient(config: &SideConfig, color: Rgba) -> String {
    match config.style {
        LineStyle::Solid => format!("linear-gradient(180deg, {color}, {color})"),
        LineStyle::Dashed | LineStyle::Dotted => {
            pattern_fill(config.style, color, Orientation::Vertical).to_string()
        }
    }
}

fn horizontal_rule(out: &mut String, selector: &str, pseudo: &str, anchor: &str, config: &SideConfig) {
    let color = color_with_opacity(&config.color, config.opacity);
    let background = pattern_fill(config.style, color, Orientation::Horizontal);
    let length = length_value(config, Orientation::Horizontal);
    let _ = write!(
        out,
        "{selector}::{pseudo} {{\n  content: '';\n  position: absolute;\n  {anchor}: 0;\n  left: 50%;\n  transform: translateX(-50%);\n  width: {length};\n  height: {width}px;\n  background: {background};\n  pointer-events: none;\n  z-index: -1;\n}}\n",
        width = config.width,
    );
}

/// Generates the full rule block for one element, or the empty string when the spec (or every
/// resolved side) is disabled.
pub fn grid_css(spec: &GridSpec, unique_id: &str) -> String {
    if !spec.enabled {
        return String::new();
    }

    let selector = format!("[{ID_ATTR}=\"{unique_id}\"]");
    let mut css = format!("{selector} {{ position: relative; overflow: visible; }}\n");

    let mut top = None;
    let mut bottom = None;
    let mut left = None;
    let mut right = None;
    for (side, config) in resolve_sides(spec) {
        match side {
            Side::Top => top = Some(config),
            Side::Bottom => bottom = Some(config),
            Side::Left => left = Some(config),
            Side::Right => right = Some(config),
        }
    }

    if let Some(config) = top {
        horizontal_rule(&mut css, &selector, "before", "top", config);
    }
    if let Some(config) = bottom {
        horizontal_rule(&mut css, &selector, "after", "bottom", config);
    }

    if left.is_some() || right.is_some() {
        let mut gradients = Vec::new();
        let mut sizes = Vec::new();
        let mut positions = Vec::new();

        if let Some(config) = left {
            let color = color_with_opacity(&config.color, config.opacity);
            gradients.push(vertical_gradient(config, color));
            sizes.push(format!("{}px {}", config.width, length_value(config, Orientation::Vertical)));
            positions.push("left center".to_owned());
        }
        if let Some(config) = right {
            let color = color_with_opacity(&config.color, config.opacity);
            gradients.push(vertical_gradient(config, color));
            sizes.push(format!("{}px {}", config.width, length_value(config, Orientation::Vertical)));
            positions.push("right center".to_owned());
        }

        let _ = write!(
            css,
            "{selector} {{\n  background-image: {};\n  background-size: {};\n  background-position: {};\n  background-repeat: no-repeat;\n}}\n",
            gradients.join(", "),
            sizes.join(", "),
            positions.join(", "),
        );
    }

    css
}

#[cfg(test)]
mod tests {
    use super::grid_css;
    use crate::model::spec::{GridSpec, LengthMode, LineStyle};

    fn linked_spec() -> GridSpec {
        let mut spec = GridSpec::default();
        spec.enabled = true;
        spec.linked = true;
        spec.top_bottom.enabled = true;
        spec.left_right.enabled = true;
        spec
    }

    #[test]
    fn disabled_specs_emit_nothing() {
        let mut spec = linked_spec();
        spec.enabled = false;
        assert_eq!(grid_css(&spec, "g1"), "");
    }

    #[test]
    fn linked_spec_emits_all_four_sides() {
        let css = grid_css(&linked_spec(), "g1");
        assert!(css.starts_with(
            "[data-horos-id=\"g1\"] { position: relative; overflow: visible; }\n"
        ));
        assert!(css.contains("[data-horos-id=\"g1\"]::before {"));
        assert!(css.contains("[data-horos-id=\"g1\"]::after {"));
        assert!(css.contains("  top: 0;\n"));
        assert!(css.contains("  bottom: 0;\n"));
        assert!(css.contains("width: 100vw"));
        // Left and right stack into one background-image rule.
        assert!(css.contains(
            "background-image: linear-gradient(180deg, rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.1)), linear-gradient(180deg, rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.1))"
        ));
        assert!(css.contains("background-size: 1px 100vh, 1px 100vh"));
        assert!(css.contains("background-position: left center, right center"));
    }

    #[test]
    fn length_units_follow_the_mode() {
        let mut spec = linked_spec();
        spec.top_bottom.length_mode = LengthMode::Absolute;
        spec.top_bottom.length_percent = 50.0;
        spec.left_right.length_mode = LengthMode::Relative;
        spec.left_right.length_percent = 80.0;
        let css = grid_css(&spec, "g2");
        assert!(css.contains("width: 50vw"));
        assert!(css.contains("background-size: 1px 80%, 1px 80%"));
    }

    #[test]
    fn dashed_verticals_use_the_repeating_gradient() {
        let mut spec = linked_spec();
        spec.top_bottom.enabled = false;
        spec.left_right.style = LineStyle::Dashed;
        let css = grid_css(&spec, "g3");
        assert!(!css.contains("::before"));
        assert!(!css.contains("::after"));
        assert!(css.contains("repeating-linear-gradient(180deg, rgba(0, 0, 0, 0.1) 0px, rgba(0, 0, 0, 0.1) 8px, transparent 8px, transparent 16px)"));
    }

    #[test]
    fn only_the_enabled_unlinked_sides_appear() {
        let mut spec = GridSpec::default();
        spec.enabled = true;
        spec.linked = false;
        spec.top.enabled = true;
        spec.top.style = LineStyle::Dotted;
        let css = grid_css(&spec, "g4");
        assert!(css.contains("::before"));
        assert!(!css.contains("::after"));
        assert!(!css.contains("background-image"));
        assert!(css.contains("repeating-linear-gradient(90deg"));
    }
}
