// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Codec for the serialized guide attribute.
//!
//! Decoding accepts the sparse JSON form (missing fields take their defaults) and validates the
//! documented numeric ranges. Encoding produces the same sparse form: every field equal to its
//! default is stripped so the attribute payload stays small.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::model::spec::{GridSpec, RangeViolation, SideConfig};

#[derive(Debug)]
pub enum GridAttrError {
    /// JSON syntax error, type mismatch, or unknown enum tag.
    Json(serde_json::Error),
    /// A numeric field outside its documented range, named by slot and field.
    OutOfRange {
        slot: &'static str,
        violation: RangeViolation,
    },
}

impl fmt::Display for GridAttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed guide attribute: {err}"),
            Self::OutOfRange { slot, violation } => write!(
                f,
                "guide attribute {slot}.{field} out of range: {value}",
                field = violation.field,
                value = violation.value
            ),
        }
    }
}

impl std::error::Error for GridAttrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::OutOfRange { .. } => None,
        }
    }
}

/// Decodes one element's guide attribute into a validated spec.
pub fn decode_grid_attr(input: &str) -> Result<GridSpec, GridAttrError> {
    let spec: GridSpec = serde_json::from_str(input).map_err(GridAttrError::Json)?;
    for (slot, config) in spec.slots() {
        config
            .check_ranges()
            .map_err(|violation| GridAttrError::OutOfRange { slot, violation })?;
    }
    Ok(spec)
}

/// Encodes a spec back to the sparse attribute form, stripping default-valued fields.
///
/// A disabled spec collapses to `{"enabled":false}` no matter what else it carries.
pub fn encode_grid_attr(spec: &GridSpec) -> String {
    let value = strip_defaults(spec);
    // A `Value` tree always serializes.
    serde_json::to_string(&value).expect("json value serializes")
}

fn strip_defaults(spec: &GridSpec) -> Value {
    if !spec.enabled {
        return json!({ "enabled": false });
    }

    let defaults = GridSpec::default();
    let mut out = Map::new();
    out.insert("enabled".to_owned(), Value::Bool(true));

    if spec.preset != defaults.preset {
        out.insert("preset".to_owned(), Value::String(spec.preset.clone()));
    }
    if spec.linked != defaults.linked {
        out.insert("linked".to_owned(), Value::Bool(spec.linked));
    }
    if spec.prevent_overlap != defaults.prevent_overlap {
        out.insert("preventOverlap".to_owned(), Value::Bool(spec.prevent_overlap));
    }
    if spec.disable_on_mobile != defaults.disable_on_mobile {
        out.insert(
            "disableOnMobile".to_owned(),
            Value::Bool(spec.disable_on_mobile),
        );
    }
    if !spec.exclusion_selectors.is_empty() {
        out.insert(
            "exclusionSelectors".to_owned(),
            Value::String(spec.exclusion_selectors.clone()),
        );
    }
    if !spec.overlay_selectors.is_empty() {
        out.insert(
            "overlaySelectors".to_owned(),
            Value::String(spec.overlay_selectors.clone()),
        );
    }

    for (slot, config) in spec.slots() {
        if let Some(stripped) = strip_side(config) {
            out.insert(slot.to_owned(), Value::Object(stripped));
        }
    }

    Value::Object(out)
}

fn strip_side(config: &SideConfig) -> Option<Map<String, Value>> {
    let defaults = SideConfig::default();
    let mut out = Map::new();

    if config.enabled != defaults.enabled {
        out.insert("enabled".to_owned(), Value::Bool(config.enabled));
    }
    if config.style != defaults.style {
        out.insert("style".to_owned(), json!(config.style));
    }
    if config.width != defaults.width {
        out.insert("width".to_owned(), json!(config.width));
    }
    if config.color != defaults.color {
        out.insert("color".to_owned(), Value::String(config.color.clone()));
    }
    if config.opacity != defaults.opacity {
        out.insert("opacity".to_owned(), json!(config.opacity));
    }
    if config.length_mode != defaults.length_mode {
        out.insert("lengthMode".to_owned(), json!(config.length_mode));
    }
    if config.length_percent != defaults.length_percent {
        out.insert("lengthPercent".to_owned(), json!(config.length_percent));
    }

    if out.is_empty() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::{decode_grid_attr, encode_grid_attr, GridAttrError};
    use crate::model::spec::{GridSpec, LengthMode, LineStyle};

    #[test]
    fn decodes_the_minimal_attribute() {
        let spec = decode_grid_attr(r#"{"enabled":true}"#).expect("decode");
        assert!(spec.enabled);
        assert_eq!(spec, {
            let mut expected = GridSpec::default();
            expected.enabled = true;
            expected
        });
    }

    #[test]
    fn syntax_errors_are_typed() {
        let err = decode_grid_attr("{not json").expect_err("syntax");
        assert!(matches!(err, GridAttrError::Json(_)));
        // Unknown enum tags surface as the same decode error class.
        let err = decode_grid_attr(r#"{"top":{"lengthMode":"galactic"}}"#).expect_err("tag");
        assert!(matches!(err, GridAttrError::Json(_)));
    }

    #[test]
    fn range_violations_name_slot_and_field() {
        let err =
            decode_grid_attr(r#"{"enabled":true,"leftRight":{"opacity":3.0}}"#).expect_err("range");
        match err {
            GridAttrError::OutOfRange { slot, violation } => {
                assert_eq!(slot, "leftRight");
                assert_eq!(violation.field, "opacity");
                assert_eq!(violation.value, 3.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn disabled_specs_collapse() {
        let mut spec = GridSpec::default();
        spec.exclusion_selectors = ".ignored".to_owned();
        assert_eq!(encode_grid_attr(&spec), r#"{"enabled":false}"#);
    }

    #[test]
    fn encode_strips_defaults_and_round_trips() {
        let mut spec = GridSpec::default();
        spec.enabled = true;
        spec.prevent_overlap = true;
        spec.top_bottom.enabled = true;
        spec.top_bottom.style = LineStyle::Dotted;
        spec.top_bottom.length_mode = LengthMode::Relative;
        spec.top_bottom.length_percent = 80.0;

        let encoded = encode_grid_attr(&spec);
        // Untouched slots and default fields never appear on the wire.
        assert!(!encoded.contains("leftRight"));
        assert!(!encoded.contains("color"));
        assert!(!encoded.contains("disableOnMobile"));
        assert!(encoded.contains("preventOverlap"));

        let decoded = decode_grid_attr(&encoded).expect("round trip");
        assert_eq!(decoded, spec);
    }
}
