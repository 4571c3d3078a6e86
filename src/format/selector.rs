// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing for exclusion/overlay selector lists.
//!
//! Lists are comma-separated. Each item parses independently so one bad selector never takes
//! down the rest of the list; empty items (stray commas) are skipped silently.

use std::fmt;

use crate::model::selector::{CompoundSelector, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorParseError {
    Empty,
    /// `>`, `+` or `~`; only descendant combination is supported.
    UnsupportedCombinator { selector: String, combinator: char },
    /// Pseudo-classes, attribute selectors, quotes and the like.
    InvalidCharacter { selector: String, character: char },
    /// A `#` or `.` with nothing after it.
    MissingName { selector: String, prefix: char },
}

impl fmt::Display for SelectorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnsupportedCombinator {
                selector,
                combinator,
            } => write!(
                f,
                "unsupported combinator `{combinator}` in selector `{selector}` (only descendant combination is supported)"
            ),
            Self::InvalidCharacter {
                selector,
                character,
            } => write!(f, "unsupported character `{character}` in selector `{selector}`"),
            Self::MissingName { selector, prefix } => {
                write!(f, "`{prefix}` without a name in selector `{selector}`")
            }
        }
    }
}

impl std::error::Error for SelectorParseError {}

/// Splits a comma-separated selector list and parses each item.
pub fn parse_selector_list(input: &str) -> Vec<Result<Selector, SelectorParseError>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_selector)
        .collect()
}

/// Parses one selector: whitespace-separated compounds, outermost ancestor first.
pub fn parse_selector(input: &str) -> Result<Selector, SelectorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SelectorParseError::Empty);
    }

    let mut parts = Vec::new();
    for token in input.split_whitespace() {
        parts.push(parse_compound(input, token)?);
    }
    Ok(Selector::new(parts))
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(selector: &str, token: &str) -> Result<CompoundSelector, SelectorParseError> {
    let mut compound = CompoundSelector::default();
    let mut rest = token;

    if let Some(stripped) = rest.strip_prefix('*') {
        rest = stripped;
    } else if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        compound.tag = Some(rest[..end].to_ascii_lowercase());
        rest = &rest[end..];
    }

    while let Some(prefix) = rest.chars().next() {
        match prefix {
            '#' | '.' => {
                let name = &rest[1..];
                let end = name.find(|c: char| !is_name_char(c)).unwrap_or(name.len());
                if end == 0 {
                    return Err(SelectorParseError::MissingName {
                        selector: selector.to_owned(),
                        prefix,
                    });
                }
                if prefix == '#' {
                    compound.id = Some(name[..end].to_owned());
                } else {
                    compound.classes.push(name[..end].to_owned());
                }
                rest = &name[end..];
            }
            '>' | '+' | '~' => {
                return Err(SelectorParseError::UnsupportedCombinator {
                    selector: selector.to_owned(),
                    combinator: prefix,
                });
            }
            character => {
                return Err(SelectorParseError::InvalidCharacter {
                    selector: selector.to_owned(),
                    character,
                });
            }
        }
    }

    Ok(compound)
}
