// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsed form of the supported selector subset.
//!
//! Exclusion/overlay lists accept compound selectors (`div`, `#id`, `.class`, `*`, and
//! combinations like `section.wide`) chained by descendant combinators (whitespace). Anything
//! richer is a per-selector parse error; see `format::selector`.

/// One selector item: compound parts from outermost ancestor to subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<CompoundSelector>,
}

impl Selector {
    /// `parts` must be non-empty; the parser guarantees this.
    pub(crate) fn new(parts: Vec<CompoundSelector>) -> Self {
        debug_assert!(!parts.is_empty());
        Self { parts }
    }

    pub fn parts(&self) -> &[CompoundSelector] {
        &self.parts
    }

    /// The rightmost compound: the element the selector actually selects.
    pub fn subject(&self) -> &CompoundSelector {
        // Non-empty by construction.
        self.parts.last().expect("selector has at least one part")
    }
}

/// A single compound: optional tag, optional id, any number of classes. An all-`None` compound
/// is the universal selector `*`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    /// Lowercased tag name; `None` matches any tag.
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}
