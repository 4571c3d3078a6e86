// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render output: overlay fragment descriptors and static CSS rules.
//!
//! A pass produces one `Overlay` value. The host materializes each fragment as an element with
//! `class_names()` and `style()` under a single container; fragments never intercept pointer
//! input and stack behind page content.

use crate::model::geom::Segment;
use crate::model::side::{Orientation, Side};

pub mod css;
pub mod paint;

pub use paint::{color_with_opacity, pattern_fill, Fill, Rgba};

/// Class carried by every fragment, alongside a per-side variant class.
pub const FRAGMENT_CLASS: &str = "horos-line";
/// Id the host should give the single overlay container.
pub const OVERLAY_CONTAINER_ID: &str = "horos-overlay";

/// One visible guide segment, absolutely positioned in document space.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFragment {
    side: Side,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    fill: Fill,
}

impl LineFragment {
    /// Builds the fragment for one split segment. The segment runs along the placement axis;
    /// `cross` is the line's fixed coordinate on the other axis and `thickness` its stroke
    /// width.
    pub(crate) fn new(
        side: Side,
        segment: Segment,
        cross: f64,
        thickness: f64,
        fill: Fill,
    ) -> Self {
        match side.orientation() {
            Orientation::Horizontal => Self {
                side,
                left: segment.start(),
                top: cross,
                width: segment.len(),
                height: thickness,
                fill,
            },
            Orientation::Vertical => Self {
                side,
                left: cross,
                top: segment.start(),
                width: thickness,
                height: segment.len(),
                fill,
            },
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn class_names(&self) -> String {
        format!("{FRAGMENT_CLASS} {FRAGMENT_CLASS}-{}", self.side.as_str())
    }

    /// The inline style declaration for this fragment: absolute document-space placement,
    /// pointer-transparent, stacked behind content.
    pub fn style(&self) -> String {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; background: {}; pointer-events: none; z-index: -1;",
            self.left, self.top, self.width, self.height, self.fill
        )
    }
}

/// Everything one pass renders: fragments for the overlay container, plus the elements the
/// host should raise above the guides (matched by the overlay selector list).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    fragments: Vec<LineFragment>,
    elevated: Vec<usize>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_fragment(&mut self, fragment: LineFragment) {
        self.fragments.push(fragment);
    }

    /// Records a page element index to elevate. Repeat matches are collapsed.
    pub(crate) fn push_elevated(&mut self, index: usize) {
        if !self.elevated.contains(&index) {
            self.elevated.push(index);
        }
    }

    pub fn fragments(&self) -> &[LineFragment] {
        &self.fragments
    }

    /// Page element indices to raise above the guides, in match order.
    pub fn elevated(&self) -> &[usize] {
        &self.elevated
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.elevated.is_empty()
    }
}
