// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line layout: resolving which sides draw, where each line sits, and how obstacles cut it.

use smallvec::SmallVec;

use crate::model::geom::{Rect, Segment, Size};
use crate::model::side::{Orientation, Side};
use crate::model::spec::{GridSpec, SideConfig};

pub mod overlap;
pub mod split;

pub use overlap::OverlapRegistry;
pub use split::{split_line, EXCLUSION_BUFFER};

/// Where one side's guide line sits before exclusion splitting: its extent on the run axis and
/// its fixed position on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    run_start: f64,
    run_end: f64,
    cross: f64,
    orientation: Orientation,
}

impl LinePlacement {
    pub fn run_start(&self) -> f64 {
        self.run_start
    }

    pub fn run_end(&self) -> f64 {
        self.run_end
    }

    /// The line's fixed coordinate on the cross axis (y for horizontal lines, x for vertical).
    pub fn cross(&self) -> f64 {
        self.cross
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Resolves a spec into the sides that actually draw, in the fixed order top, bottom, left,
/// right. Linked specs map both horizontal sides to `top_bottom` and both vertical sides to
/// `left_right`; unlinked specs gate each side on its own config.
pub fn resolve_sides(spec: &GridSpec) -> Vec<(Side, &SideConfig)> {
    let mut resolved = Vec::with_capacity(4);

    if spec.linked {
        if spec.top_bottom.enabled {
            resolved.push((Side::Top, &spec.top_bottom));
            resolved.push((Side::Bottom, &spec.top_bottom));
        }
        if spec.left_right.enabled {
            resolved.push((Side::Left, &spec.left_right));
            resolved.push((Side::Right, &spec.left_right));
        }
    } else {
        if spec.top.enabled {
            resolved.push((Side::Top, &spec.top));
        }
        if spec.bottom.enabled {
            resolved.push((Side::Bottom, &spec.bottom));
        }
        if spec.left.enabled {
            resolved.push((Side::Left, &spec.left));
        }
        if spec.right.enabled {
            resolved.push((Side::Right, &spec.right));
        }
    }

    resolved
}

/// Computes one side's placement for an element box.
///
/// The cross position keeps the stroke inside the element: bottom/right lines are pulled back
/// by the line width so they do not overflow past the edge. The run extent depends on the
/// length mode: the whole document, a centered share of the viewport, or a centered share of
/// the element itself.
pub fn place_line(
    rect: &Rect,
    side: Side,
    config: &SideConfig,
    document: Size,
    viewport: Size,
) -> LinePlacement {
    use crate::model::spec::LengthMode;

    let orientation = side.orientation();

    let cross = match side {
        Side::Top => rect.top(),
        Side::Bottom => rect.bottom() - config.width,
        Side::Left => rect.left(),
        Side::Right => rect.right() - config.width,
    };

    let (document_extent, viewport_extent, element_start, element_size) = match orientation {
        Orientation::Horizontal => (document.width, viewport.width, rect.left(), rect.width()),
        Orientation::Vertical => (document.height, viewport.height, rect.top(), rect.height()),
    };

    let (run_start, run_end) = match config.length_mode {
        LengthMode::Page => (0.0, document_extent),
        LengthMode::Absolute => {
            let length = viewport_extent * config.length_percent / 100.0;
            let start = (viewport_extent - length) / 2.0;
            (start, start + length)
        }
        LengthMode::Relative => {
            let length = element_size * config.length_percent / 100.0;
            let start = element_start + (element_size - length) / 2.0;
            (start, start + length)
        }
    };

    LinePlacement {
        run_start,
        run_end,
        cross,
        orientation,
    }
}

/// Places one side's line and splits it around the obstacles, dropping degenerate segments.
pub fn layout_side(
    rect: &Rect,
    side: Side,
    config: &SideConfig,
    document: Size,
    viewport: Size,
    obstacles: &[Rect],
) -> (LinePlacement, SmallVec<[Segment; 4]>) {
    let placement = place_line(rect, side, config, document, viewport);
    let mut segments = split_line(
        placement.run_start,
        placement.run_end,
        obstacles,
        placement.orientation,
        placement.cross,
    );
    segments.retain(|segment| !segment.is_empty());
    (placement, segments)
}
