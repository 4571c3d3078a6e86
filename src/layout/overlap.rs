// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! De-duplication of lines drawn on shared edges.
//!
//! Two columns that share a top coordinate would otherwise each draw the same line at that
//! seam. The registry is created by the pass and discarded with it; it is never a module-level
//! singleton, so independent engine instances cannot contaminate each other.

use std::collections::BTreeSet;

use crate::model::geom::Rect;
use crate::model::side::Side;

/// Pass-lifetime registry of (side, rounded edge coordinate) pairs already drawn.
///
/// Rounding to the nearest integer absorbs floating-point measurement noise: edges within half
/// a unit land on the same key.
#[derive(Debug, Clone, Default)]
pub struct OverlapRegistry {
    seen: BTreeSet<(Side, i64)>,
}

impl OverlapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a line for this edge was already drawn this pass. Inert (always false,
    /// records nothing) unless `prevent_overlap` is set. A false return marks the edge as drawn.
    pub fn should_skip(&mut self, rect: &Rect, side: Side, prevent_overlap: bool) -> bool {
        if !prevent_overlap {
            return false;
        }

        let key = (side, rect.edge(side).round() as i64);
        if self.seen.contains(&key) {
            return true;
        }
        self.seen.insert(key);
        false
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
