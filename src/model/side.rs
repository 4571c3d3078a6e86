// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// The edge of an element a guide line is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Fixed processing order for a pass. Keeps output order deterministic regardless of how a
    /// spec arrived at its per-side configs.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn orientation(self) -> Orientation {
        match self {
            Side::Top | Side::Bottom => Orientation::Horizontal,
            Side::Left | Side::Right => Orientation::Vertical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Which way a guide line runs. Horizontal lines run along the x-axis (top/bottom sides),
/// vertical lines along the y-axis (left/right sides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::{Orientation, Side};

    #[test]
    fn orientation_follows_the_run_axis() {
        assert_eq!(Side::Top.orientation(), Orientation::Horizontal);
        assert_eq!(Side::Bottom.orientation(), Orientation::Horizontal);
        assert_eq!(Side::Left.orientation(), Orientation::Vertical);
        assert_eq!(Side::Right.orientation(), Orientation::Vertical);
    }

    #[test]
    fn processing_order_is_stable() {
        assert_eq!(Side::ALL, [Side::Top, Side::Bottom, Side::Left, Side::Right]);
        assert_eq!(Side::Top.as_str(), "top");
        assert_eq!(Side::Right.as_str(), "right");
    }
}
