// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Exclusion splitting: partitioning a line's extent into the visible segments left over after
//! subtracting obstacle rectangles.

use smallvec::SmallVec;

use crate::model::geom::{ranges_overlap, Rect, Segment};
use crate::model::side::Orientation;

/// Cross-axis buffer around the line's position when testing obstacles. Absorbs sub-pixel
/// measurement jitter between the line's nominal position and an obstacle's edge.
pub const EXCLUSION_BUFFER: f64 = 10.0;

/// Splits `[line_start, line_end]` around the obstacles that sit on the line.
///
/// Only obstacles whose cross-axis span intersects the buffer zone around `line_pos` count.
/// Overlapping obstacles merge implicitly: the sweep cursor only ever moves forward, so a later
/// interval swallowed by an earlier one emits nothing. Degenerate segments (`end <= start`) can
/// come back when an obstacle overhangs the extent; callers drop those.
pub fn split_line(
    line_start: f64,
    line_end: f64,
    obstacles: &[Rect],
    orientation: Orientation,
    line_pos: f64,
) -> SmallVec<[Segment; 4]> {
    let mut intervals = SmallVec::<[(f64, f64); 4]>::new();

    for rect in obstacles {
        let (cross_start, cross_end, run_start, run_end) = match orientation {
            Orientation::Horizontal => (rect.top(), rect.bottom(), rect.left(), rect.right()),
            Orientation::Vertical => (rect.left(), rect.right(), rect.top(), rect.bottom()),
        };
        if ranges_overlap(
            line_pos - EXCLUSION_BUFFER,
            line_pos + EXCLUSION_BUFFER,
            cross_start,
            cross_end,
        ) {
            intervals.push((run_start, run_end));
        }
    }

    let mut segments = SmallVec::new();

    if intervals.is_empty() {
        segments.push(Segment::new(line_start, line_end));
        return segments;
    }

    intervals.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cursor = line_start;
    for (interval_start, interval_end) in intervals {
        if interval_start > cursor {
            segments.push(Segment::new(cursor, interval_start.min(line_end)));
        }
        cursor = cursor.max(interval_end);
    }

    if cursor < line_end {
        segments.push(Segment::new(cursor, line_end));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::{split_line, EXCLUSION_BUFFER};
    use crate::model::geom::{Rect, Segment};
    use crate::model::side::Orientation;

    /// Obstacle spanning `[start, end]` on the run axis of a horizontal line at y=0.
    fn obstacle(start: f64, end: f64) -> Rect {
        Rect::from_edges(-5.0, start, 5.0, end)
    }

    fn spans(segments: &[Segment]) -> Vec<(f64, f64)> {
        segments.iter().map(|s| (s.start(), s.end())).collect()
    }

    #[test]
    fn no_obstacles_returns_the_whole_extent() {
        let segments = split_line(0.0, 100.0, &[], Orientation::Horizontal, 0.0);
        assert_eq!(spans(&segments), [(0.0, 100.0)]);
    }

    #[test]
    fn one_obstacle_cuts_a_gap() {
        let segments = split_line(
            0.0,
            100.0,
            &[obstacle(40.0, 60.0)],
            Orientation::Horizontal,
            0.0,
        );
        assert_eq!(spans(&segments), [(0.0, 40.0), (60.0, 100.0)]);
    }

    #[test]
    fn obstacle_overhanging_the_start_clips() {
        let segments = split_line(
            0.0,
            100.0,
            &[obstacle(-10.0, 10.0)],
            Orientation::Horizontal,
            0.0,
        );
        assert_eq!(spans(&segments), [(10.0, 100.0)]);
    }

    #[test]
    fn overlapping_obstacles_merge_into_one_gap() {
        let segments = split_line(
            0.0,
            100.0,
            &[obstacle(10.0, 30.0), obstacle(20.0, 50.0)],
            Orientation::Horizontal,
            0.0,
        );
        assert_eq!(spans(&segments), [(0.0, 10.0), (50.0, 100.0)]);
    }

    #[test]
    fn sort_order_does_not_matter() {
        let segments = split_line(
            0.0,
            100.0,
            &[obstacle(70.0, 80.0), obstacle(20.0, 30.0)],
            Orientation::Horizontal,
            0.0,
        );
        assert_eq!(spans(&segments), [(0.0, 20.0), (30.0, 70.0), (80.0, 100.0)]);
    }

    #[test]
    fn obstacles_outside_the_cross_buffer_are_ignored() {
        // The line sits at y=100; this obstacle's vertical span stops 10.5 above it.
        let far = Rect::from_edges(50.0, 40.0, 89.5, 60.0);
        let segments = split_line(0.0, 100.0, &[far], Orientation::Horizontal, 100.0);
        assert_eq!(spans(&segments), [(0.0, 100.0)]);

        // Nudge it into the buffer and the gap appears.
        let near = Rect::from_edges(50.0, 40.0, 91.0, 60.0);
        let segments = split_line(0.0, 100.0, &[near], Orientation::Horizontal, 100.0);
        assert_eq!(spans(&segments), [(0.0, 40.0), (60.0, 100.0)]);
    }

    #[test]
    fn vertical_lines_swap_the_axes() {
        // Vertical line at x=200 spanning y in [0, 300]; obstacle crosses it between y 100..150.
        let rect = Rect::from_edges(100.0, 195.0, 150.0, 260.0);
        let segments = split_line(0.0, 300.0, &[rect], Orientation::Vertical, 200.0);
        assert_eq!(spans(&segments), [(0.0, 100.0), (150.0, 300.0)]);
    }

    #[test]
    fn covering_obstacle_leaves_nothing() {
        let segments = split_line(
            0.0,
            100.0,
            &[obstacle(-EXCLUSION_BUFFER, 100.0 + EXCLUSION_BUFFER)],
            Orientation::Horizontal,
            0.0,
        );
        assert!(segments.is_empty());
    }

    #[test]
    fn union_of_segments_and_gaps_tiles_the_extent() {
        let obstacles = [
            obstacle(-20.0, 5.0),
            obstacle(10.0, 30.0),
            obstacle(25.0, 40.0),
            obstacle(40.0, 41.0),
            obstacle(90.0, 130.0),
        ];
        let segments = split_line(0.0, 100.0, &obstacles, Orientation::Horizontal, 0.0);

        // Segments are disjoint, ordered, positive-length, and inside the extent.
        let mut previous_end = 0.0_f64;
        for segment in &segments {
            assert!(segment.start() >= previous_end);
            assert!(segment.end() > segment.start());
            assert!(segment.end() <= 100.0);
            previous_end = segment.end();
        }

        // Every point not touched by an obstacle is inside some segment.
        for step in 0..=1000 {
            let x = f64::from(step) * 0.1;
            let in_obstacle = obstacles.iter().any(|o| x >= o.left() && x <= o.right());
            let in_segment = segments.iter().any(|s| x >= s.start() && x <= s.end());
            if !in_obstacle {
                assert!(in_segment, "uncovered point {x}");
            }
        }
    }
}
