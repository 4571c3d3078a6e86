// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Page scan & render driver.
//!
//! A pass runs synchronously to completion: scan the snapshot for elements carrying a guide
//! attribute, decode each (bad attributes skip that element only), resolve sides, dedup shared
//! edges, split around exclusions, and collect fragments into a fresh overlay. Passes are
//! idempotent: identical snapshots render identical overlays, and every pass starts from a
//! clean registry and container.

use std::time::Instant;

use crate::format::attr::decode_grid_attr;
use crate::format::selector::parse_selector_list;
use crate::layout::{layout_side, resolve_sides, OverlapRegistry};
use crate::model::geom::Rect;
use crate::model::page::Page;
use crate::model::spec::GridSpec;
use crate::query::select;
use crate::render::paint::{color_with_opacity, pattern_fill};
use crate::render::{LineFragment, Overlay};

pub mod schedule;

pub use schedule::{Scheduler, Trigger};

/// Viewport width below which mobile-sensitive elements are skipped entirely.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Host-supplied knobs for a driver instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverOptions {
    /// Gates every diagnostic emission; when false the engine produces no output at all.
    pub console_output: bool,
}

/// Runs one full render pass over the snapshot.
///
/// All pass state (the dedup registry included) lives inside the call, so independent passes
/// and independent engine instances cannot contaminate each other.
pub fn run_pass(page: &Page, options: DriverOptions) -> Overlay {
    let mut registry = OverlapRegistry::new();
    let mut overlay = Overlay::new();

    if options.console_output {
        tracing::debug!(elements = page.elements().len(), "guide pass: scanning");
    }

    for (index, element) in page.elements().iter().enumerate() {
        let Some(attr) = element.guide_attr.as_deref() else {
            continue;
        };
        let spec = match decode_grid_attr(attr) {
            Ok(spec) => spec,
            Err(err) => {
                if options.console_output {
                    tracing::warn!(element = index, error = %err, "skipping element with malformed guide attribute");
                }
                continue;
            }
        };
        process_element(page, index, &spec, options, &mut registry, &mut overlay);
    }

    if options.console_output {
        tracing::debug!(fragments = overlay.fragments().len(), "guide pass: complete");
    }

    overlay
}

fn process_element(
    page: &Page,
    index: usize,
    spec: &GridSpec,
    options: DriverOptions,
    registry: &mut OverlapRegistry,
    overlay: &mut Overlay,
) {
    if !spec.enabled {
        return;
    }
    if spec.disable_on_mobile && page.viewport.width < MOBILE_BREAKPOINT {
        if options.console_output {
            tracing::debug!(element = index, "skipping element on mobile viewport");
        }
        return;
    }
    let Some(element) = page.element(index) else {
        return;
    };
    let rect = element.rect;

    let obstacles = selector_rects(page, &spec.exclusion_selectors, options);

    for item in parse_selector_list(&spec.overlay_selectors) {
        match item {
            Ok(selector) => {
                for matched in select(page, &selector) {
                    overlay.push_elevated(matched);
                }
            }
            Err(err) => {
                if options.console_output {
                    tracing::warn!(error = %err, "skipping invalid overlay selector");
                }
            }
        }
    }

    for (side, config) in resolve_sides(spec) {
        if registry.should_skip(&rect, side, spec.prevent_overlap) {
            continue;
        }

        let (placement, segments) =
            layout_side(&rect, side, config, page.document, page.viewport, &obstacles);
        let color = color_with_opacity(&config.color, config.opacity);
        let fill = pattern_fill(config.style, color, side.orientation());

        for segment in segments {
            overlay.push_fragment(LineFragment::new(
                side,
                segment,
                placement.cross(),
                config.width,
                fill,
            ));
        }
    }
}

/// Boxes of every element matched by the exclusion selector list. Invalid items are skipped
/// individually, never failing the list.
fn selector_rects(page: &Page, selectors: &str, options: DriverOptions) -> Vec<Rect> {
    let mut rects = Vec::new();
    for item in parse_selector_list(selectors) {
        match item {
            Ok(selector) => {
                for index in select(page, &selector) {
                    if let Some(element) = page.element(index) {
                        rects.push(element.rect);
                    }
                }
            }
            Err(err) => {
                if options.console_output {
                    tracing::warn!(error = %err, "skipping invalid exclusion selector");
                }
            }
        }
    }
    rects
}

/// Owns the scheduler and the current overlay for one page lifecycle.
///
/// The host forwards triggers as they happen and polls with the current time; a due poll runs
/// one pass synchronously and replaces the overlay wholesale.
#[derive(Debug, Default)]
pub struct Driver {
    options: DriverOptions,
    scheduler: Scheduler,
    overlay: Option<Overlay>,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self {
            options,
            scheduler: Scheduler::new(),
            overlay: None,
        }
    }

    pub fn options(&self) -> DriverOptions {
        self.options
    }

    /// Records a host trigger, superseding any pending pass.
    pub fn notify(&mut self, trigger: Trigger, now: Instant) {
        self.scheduler.arm(trigger, now);
    }

    /// Runs a due pass, if any. The previous overlay is discarded before scanning starts.
    pub fn poll(&mut self, page: &Page, now: Instant) -> Option<&Overlay> {
        let trigger = self.scheduler.take_due(now)?;
        if self.options.console_output {
            tracing::debug!(?trigger, "guide pass: triggered");
        }
        self.overlay = None;
        self.overlay = Some(run_pass(page, self.options));
        self.overlay.as_ref()
    }

    /// The overlay from the most recent pass, if one has run.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }
}
