// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pass scheduling: settle delays and the resize debounce.
//!
//! One pending (deadline, trigger) slot with cancel-on-supersede: a newer trigger replaces
//! whatever was pending, which is exactly the debounce behavior for a resize storm. The clock
//! is always passed in, never read, so trigger/fire sequences are deterministic under test.

use std::time::{Duration, Instant};

/// The externally observable re-entry points into the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// DOM ready; a short settle delay lets layout stabilize first.
    DomReady,
    /// Full window load; images/fonts may have shifted layout since the first pass.
    WindowLoad,
    /// Window resize; debounced so interactive resizing does not thrash.
    Resize,
}

impl Trigger {
    /// Delay between the trigger and the pass it schedules.
    pub fn delay(self) -> Duration {
        match self {
            Trigger::DomReady => Duration::from_millis(100),
            Trigger::WindowLoad => Duration::from_millis(200),
            Trigger::Resize => Duration::from_millis(200),
        }
    }
}

/// Single-slot pass scheduler.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Option<(Instant, Trigger)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the pass timer for `trigger`, replacing any pending deadline.
    pub fn arm(&mut self, trigger: Trigger, now: Instant) {
        self.pending = Some((now + trigger.delay(), trigger));
    }

    /// Takes the pending trigger once its deadline has passed. Returns `None` while the slot is
    /// empty or still waiting.
    pub fn take_due(&mut self, now: Instant) -> Option<Trigger> {
        match self.pending {
            Some((deadline, trigger)) if now >= deadline => {
                self.pending = None;
                Some(trigger)
            }
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<(Instant, Trigger)> {
        self.pending
    }
}
