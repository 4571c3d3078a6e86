// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Horos — layout guide overlay engine.
//!
//! Given a measured page snapshot and per-element guide configuration, Horos computes the
//! visible guide-line segments for each configured side (splitting them around exclusion zones
//! and de-duplicating shared edges) and emits overlay fragment descriptors, or static CSS
//! pseudo-element rules for the measurement-free path.

pub mod driver;
pub mod format;
pub mod layout;
pub mod model;
pub mod query;
pub mod render;
