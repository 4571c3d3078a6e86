// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire formats: the serialized guide attribute and selector lists.

pub mod attr;
pub mod selector;

pub use attr::{decode_grid_attr, encode_grid_attr, GridAttrError};
pub use selector::{parse_selector, parse_selector_list, SelectorParseError};
