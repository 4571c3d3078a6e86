// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only selector queries over a page snapshot.

use crate::model::page::{Page, PageElement};
use crate::model::selector::{CompoundSelector, Selector};

/// Indices of every element the selector matches, in document order.
pub fn select(page: &Page, selector: &Selector) -> Vec<usize> {
    (0..page.elements().len())
        .filter(|&index| matches(page, index, selector))
        .collect()
}

/// Whether the element at `index` matches the full selector (subject plus ancestor chain).
pub fn matches(page: &Page, index: usize, selector: &Selector) -> bool {
    let Some(element) = page.element(index) else {
        return false;
    };
    if !matches_compound(element, selector.subject()) {
        return false;
    }

    // Ancestor compounds, innermost first. Each must be found strictly above the previous
    // match on the parent chain.
    let mut cursor = parent_of(page, index);
    for compound in selector.parts().iter().rev().skip(1) {
        loop {
            let Some(ancestor_index) = cursor else {
                return false;
            };
            let Some(ancestor) = page.element(ancestor_index) else {
                return false;
            };
            cursor = parent_of(page, ancestor_index);
            if matches_compound(ancestor, compound) {
                break;
            }
        }
    }
    true
}

/// Parent index, refusing forward references so malformed snapshots cannot loop the walk.
fn parent_of(page: &Page, index: usize) -> Option<usize> {
    let parent = page.element(index)?.parent?;
    if parent >= index {
        return None;
    }
    Some(parent)
}

fn matches_compound(element: &PageElement, compound: &CompoundSelector) -> bool {
    if let Some(tag) = &compound.tag {
        if !element.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
    }
    if let Some(id) = &compound.id {
        if element.id.as_deref() != Some(id.as_str()) {
            return false;
        }
    }
    compound
        .classes
        .iter()
        .all(|class| element.classes.iter().any(|have| have == class))
}
