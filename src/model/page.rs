// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The measured page snapshot a pass operates on.
//!
//! The host measures once per pass and hands the result over as plain data: document and
//! viewport sizes plus a flat element list in document order. Parents must be pushed before
//! their children so `parent` indices always point backwards; ancestry walks rely on that.

use super::geom::{Rect, Size};

/// One measured element.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    /// Lowercased tag name.
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// The serialized guide attribute, if the element carries one.
    pub guide_attr: Option<String>,
    /// Document-space bounding box.
    pub rect: Rect,
    /// Index of the parent element within the page, if it was measured too.
    pub parent: Option<usize>,
}

impl PageElement {
    pub fn new(tag: impl Into<String>, rect: Rect) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            guide_attr: None,
            rect,
            parent: None,
        }
    }
}

/// A full snapshot: sizes plus elements in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub document: Size,
    pub viewport: Size,
    elements: Vec<PageElement>,
}

impl Page {
    pub fn new(document: Size, viewport: Size) -> Self {
        Self {
            document,
            viewport,
            elements: Vec::new(),
        }
    }

    /// Appends an element and returns its index, for wiring up children.
    pub fn push(&mut self, element: PageElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&PageElement> {
        self.elements.get(index)
    }
}
