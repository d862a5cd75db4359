// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 1-based page cursor with a page count that may not be known yet.

use core::fmt;

/// Error returned when jumping to a page outside the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageOutOfRange {
    /// The requested 1-based page number.
    pub requested: u32,
    /// The document's page count, if known.
    pub total: Option<u32>,
}

impl fmt::Display for PageOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            Some(total) => write!(
                f,
                "page {} is out of range (document has {} pages)",
                self.requested, total
            ),
            None => write!(
                f,
                "page {} is out of range (page count not known yet)",
                self.requested
            ),
        }
    }
}

impl core::error::Error for PageOutOfRange {}

/// Current page of an open document.
///
/// Pages are numbered from 1. Until the page count is known only page 1 is
/// reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    total: Option<u32>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    /// Cursor on page 1 of a document whose page count is not known yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: 1,
            total: None,
        }
    }

    /// Current 1-based page number.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Page count, once reported.
    #[must_use]
    pub fn total(&self) -> Option<u32> {
        self.total
    }

    /// Records the document's page count.
    ///
    /// The current page is pulled back to the last page if it falls outside.
    /// Returns `true` if that moved the cursor.
    pub fn set_total(&mut self, total: u32) -> bool {
        self.total = Some(total);
        let last = total.max(1);
        if self.current > last {
            self.current = last;
            true
        } else {
            false
        }
    }

    /// Returns `true` if there is a page before the current one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Returns `true` if there is a known page after the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.total.is_some_and(|total| self.current < total)
    }

    /// Moves to the previous page. Returns `false` on the first page.
    pub fn step_back(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Moves to the next page. Returns `false` on the last page.
    pub fn step_forward(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Jumps to `page`.
    pub fn go_to(&mut self, page: u32) -> Result<(), PageOutOfRange> {
        if !self.contains(page) {
            return Err(PageOutOfRange {
                requested: page,
                total: self.total,
            });
        }
        self.current = page;
        Ok(())
    }

    /// Returns `true` if `page` can be navigated to.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        match self.total {
            Some(total) => (1..=total).contains(&page),
            None => page == 1,
        }
    }
}
