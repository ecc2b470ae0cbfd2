/// Lightbox state machine
///
/// Two states: closed, or open at an index into the lightbox image set
/// (hero at slot 0, gallery tiles at 1..). Transitions take the current
/// set length as a parameter so the machine itself never holds a stale
/// copy of the list. All transitions keep the index inside
/// `[0, len - 1]`; navigation wraps around at both ends.

use crate::gallery::clamp_index;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
    index: usize,
}

impl Lightbox {
    /// Closed, at slot 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current slot. Only meaningful to render while open, but kept
    /// across close/reopen so the viewer resumes where it left off.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Open at the requested slot, clamped into range.
    pub fn open(&mut self, requested: usize, len: usize) {
        self.index = clamp_index(requested as isize, len as isize);
        self.open = true;
    }

    /// Close the overlay. The index is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance one slot, wrapping from the last back to the first.
    /// No-op while closed or when the set is empty.
    pub fn next(&mut self, len: usize) {
        if self.open && len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Step back one slot, wrapping from the first to the last.
    pub fn previous(&mut self, len: usize) {
        if self.open && len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Jump straight to a slot (thumbnail strip click), clamped.
    pub fn jump_to(&mut self, requested: usize, len: usize) {
        if self.open {
            self.index = clamp_index(requested as isize, len as isize);
        }
    }
}
