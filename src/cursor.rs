//! Cursor over a byte slice.
//!

use crate::codec::Error;

/// Tracks where a byte slice is being read.
///
/// The position is normally within `0..=len`, but [`ReadCursor::seek`] does not validate its
/// target: a position past the end is kept as is and every following read fails with
/// [`Error::EndOfData`].
#[derive(Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct ReadCursor<'d> {
    pos: usize,
    data: &'d [u8],
}

impl<'d> ReadCursor<'d> {
    /// Creates a new read cursor at the beginning of the data.
    pub fn new(data: &'d [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Returns the current offset from the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to `pos`. Any value is accepted.
    pub fn seek(&mut self, pos: usize) {
        if pos > self.data.len() {
            trace!("[cursor] seek to {} past end {}", pos, self.data.len());
        }
        self.pos = pos;
    }

    /// Steps back a single byte, unless already at the start.
    pub fn unread_byte(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Rewinds the cursor back to the beginning of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Takes the next `nbytes` bytes, or fails without moving if fewer remain.
    pub fn take(&mut self, nbytes: usize) -> Result<&'d [u8], Error> {
        match self.remaining_from_pos().and_then(|rest| rest.get(..nbytes)) {
            Some(src) => {
                self.pos += nbytes;
                Ok(src)
            }
            None => {
                trace!(
                    "[cursor] end of data at {}: wanted {}, {} available",
                    self.pos,
                    nbytes,
                    self.available()
                );
                Err(Error::EndOfData)
            }
        }
    }

    /// Advances by up to `nbytes`, stopping at the end. Returns the number of bytes skipped.
    pub fn skip(&mut self, nbytes: usize) -> usize {
        let n = nbytes.min(self.available());
        self.pos += n;
        n
    }

    /// Returns amount of bytes that remain ahead of the cursor.
    pub fn available(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns the total length of the data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the bytes not yet read.
    pub fn remaining(&self) -> &'d [u8] {
        self.remaining_from_pos().unwrap_or(&[])
    }

    // None once the cursor has been moved past the end.
    fn remaining_from_pos(&self) -> Option<&'d [u8]> {
        self.data.get(self.pos..)
    }
}
