use crate::codec::{ByteOrder, Decode, Error, FixedSize};
use crate::cursor::ReadCursor;

/// Random access reader over an in-memory byte buffer.
///
/// Values are read sequentially like from a binary input stream, while the read position can be
/// queried, moved anywhere with [`seek`](Self::seek) and stepped back with
/// [`unread_byte`](Self::unread_byte). A failed read never moves the position.
#[derive(Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct SeekableByteReader<'d> {
    cursor: ReadCursor<'d>,
    order: ByteOrder,
}

macro_rules! read_fn {
    ($($(#[$meta:meta])* $name:ident -> $t:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self) -> Result<$t, Error> {
                self.read::<$t>()
            }
        )*
    };
}

impl<'d> SeekableByteReader<'d> {
    /// Creates a big endian reader positioned at the start of `buf`.
    pub fn new(buf: &'d [u8]) -> Self {
        Self {
            cursor: ReadCursor::new(buf),
            order: ByteOrder::default(),
        }
    }

    /// Changes the byte order used for multi-byte values.
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Moves the read position to `pos`.
    ///
    /// The target is not validated. A position past the end is kept, and the next read fails
    /// with [`Error::EndOfData`].
    pub fn seek(&mut self, pos: usize) {
        trace!("[reader] seek {} -> {}", self.cursor.position(), pos);
        self.cursor.seek(pos);
    }

    /// Pushes back the last consumed byte, so that the next read returns it again.
    ///
    /// Always steps back exactly one byte, whatever the width of the last read. Does nothing at
    /// the start of the buffer.
    pub fn unread_byte(&mut self) {
        self.cursor.unread_byte();
    }

    /// Total length of the buffer.
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Number of bytes left ahead of the read position.
    pub fn available(&self) -> usize {
        self.cursor.available()
    }

    /// Skips up to `n` bytes without reading past the end, returning how many were skipped.
    pub fn skip_bytes(&mut self, n: usize) -> usize {
        self.cursor.skip(n)
    }

    /// The bytes not read yet. Does not move the read position.
    pub fn remaining(&self) -> &'d [u8] {
        self.cursor.remaining()
    }

    /// Reads a fixed size value in the reader's byte order.
    pub fn read<T: Decode<'d> + FixedSize>(&mut self) -> Result<T, Error> {
        let src = self.cursor.take(T::SIZE)?;
        T::decode(src, self.order)
    }

    read_fn! {
        read_u8 -> u8;
        read_i8 -> i8;
        /// Reads one byte, any non-zero value is `true`.
        read_bool -> bool;
        read_u16 -> u16;
        read_i16 -> i16;
        /// Reads a single UTF-16 code unit. Surrogates fail with [`Error::InvalidValue`].
        read_char -> char;
        read_u32 -> u32;
        read_i32 -> i32;
        read_u64 -> u64;
        read_i64 -> i64;
        read_f32 -> f32;
        read_f64 -> f64;
    }

    /// Reads the next `n` bytes without copying.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'d [u8], Error> {
        self.cursor.take(n)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut dest = [0; N];
        self.read_fully(&mut dest)?;
        Ok(dest)
    }

    /// Fills all of `dest`, or fails without consuming anything.
    pub fn read_fully(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        let src = self.cursor.take(dest.len())?;
        dest.copy_from_slice(src);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::io::Read for SeekableByteReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.available());
        if n == 0 {
            return Ok(0);
        }
        self.read_fully(&mut buf[..n])?;
        Ok(n)
    }
}

#[cfg(feature = "std")]
impl std::io::Seek for SeekableByteReader<'_> {
    fn seek(&mut self, seek_from: std::io::SeekFrom) -> std::io::Result<u64> {
        use std::io::{Error as IoError, ErrorKind, SeekFrom};

        let target = match seek_from {
            SeekFrom::Start(pos) => Some(pos),
            SeekFrom::End(offset) => (self.len() as u64).checked_add_signed(offset),
            SeekFrom::Current(offset) => (self.position() as u64).checked_add_signed(offset),
        };
        match target.and_then(|pos| usize::try_from(pos).ok()) {
            Some(pos) => {
                SeekableByteReader::seek(self, pos);
                Ok(pos as u64)
            }
            None => {
                warn!("[reader] invalid seek from {}", self.position());
                Err(IoError::new(
                    ErrorKind::InvalidInput,
                    "invalid seek to a negative or overflowing position",
                ))
            }
        }
    }

    fn stream_position(&mut self) -> std::io::Result<u64> {
        Ok(self.position() as u64)
    }
}
