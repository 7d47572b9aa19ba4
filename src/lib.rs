//! A random access reader over an in-memory byte buffer.
//!
//! [`SeekableByteReader`] reads fixed-width values sequentially, like a binary input stream,
//! and also lets the caller work on the read position directly:
//!
//!  - [`position`](SeekableByteReader::position) returns the current offset
//!  - [`seek`](SeekableByteReader::seek) moves to any offset, without validating it
//!  - [`unread_byte`](SeekableByteReader::unread_byte) pushes back exactly one byte
//!
//! A read that needs more bytes than remain fails with [`Error::EndOfData`] and leaves the
//! position untouched.
//!
//! # Pushing back and seeking
//! ```rust
//! use seekable_reader::{Error, SeekableByteReader};
//!
//! let data = [0x01, 0x02, 0x03, 0x04];
//! let mut reader = SeekableByteReader::new(&data);
//!
//! assert_eq!(reader.read_u8(), Ok(0x01));
//! assert_eq!(reader.read_u8(), Ok(0x02));
//! reader.unread_byte();
//! assert_eq!(reader.read_u8(), Ok(0x02));
//!
//! reader.seek(3);
//! assert_eq!(reader.read_u8(), Ok(0x04));
//! assert_eq!(reader.read_u8(), Err(Error::EndOfData));
//! assert_eq!(reader.position(), 4);
//! ```
//!
//! # Seeking past the end is accepted, reading from there is not
//! ```rust
//! # use seekable_reader::{Error, SeekableByteReader};
//! let data = [0u8; 4];
//! let mut reader = SeekableByteReader::new(&data);
//!
//! reader.seek(100);
//! assert_eq!(reader.position(), 100);
//! assert_eq!(reader.available(), 0);
//! assert_eq!(reader.read_u16(), Err(Error::EndOfData));
//! ```
//!
//! # Byte order
//! Multi-byte values are big endian unless configured otherwise.
//! ```rust
//! use seekable_reader::{ByteOrder, SeekableByteReader};
//!
//! let data = [0x12, 0x34];
//! assert_eq!(SeekableByteReader::new(&data).read_u16(), Ok(0x1234));
//!
//! let mut reader = SeekableByteReader::new(&data).with_byte_order(ByteOrder::LittleEndian);
//! assert_eq!(reader.read_u16(), Ok(0x3412));
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod fmt;

mod byte_reader;
pub mod codec;
mod cursor;
pub(crate) mod types;

pub use byte_reader::SeekableByteReader;
pub use codec::{ByteOrder, Error};
pub use cursor::ReadCursor;
