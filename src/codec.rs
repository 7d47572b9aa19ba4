//! Fixed-width binary codec
//!
//! Multi-byte values are decoded in the [`ByteOrder`] handed to [`Decode::decode`].

use core::fmt;

pub trait FixedSize: Sized {
    const SIZE: usize;
}

pub trait Type: Sized {
    fn size(&self) -> usize;
}

/// Decodes a value from exactly [`Type::size`] bytes.
///
/// The caller hands over a slice of the right width; bounds are checked where the
/// bytes are consumed, not here.
pub trait Decode<'d>: Type {
    fn decode(src: &'d [u8], order: ByteOrder) -> Result<Self, Error>;
}

impl<T: FixedSize> Type for T {
    fn size(&self) -> usize {
        Self::SIZE
    }
}

/// Byte order of multi-byte values.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first, as written by `DataOutput` style streams.
    #[default]
    BigEndian,
    LittleEndian,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes remain ahead of the cursor than the read requested.
    EndOfData,
    /// The bytes were consumed but do not form a valid value.
    InvalidValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOfData => f.write_str("end of data"),
            Error::InvalidValue => f.write_str("invalid value"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        let kind = match error {
            Error::EndOfData => std::io::ErrorKind::UnexpectedEof,
            Error::InvalidValue => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, error)
    }
}
