use crate::codec::{ByteOrder, Decode, Error, FixedSize};

fn array<const N: usize>(src: &[u8]) -> Result<[u8; N], Error> {
    src.get(..N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(Error::EndOfData)
}

//
// Implementations for primitives
//
macro_rules! impl_number {
    ($($t:ty),*) => {
        $(
            impl FixedSize for $t {
                const SIZE: usize = core::mem::size_of::<$t>();
            }

            impl Decode<'_> for $t {
                fn decode(src: &[u8], order: ByteOrder) -> Result<Self, Error> {
                    let bytes = array(src)?;
                    Ok(match order {
                        ByteOrder::BigEndian => <$t>::from_be_bytes(bytes),
                        ByteOrder::LittleEndian => <$t>::from_le_bytes(bytes),
                    })
                }
            }
        )*
    };
}

impl_number!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl FixedSize for bool {
    const SIZE: usize = 1;
}

impl Decode<'_> for bool {
    fn decode(src: &[u8], order: ByteOrder) -> Result<Self, Error> {
        Ok(u8::decode(src, order)? != 0)
    }
}

// A single UTF-16 code unit.
impl FixedSize for char {
    const SIZE: usize = 2;
}

impl Decode<'_> for char {
    fn decode(src: &[u8], order: ByteOrder) -> Result<Self, Error> {
        let unit = u16::decode(src, order)?;
        char::from_u32(unit as u32).ok_or(Error::InvalidValue)
    }
}
