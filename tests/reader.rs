use std::io::{Read, Seek, SeekFrom};

use seekable_reader::codec::{Decode, FixedSize, Type};
use seekable_reader::{ByteOrder, Error, SeekableByteReader};

#[test]
fn position_follows_consumed_bytes() {
    let _ = env_logger::try_init();
    let data: Vec<u8> = (0..=31).collect();
    let mut reader = SeekableByteReader::new(&data);

    let mut expected = 0;
    assert_eq!(reader.position(), expected);
    reader.read_u8().unwrap();
    expected += 1;
    assert_eq!(reader.position(), expected);
    reader.read_i16().unwrap();
    expected += 2;
    assert_eq!(reader.position(), expected);
    reader.read_f32().unwrap();
    expected += 4;
    assert_eq!(reader.position(), expected);
    reader.read_i64().unwrap();
    expected += 8;
    assert_eq!(reader.position(), expected);
    reader.read_bytes(5).unwrap();
    expected += 5;
    assert_eq!(reader.position(), expected);
    reader.read_bool().unwrap();
    expected += 1;
    assert_eq!(reader.position(), expected);
    assert_eq!(reader.available(), data.len() - expected);
}

#[test]
fn seek_then_position() {
    let _ = env_logger::try_init();
    let data = [0u8; 8];
    let mut reader = SeekableByteReader::new(&data);
    for k in [0, 3, 8, 9, usize::MAX] {
        reader.seek(k);
        assert_eq!(reader.position(), k);
    }
    assert_eq!(reader.read_u8(), Err(Error::EndOfData));
    assert_eq!(reader.skip_bytes(1), 0);
}

#[test]
fn unread_round_trip() {
    let _ = env_logger::try_init();
    let data = [0x10, 0x20, 0x30];
    let mut reader = SeekableByteReader::new(&data);
    for _ in 0..data.len() {
        let x = reader.read_u8().unwrap();
        reader.unread_byte();
        assert_eq!(reader.read_u8(), Ok(x));
    }

    reader.unread_byte();
    reader.unread_byte();
    reader.unread_byte();
    reader.unread_byte();
    assert_eq!(reader.position(), 0);
}

#[test]
fn failed_read_is_recoverable() {
    let _ = env_logger::try_init();
    let data = [0x00, 0x00, 0x01, 0x00];
    let mut reader = SeekableByteReader::new(&data);
    reader.seek(2);
    assert_eq!(reader.read_u32(), Err(Error::EndOfData));
    assert_eq!(reader.position(), 2);

    reader.seek(0);
    assert_eq!(reader.read_u32(), Ok(0x100));
}

#[test]
fn typed_values_in_both_orders() {
    let _ = env_logger::try_init();
    let mut data = Vec::new();
    data.extend_from_slice(&(-2i16).to_be_bytes());
    data.extend_from_slice(&0xcafe_babeu32.to_be_bytes());
    data.extend_from_slice(&2.5f64.to_be_bytes());
    data.extend_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
    data.extend_from_slice(&0x0041u16.to_le_bytes());

    let mut reader = SeekableByteReader::new(&data);
    assert_eq!(reader.read_i16(), Ok(-2));
    assert_eq!(reader.read_u32(), Ok(0xcafe_babe));
    assert_eq!(reader.read_f64(), Ok(2.5));

    let start = reader.position();
    let mut reader = reader.with_byte_order(ByteOrder::LittleEndian);
    assert_eq!(reader.position(), start);
    assert_eq!(reader.read_u64(), Ok(0x0102_0304_0506_0708));
    assert_eq!(reader.read_char(), Ok('A'));
    assert_eq!(reader.available(), 0);
}

// A caller defined type read through the generic entry point.
#[derive(Debug, PartialEq)]
struct Version {
    major: u8,
    minor: u8,
}

impl FixedSize for Version {
    const SIZE: usize = 2;
}

impl Decode<'_> for Version {
    fn decode(src: &[u8], _order: ByteOrder) -> Result<Self, Error> {
        match src {
            [major, minor] => Ok(Version {
                major: *major,
                minor: *minor,
            }),
            _ => Err(Error::EndOfData),
        }
    }
}

#[test]
fn custom_decode() {
    let _ = env_logger::try_init();
    let data = [3, 7, 1];
    let mut reader = SeekableByteReader::new(&data);
    let version: Version = reader.read().unwrap();
    assert_eq!(version, Version { major: 3, minor: 7 });
    assert_eq!(version.size(), 2);
    assert_eq!(reader.read::<Version>(), Err(Error::EndOfData));
    assert_eq!(reader.position(), 2);
}

#[test]
fn std_io_adapters() {
    let _ = env_logger::try_init();
    let data = b"header:payload";
    let mut reader = SeekableByteReader::new(data);

    reader.seek(7);
    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"payload");

    assert_eq!(Seek::seek(&mut reader, SeekFrom::Start(0)).unwrap(), 0);
    let mut head = [0u8; 6];
    reader.read_exact(&mut head).unwrap();
    assert_eq!(&head, b"header");

    let err = Seek::seek(&mut reader, SeekFrom::End(-20)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert_eq!(reader.position(), 6);

    reader.seek(data.len() - 1);
    let err = reader.read_exact(&mut head).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn clones_are_independent() {
    let _ = env_logger::try_init();
    let data = [1, 2, 3];
    let mut a = SeekableByteReader::new(&data);
    a.read_u8().unwrap();
    let mut b = a.clone();
    b.seek(0);
    assert_eq!(a.read_u8(), Ok(2));
    assert_eq!(b.read_u8(), Ok(1));
}
