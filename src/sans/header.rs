//! States processing record headers.

use core::{fmt, marker::PhantomData};

use either::Either::{self, Left, Right};
use thiserror::Error;
use zerocopy::FromBytes;

use super::{
    payload::{AnyPayload, InvalidPayload, Text, Unit},
    symbol::RecordType,
};

/// The interpretation of a record's payload, identified by the fourth byte of
/// its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// No payload.
    None,
    /// 16-bit flag words.
    BitArray,
    /// Signed 16-bit integers.
    Int16,
    /// Signed 32-bit integers.
    Int32,
    /// Four-byte excess-64 reals.
    Float32,
    /// Eight-byte excess-64 reals.
    Float64,
    /// A single NUL-padded string occupying the whole payload.
    String,
    /// An out-of-range datatype code.
    Invalid(u8),
}

impl DataType {
    /// Interpret a header datatype code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::None,
            1 => Self::BitArray,
            2 => Self::Int16,
            3 => Self::Int32,
            4 => Self::Float32,
            5 => Self::Float64,
            6 => Self::String,
            _ => Self::Invalid(code),
        }
    }

    /// The header code for this datatype.
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::BitArray => 1,
            Self::Int16 => 2,
            Self::Int32 => 3,
            Self::Float32 => 4,
            Self::Float64 => 5,
            Self::String => 6,
            Self::Invalid(code) => code,
        }
    }

    /// The number of payload bytes decoded as a single value, for datatypes
    /// made up of fixed-size units.
    pub fn unit_size(self) -> Option<u16> {
        match self {
            Self::BitArray | Self::Int16 => Some(2),
            Self::Int32 | Self::Float32 => Some(4),
            Self::Float64 => Some(8),
            Self::None | Self::String | Self::Invalid(_) => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("no data"),
            Self::BitArray => f.write_str("bit array"),
            Self::Int16 => f.write_str("2-byte integer"),
            Self::Int32 => f.write_str("4-byte integer"),
            Self::Float32 => f.write_str("4-byte real"),
            Self::Float64 => f.write_str("8-byte real"),
            Self::String => f.write_str("string"),
            Self::Invalid(code) => write!(f, "invalid datatype {code}"),
        }
    }
}

/// A decoded record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// The record length in bytes, including the header itself.
    pub length: u16,
    /// The raw record-type code.
    pub code: u8,
    /// The record type, if the code is recognised.
    pub record_type: Option<RecordType>,
    /// The payload datatype.
    pub data_type: DataType,
}

impl Header {
    /// The number of payload bytes following the header.
    pub fn payload_len(&self) -> u16 {
        self.length.saturating_sub(4)
    }
}

/// An error advancing over a record header.
#[derive(Debug, Error)]
pub enum RecordHeaderError {
    /// The length word cannot cover the header itself.
    #[error("Record length ({0}) is shorter than its header.")]
    Length(u16),
}

/// State token to decode a record header.
///
/// This is both the initial state and the state reached once a record's
/// payload has been exhausted.
#[derive(Debug)]
pub struct RecordHeader(pub(super) ());

impl RecordHeader {
    /// Construct the initial state, positioned at the start of a stream.
    pub const fn new() -> Self {
        Self(())
    }

    /// Transition to another state by decoding a record header.
    ///
    /// Returns the decoded header, and a successor state token. A record
    /// without payload bytes leads straight to the next record header.
    pub fn advance(
        self,
        r: [u8; 4],
    ) -> Result<(Header, Either<AnyPayload, RecordHeader>), RecordHeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawHeader {
            length: [u8; 2],
            record_type: u8,
            data_type: u8,
        }

        let RawHeader {
            length,
            record_type,
            data_type,
        } = zerocopy::transmute!(r);

        let length = u16::from_be_bytes(length);
        if length < 4 {
            Err(RecordHeaderError::Length(length))?;
        }

        let header = Header {
            length,
            code: record_type,
            record_type: RecordType::lookup(record_type),
            data_type: DataType::from_code(data_type),
        };

        let bytes_remaining = header.payload_len();
        if bytes_remaining == 0 {
            return Ok((header, Right(RecordHeader(()))));
        }

        fn new_unit<T>(bytes_remaining: u16) -> Unit<T> {
            Unit {
                bytes_remaining,
                _phantom: PhantomData,
            }
        }

        let data_type = header.data_type;
        let successor = match data_type.unit_size() {
            Some(size) if bytes_remaining % size != 0 => {
                AnyPayload::Invalid(InvalidPayload::Misaligned {
                    data_type,
                    length: bytes_remaining,
                })
            }
            _ => match data_type {
                DataType::BitArray => AnyPayload::Flags(new_unit(bytes_remaining)),
                DataType::Int16 => AnyPayload::I16(new_unit(bytes_remaining)),
                DataType::Int32 => AnyPayload::I32(new_unit(bytes_remaining)),
                DataType::Float32 => AnyPayload::F32(new_unit(bytes_remaining)),
                DataType::Float64 => AnyPayload::F64(new_unit(bytes_remaining)),
                DataType::String => AnyPayload::Text(Text { bytes_remaining }),
                DataType::None => AnyPayload::Invalid(InvalidPayload::Unexpected(bytes_remaining)),
                DataType::Invalid(code) => AnyPayload::Invalid(InvalidPayload::DataType(code)),
            },
        };

        Ok((header, Left(successor)))
    }
}

impl Default for RecordHeader {
    fn default() -> Self {
        Self::new()
    }
}
