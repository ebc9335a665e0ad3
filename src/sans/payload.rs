//! States processing record payloads.

use core::marker::PhantomData;

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::{
    header::{DataType, RecordHeader},
    real::{decode_f32, decode_f64},
};

/// State token to decode a payload unit of type `T`.
#[derive(Debug)]
pub struct Unit<T> {
    pub(super) bytes_remaining: u16,
    pub(super) _phantom: PhantomData<T>,
}

impl<T: UnitInner> Unit<T> {
    /// The number of payload bytes left in the record, always a non-zero
    /// multiple of the unit size.
    pub fn bytes_remaining(&self) -> u16 {
        self.bytes_remaining
    }

    /// Transition to another state by decoding a payload unit of type `T`.
    ///
    /// Returns the unit value as a Rust primitive, and a successor state.
    pub fn advance(self, r: T::From) -> (T::Into, Either<RecordHeader, Self>) {
        let value = T::from(r);

        let size = size_of::<T::From>() as u16;

        let successor = if self.bytes_remaining == size {
            Left(RecordHeader(()))
        } else {
            Right(Self {
                bytes_remaining: self.bytes_remaining - size,
                _phantom: PhantomData,
            })
        };

        (value, successor)
    }
}

pub trait UnitInner {
    /// The data storing this unit.
    type From;
    /// The primitive corresponding to this unit.
    type Into;

    /// Convert data of this unit to the corresponding primitive.
    fn from(r: Self::From) -> Self::Into;
}

macro_rules! unit_inner {
    ($t:ident, $into:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl UnitInner for $t {
            type From = [u8; size_of::<Self::Into>()];
            type Into = $into;

            fn from(r: Self::From) -> Self::Into {
                Self::Into::from_be_bytes(r)
            }
        }
    };
}

unit_inner!(Flags, u16, /** Bit array */);
unit_inner!(I16, i16, /** 2-byte signed integer */);
unit_inner!(I32, i32, /** 4-byte signed integer */);

/// 4-byte excess-64 real
#[derive(Debug)]
pub struct F32;

impl UnitInner for F32 {
    type From = [u8; 4];
    type Into = f32;

    fn from(r: Self::From) -> Self::Into {
        decode_f32(r)
    }
}

/// 8-byte excess-64 real
#[derive(Debug)]
pub struct F64;

impl UnitInner for F64 {
    type From = [u8; 8];
    type Into = f64;

    fn from(r: Self::From) -> Self::Into {
        decode_f64(r)
    }
}

/// State token to decode a string payload.
///
/// Unlike other payloads, a string is decoded from every remaining byte of the
/// record at once.
#[derive(Debug)]
pub struct Text {
    pub(super) bytes_remaining: u16,
}

impl Text {
    /// The number of bytes making up the string, including padding.
    pub fn bytes_remaining(&self) -> u16 {
        self.bytes_remaining
    }

    /// Transition to another state by decoding a string.
    ///
    /// **This method expects exactly [`Text::bytes_remaining`] bytes.**
    ///
    /// Returns the characters of the string, one per byte with padding NULs
    /// removed, and a successor state token.
    pub fn advance(self, r: &[u8]) -> (impl Iterator<Item = char>, RecordHeader) {
        debug_assert_eq!(r.len(), usize::from(self.bytes_remaining));

        let chars = r.iter().filter(|b| **b != 0).map(|b| char::from(*b));

        (chars, RecordHeader(()))
    }
}

/// Why a record's payload cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPayload {
    /// The header named an out-of-range datatype.
    #[error("Bad data type ({0}).")]
    DataType(u8),
    /// The payload does not divide into whole units.
    #[error("Payload of {length} bytes is not a whole number of {data_type} values.")]
    Misaligned { data_type: DataType, length: u16 },
    /// A record declared without data carries payload bytes.
    #[error("Record without data carries {0} payload bytes.")]
    Unexpected(u16),
}

/// A payload state token for a datatype.
#[derive(Debug)]
pub enum AnyPayload {
    Flags(Unit<Flags>),
    I16(Unit<I16>),
    I32(Unit<I32>),
    F32(Unit<F32>),
    F64(Unit<F64>),

    Text(Text),

    /// A payload that must not be decoded. There is no successor state.
    Invalid(InvalidPayload),
}

impl AnyPayload {
    /// The number of payload bytes left in the record, unless the payload is
    /// invalid.
    pub fn bytes_remaining(&self) -> Option<u16> {
        match self {
            Self::Flags(s) => Some(s.bytes_remaining()),
            Self::I16(s) => Some(s.bytes_remaining()),
            Self::I32(s) => Some(s.bytes_remaining()),
            Self::F32(s) => Some(s.bytes_remaining()),
            Self::F64(s) => Some(s.bytes_remaining()),
            Self::Text(s) => Some(s.bytes_remaining()),
            Self::Invalid(_) => None,
        }
    }
}
