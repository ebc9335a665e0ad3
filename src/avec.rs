//! Convenience interfaces for tokenizing streams.
//!
//! The [`Tokenizer`] in this module pulls one [`Token`] at a time from any
//! reader, tracking the byte offset for diagnostics and reporting progress to
//! an injected [`Progress`] listener.
//!
//! _Requires Cargo feature `std`._
//!
//! # Example
//!
//! ```
//! let file = std::fs::File::open("chip.gds")?;
//! let mut tokenizer = Tokenizer::new(std::io::BufReader::new(file), "chip.gds");
//!
//! loop {
//!     match tokenizer.next_token()? {
//!         Token::Record(Some(RecordType::EndLib)) => break,
//!         Token::Record(Some(RecordType::BgnLib)) => {
//!             let modified = tokenizer.read_timestamp()?;
//!             let accessed = tokenizer.read_timestamp()?;
//!         }
//!         token => println!("{token}"),
//!     }
//! }
//! ```

pub mod date;
pub mod reader;

pub use date::Timestamp;
pub use reader::{Error, ErrorKind, Tokenizer};

use core::fmt;
use std::string::String;

use crate::sans::symbol::RecordType;

extern crate std;

/// One decoded unit of a stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A record header was read, naming the record type if it is recognised.
    Record(Option<RecordType>),
    /// A 16-bit flag word.
    Flags(u16),
    /// A 2-byte signed integer.
    Int16(i16),
    /// A 4-byte signed integer.
    Int32(i32),
    /// A real of either width.
    Real(f64),
    /// A string, with padding removed.
    Str(String),
}

impl Token {
    /// The record type of a record token.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            Self::Record(record_type) => *record_type,
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(Some(record_type)) => write!(f, "{record_type}"),
            Self::Record(None) => f.write_str("UNKNOWN"),
            Self::Flags(v) => write!(f, "{v:#06x}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v:?}"),
        }
    }
}

/// Receive the number of bytes consumed from a stream.
///
/// Any `FnMut(u64)` closure is a listener.
pub trait Progress {
    /// Called with the cumulative byte offset after every read.
    fn advance(&mut self, offset: u64);
}

/// A listener ignoring all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&mut self, _: u64) {}
}

impl<F: FnMut(u64)> Progress for F {
    fn advance(&mut self, offset: u64) {
        self(offset)
    }
}
