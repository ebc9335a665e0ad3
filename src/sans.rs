//! Internal finite-state machine for implementing tokenizers.
//!
//! This module is intended for applications that need fine control over how
//! bytes reach the decoder, such as those running on embedded systems or
//! reading from memory-mapped files. See [`crate::avec`] for a pull-based
//! tokenizer over any reader.
//!
//! # Architecture
//!
//! A GDSII stream is a flat sequence of records. Each record starts with a
//! four-byte header (a big-endian length word covering the whole record, a
//! record-type code, and a datatype code), followed by a payload of
//! fixed-size units, or a single padded string.
//!
//! All states are represented by a non-copy token. Once enough bytes are
//! ready, transition to another state by calling the token's `advance` method.
//! This will return a successor state token, along with any extracted data.
//!
//! - [`header::RecordHeader`] takes four bytes and yields a
//!   [`header::Header`], followed by either the next record header (for
//!   records without payload) or an [`payload::AnyPayload`].
//! - [`payload::Unit`] takes one unit of its type per transition, until the
//!   payload is exhausted.
//! - [`payload::Text`] takes the whole remaining payload at once.
//! - [`payload::AnyPayload::Invalid`] has no successor. Decoding of the stream
//!   cannot continue.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. The machine never looks behind the current record, so bytes
//! can be discarded as soon as they have been advanced over.
//!
//! Some areas of the decoding process are not represented in the finite-state
//! machine and must be carefully written:
//!
//! - Reading the correct number of bytes for each state, in particular the
//!   variable-length string payload.
//!
//! - Ending decoding once the library has been closed, or the input has run
//!   out.

pub mod header;
pub mod payload;
pub mod real;
pub mod symbol;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::RecordHeader;
