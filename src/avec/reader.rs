//! Reader-based tokenizer implementation.
//!
//! _Requires Cargo feature `std`._

use core::mem;
use std::{
    io::{self, Read},
    string::String,
};

use either::Either::{self, Left, Right};
use log::{debug, trace, warn};
use thiserror::Error;

use crate::sans::{
    Decoder,
    header::{Header, RecordHeader, RecordHeaderError},
    payload::{AnyPayload, InvalidPayload, Unit, UnitInner},
    symbol::RecordType,
};

use super::{NoProgress, Progress, Timestamp, Token};

extern crate std;

/// An error tokenizing a stream, with the position it occurred at.
#[derive(Debug, Error)]
#[error("{path} at byte {offset}: {kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The number of bytes consumed from the stream when the error occurred.
    pub offset: u64,
    /// The identifier of the stream, as supplied to the tokenizer.
    pub path: String,
}

/// Errors occurring while tokenizing a stream.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The stream ended within a record.
    #[error("Unexpectedly reached the end of the stream.")]
    Truncated,
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A record header is corrupt.
    #[error("Corrupt record header: {0}")]
    Header(#[from] RecordHeaderError),
    /// A record payload cannot be decoded.
    #[error("Undecodable record payload: {0}")]
    Payload(#[from] InvalidPayload),
    /// The tokens read do not have the expected shape.
    #[error("{0}")]
    Malformed(String),
    /// An earlier error left the tokenizer unable to continue.
    #[error("Tokenizer halted by an earlier error.")]
    Halted,
}

enum State {
    Header(RecordHeader),
    Payload(AnyPayload),
    Halted,
}

/// Pull tokens from a reader of a stream.
///
/// Each call to [`Tokenizer::next_token`] either reads a record header,
/// returning [`Token::Record`], or decodes the next value of the current
/// record's payload. Bytes are read strictly in order, and none are read
/// beyond the token returned, so a `BufReader` is recommended for files.
///
/// Any error is final: further calls fail with [`ErrorKind::Halted`].
pub struct Tokenizer<R, P = NoProgress> {
    reader: R,
    path: String,
    progress: P,
    offset: u64,
    header: Option<Header>,
    state: State,
}

impl<R: Read> Tokenizer<R> {
    /// Tokenize a reader, identified in diagnostics by `path`.
    pub fn new(reader: R, path: impl Into<String>) -> Self {
        Self::with_progress(reader, path, NoProgress)
    }
}

impl<R: Read, P: Progress> Tokenizer<R, P> {
    /// Tokenize a reader, identified in diagnostics by `path`, reporting
    /// progress to a listener.
    pub fn with_progress(reader: R, path: impl Into<String>, progress: P) -> Self {
        Self {
            reader,
            path: path.into(),
            progress,
            offset: 0,
            header: None,
            state: State::Header(Decoder::new()),
        }
    }

    /// Read the next token from the stream.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match mem::replace(&mut self.state, State::Halted) {
            State::Header(state) => self.read_header(state),
            State::Payload(state) => self.decode_payload(state),
            State::Halted => Err(self.error(ErrorKind::Halted)),
        }
    }

    /// Read a date and time, stored as six consecutive 2-byte integers.
    ///
    /// Two-digit years are windowed: those above 60 fall in the 1900s, the
    /// remainder in the 2000s.
    pub fn read_timestamp(&mut self) -> Result<Timestamp, Error> {
        let mut fields = [0; 6];

        for field in &mut fields {
            match self.next_token()? {
                Token::Int16(value) => *field = value,
                _ => {
                    self.state = State::Halted;
                    return Err(self.fail("Date value is not a valid number."));
                }
            }
        }

        Ok(Timestamp::from_fields(fields))
    }

    /// Construct an error at the current position of the stream.
    pub fn fail(&self, message: impl Into<String>) -> Error {
        self.error(ErrorKind::Malformed(message.into()))
    }

    /// The number of bytes consumed from the stream.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The number of payload bytes left in the current record.
    pub fn remaining(&self) -> u16 {
        match &self.state {
            State::Payload(state) => state
                .bytes_remaining()
                .or_else(|| self.header.map(|h| h.payload_len()))
                .unwrap_or(0),
            State::Header(_) | State::Halted => 0,
        }
    }

    /// The most recently read record header.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// The raw length word of the most recently read record header.
    pub fn header_word(&self) -> Option<u16> {
        self.header.map(|h| h.length)
    }

    /// The type of the most recently read record, if it is recognised.
    pub fn record_type(&self) -> Option<RecordType> {
        self.header.and_then(|h| h.record_type)
    }

    /// The identifier of the stream used in diagnostics.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Recover the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_header(&mut self, state: RecordHeader) -> Result<Token, Error> {
        let start = self.offset;

        let (header, successor) = state
            .advance(self.take()?)
            .map_err(|e| self.error(e.into()))?;

        trace!(
            "{}: {} record of {} bytes ({}) at byte {start}",
            self.path,
            header.record_type.map_or("UNKNOWN", RecordType::name),
            header.length,
            header.data_type,
        );

        if header.record_type.is_none() {
            warn!(
                "{}: unrecognised record type {} at byte {start}",
                self.path, header.code,
            );
        }

        self.header = Some(header);
        self.state = match successor {
            Left(state) => State::Payload(state),
            Right(state) => State::Header(state),
        };

        Ok(Token::Record(header.record_type))
    }

    fn decode_payload(&mut self, state: AnyPayload) -> Result<Token, Error> {
        let (token, successor) = match state {
            AnyPayload::Flags(s) => self.decode_unit(s, Token::Flags, AnyPayload::Flags)?,
            AnyPayload::I16(s) => self.decode_unit(s, Token::Int16, AnyPayload::I16)?,
            AnyPayload::I32(s) => self.decode_unit(s, Token::Int32, AnyPayload::I32)?,
            AnyPayload::F32(s) => {
                self.decode_unit(s, |v: f32| Token::Real(f64::from(v)), AnyPayload::F32)?
            }
            AnyPayload::F64(s) => self.decode_unit(s, Token::Real, AnyPayload::F64)?,

            AnyPayload::Text(s) => {
                let mut buf = std::vec![0; usize::from(s.bytes_remaining())];
                self.fill(&mut buf)?;

                let (chars, successor) = s.advance(&buf);
                (Token::Str(chars.collect()), Left(successor))
            }

            AnyPayload::Invalid(reason) => Err(self.error(reason.into()))?,
        };

        self.state = match successor {
            Left(state) => State::Header(state),
            Right(state) => State::Payload(state),
        };

        Ok(token)
    }

    fn decode_unit<T: UnitInner<From = [u8; N]>, const N: usize>(
        &mut self,
        state: Unit<T>,
        token: fn(T::Into) -> Token,
        repeat: fn(Unit<T>) -> AnyPayload,
    ) -> Result<(Token, Either<RecordHeader, AnyPayload>), Error> {
        let (value, successor) = state.advance(self.take()?);

        Ok((token(value), successor.map_right(repeat)))
    }

    /// Take an exact number of bytes from the reader, advancing the offset.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0; N];
        self.fill(&mut buf)?;

        Ok(buf)
    }

    /// Fill a buffer from the reader, advancing the offset by each byte read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => Err(self.error(ErrorKind::Truncated))?,
                Ok(n) => {
                    filled += n;
                    self.offset += n as u64;
                    self.progress.advance(self.offset);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => Err(self.error(e.into()))?,
            }
        }

        Ok(())
    }

    fn error(&self, kind: ErrorKind) -> Error {
        let error = Error {
            kind,
            offset: self.offset,
            path: self.path.clone(),
        };

        debug!("{error}");

        error
    }
}
