#![no_std]

//! An efficient tokenizer for the GDSII layout stream format.
//!
//! Reticle reads a GDSII stream record by record, and hands back one typed
//! token at a time: the type of each record as its header is read, then each
//! flag word, integer, real or string of its payload. Reals are reconstructed
//! exactly from the format's excess-64 encoding. Turning tokens into cells and
//! geometry is left to the caller.
//!
//! Most users should begin with the [`avec::Tokenizer`]. If it proves
//! insufficient, consider driving the finite-state machine described in the
//! [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based tokenizer (default).

#[cfg(feature = "std")]
pub mod avec;
pub mod sans;
