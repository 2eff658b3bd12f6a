//! Splice Drum - Reader and Writer for SPLICE Drum Machine Patterns
//!
//! This crate decodes and encodes `.splice` files: a drum machine pattern made
//! of a hardware version string, a tempo, and any number of named 16-step
//! tracks.
//!
//! # Format
//!
//! - 6-byte magic `SPLICE`
//! - Payload size as a **big-endian** `i64` (the only big-endian field)
//! - 32-byte zero-padded version string
//! - Tempo as a little-endian `f32`
//! - Tracks until the payload is exhausted: `i32` id, `u8` name length, name
//!   bytes, and one byte per step
//!
//! See [`header`] for offsets and sizes.
//!
//! # Guarantees
//!
//! - Encoding is canonical: active steps are written as `0x01`, and a pattern
//!   that does not fit the field widths is rejected before any byte is written.
//! - Decoding is lenient about step bytes (any nonzero value is active) and
//!   strict about structure: a bad magic or negative size is an
//!   [`DecodeError::InvalidHeader`], and a record cut short is a
//!   [`DecodeError::TruncatedRecord`].
//! - `from_bytes(&to_bytes(&p)?)? == p` for every pattern that encodes, except
//!   that a version containing a null byte comes back cut at that byte.
//!
//! # Example
//!
//! ```
//! use splice_drum::{from_bytes, to_bytes, Pattern, Steps, Track};
//!
//! let pattern = Pattern::new(
//!     "0.808-alpha",
//!     120.0,
//!     vec![Track::new(0, "kick", Steps::from_positions(&[0, 4, 8, 12]).unwrap())],
//! );
//!
//! let bytes = to_bytes(&pattern).unwrap();
//! assert_eq!(&bytes[..6], b"SPLICE");
//! assert_eq!(from_bytes(&bytes).unwrap(), pattern);
//! ```
//!
//! # Module Structure
//!
//! - [`header`]: Layout constants
//! - [`pattern`], [`track`], [`steps`]: Data model and text rendering
//! - [`reader`]: Decoder and trailing-data policy
//! - [`writer`]: Canonical encoder and content hashing
//! - [`file`]: Path-based helpers
//! - [`error`]: Error types

pub mod error;
pub mod file;
pub mod header;
pub mod pattern;
pub mod reader;
pub mod steps;
pub mod track;
pub mod writer;

pub use error::{DecodeError, EncodeError, Field, FileError, HeaderFault};
pub use file::{decode_file, decode_file_with, encode_file};
pub use pattern::Pattern;
pub use reader::{decode, decode_with, from_bytes, DecodeOptions, TrailingData};
pub use steps::Steps;
pub use track::Track;
pub use writer::{content_hash, encode, to_bytes, validate};
