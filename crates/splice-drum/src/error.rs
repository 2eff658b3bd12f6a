//! Error types for decoding and encoding SPLICE files.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::header::{MAGIC_LEN, MAX_TRACK_NAME_LEN, VERSION_LEN};

/// A field of the SPLICE layout, used to report where input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Magic,
    PayloadSize,
    Version,
    Bpm,
    TrackId,
    TrackNameLength,
    TrackName,
    TrackSteps,
}

impl Field {
    /// Human-readable field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Magic => "magic",
            Field::PayloadSize => "payload size",
            Field::Version => "version",
            Field::Bpm => "bpm",
            Field::TrackId => "track id",
            Field::TrackNameLength => "track name length",
            Field::TrackName => "track name",
            Field::TrackSteps => "track steps",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a file header was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFault {
    /// The first six bytes were not `SPLICE`.
    BadMagic([u8; MAGIC_LEN]),
    /// The declared payload size was negative.
    NegativePayloadSize(i64),
}

impl fmt::Display for HeaderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderFault::BadMagic(found) => {
                write!(
                    f,
                    "expected magic 'SPLICE', got {:?}",
                    String::from_utf8_lossy(found)
                )
            }
            HeaderFault::NegativePayloadSize(size) => {
                write!(f, "negative payload size {}", size)
            }
        }
    }
}

/// Error returned when decoding a SPLICE stream fails.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Magic mismatch or negative payload size.
    #[error("input is missing a valid SPLICE header: {0}")]
    InvalidHeader(HeaderFault),

    /// The stream (or the declared payload) ended inside a field.
    #[error("{}", truncated_message(.field, .track))]
    TruncatedRecord {
        field: Field,
        /// Zero-based track index for track fields.
        track: Option<usize>,
    },

    /// Bytes follow the declared payload and the decoder was told to reject them.
    #[error("unexpected data after the declared payload")]
    TrailingData,

    /// The underlying reader failed.
    #[error("read failed: {0}")]
    ReadFailure(#[source] io::Error),
}

fn truncated_message(field: &Field, track: &Option<usize>) -> String {
    match track {
        Some(index) => format!("truncated record: track {} ended in {}", index, field),
        None => format!("truncated record: input ended in {}", field),
    }
}

impl DecodeError {
    /// Map a read error for `field`, treating end of input as truncation.
    pub(crate) fn from_read(err: io::Error, field: Field, track: Option<usize>) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::TruncatedRecord { field, track },
            _ => DecodeError::ReadFailure(err),
        }
    }
}

/// Error returned when encoding a pattern fails.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("version is {len} bytes (maximum {})", VERSION_LEN)]
    VersionTooLong { len: usize },

    #[error("track {index} name is {len} bytes (maximum {})", MAX_TRACK_NAME_LEN)]
    TrackNameTooLong { index: usize, len: usize },

    /// The underlying writer failed; any bytes already written are not a valid file.
    #[error("write failed: {0}")]
    WriteFailure(#[from] io::Error),
}

/// Error returned by the path-based helpers.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecodeError::InvalidHeader(HeaderFault::BadMagic(*b"SPLICF")).to_string(),
            "input is missing a valid SPLICE header: expected magic 'SPLICE', got \"SPLICF\""
        );
        assert_eq!(
            DecodeError::TruncatedRecord {
                field: Field::TrackSteps,
                track: Some(2)
            }
            .to_string(),
            "truncated record: track 2 ended in track steps"
        );
        assert_eq!(
            DecodeError::TruncatedRecord {
                field: Field::Bpm,
                track: None
            }
            .to_string(),
            "truncated record: input ended in bpm"
        );
        assert_eq!(
            EncodeError::VersionTooLong { len: 33 }.to_string(),
            "version is 33 bytes (maximum 32)"
        );
        assert_eq!(
            EncodeError::TrackNameTooLong { index: 1, len: 256 }.to_string(),
            "track 1 name is 256 bytes (maximum 255)"
        );
    }

    #[test]
    fn test_from_read_separates_eof_from_io_faults() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(
            DecodeError::from_read(eof, Field::Version, None),
            DecodeError::TruncatedRecord {
                field: Field::Version,
                track: None
            }
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        match DecodeError::from_read(denied, Field::Version, None) {
            DecodeError::ReadFailure(err) => {
                assert_eq!(err.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected ReadFailure, got {:?}", other),
        }
    }
}
