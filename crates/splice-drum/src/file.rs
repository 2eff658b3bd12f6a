//! Path-based helpers that own opening and closing files.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::FileError;
use crate::pattern::Pattern;
use crate::reader::{decode_with, DecodeOptions};
use crate::writer::to_bytes;

/// Decode the pattern stored at `path` with default options.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Pattern, FileError> {
    decode_file_with(path, &DecodeOptions::default())
}

/// Decode the pattern stored at `path`.
pub fn decode_file_with(
    path: impl AsRef<Path>,
    options: &DecodeOptions,
) -> Result<Pattern, FileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    Ok(decode_with(&mut reader, options)?)
}

/// Encode `pattern` and write it to `path`.
///
/// The pattern is encoded in memory first, so a pattern that fails
/// validation never creates or truncates the destination file.
pub fn encode_file(path: impl AsRef<Path>, pattern: &Pattern) -> Result<(), FileError> {
    let path = path.as_ref();
    let bytes = to_bytes(pattern)?;
    fs::write(path, &bytes).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, EncodeError};
    use crate::steps::Steps;
    use crate::track::Track;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beat.splice");
        let pattern = Pattern::new(
            "0.808-alpha",
            128.5,
            vec![Track::new(7, "tom", Steps::from_bits(0x0F0F))],
        );

        encode_file(&path, &pattern).unwrap();
        assert_eq!(decode_file(&path).unwrap(), pattern);
    }

    #[test]
    fn test_invalid_pattern_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.splice");
        fs::write(&path, b"previous").unwrap();

        let pattern = Pattern::new("v".repeat(33), 1.0, vec![]);
        let err = encode_file(&path, &pattern).unwrap_err();
        assert!(matches!(
            err,
            FileError::Encode(EncodeError::VersionTooLong { len: 33 })
        ));
        assert_eq!(fs::read(&path).unwrap(), b"previous");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_file(dir.path().join("nope.splice")).unwrap_err();
        assert!(matches!(err, FileError::Open { .. }));
    }

    #[test]
    fn test_decode_error_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.splice");
        fs::write(&path, b"NOTSPLICE-AT-ALL").unwrap();
        let err = decode_file(&path).unwrap_err();
        assert!(matches!(
            err,
            FileError::Decode(DecodeError::InvalidHeader(_))
        ));
    }
}
