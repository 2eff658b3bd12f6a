//! CLI command implementations

pub mod dump;
pub mod encode;
pub mod verify;

use splice_drum::{DecodeOptions, TrailingData};

/// Decoder options for the `--reject-trailing` flag.
pub(crate) fn decode_options(reject_trailing: bool) -> DecodeOptions {
    DecodeOptions {
        trailing: if reject_trailing {
            TrailingData::Reject
        } else {
            TrailingData::Ignore
        },
    }
}
