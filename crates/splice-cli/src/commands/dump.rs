//! Dump command implementation
//!
//! Decodes a `.splice` file and prints it as text or JSON.

use anyhow::{Context, Result};
use splice_drum::{decode_file_with, Pattern};
use std::process::ExitCode;

use super::decode_options;

/// Run the dump command
///
/// # Arguments
/// * `input` - Path to the `.splice` file
/// * `json` - Print pretty JSON instead of the text rendering
/// * `reject_trailing` - Fail if data follows the declared payload
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json: bool, reject_trailing: bool) -> Result<ExitCode> {
    let pattern = decode_file_with(input, &decode_options(reject_trailing))
        .with_context(|| format!("Failed to decode: {}", input))?;

    print!("{}", render(&pattern, json)?);
    Ok(ExitCode::SUCCESS)
}

/// Render a pattern for display.
pub fn render(pattern: &Pattern, json: bool) -> Result<String> {
    if json {
        let mut out =
            serde_json::to_string_pretty(pattern).context("Failed to serialize pattern")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(pattern.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_drum::{Steps, Track};

    fn sample() -> Pattern {
        Pattern::new(
            "0.808-alpha",
            120.0,
            vec![Track::new(0, "kick", Steps::from_bits(0x1111))],
        )
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(&sample(), false).unwrap(),
            "Saved with HW Version: 0.808-alpha\nTempo: 120\n(0) kick\t|x---|x---|x---|x---|\n"
        );
    }

    #[test]
    fn test_render_json_parses_back() {
        let out = render(&sample(), true).unwrap();
        assert!(out.ends_with('\n'));
        let back: Pattern = serde_json::from_str(&out).unwrap();
        assert_eq!(back, sample());
    }
}
