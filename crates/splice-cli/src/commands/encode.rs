//! Encode command implementation
//!
//! Reads a pattern in JSON form and writes it as a `.splice` file.

use anyhow::{Context, Result};
use colored::Colorize;
use splice_drum::{encode_file, Pattern};
use std::fs;
use std::process::ExitCode;

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the JSON pattern
/// * `output` - Path of the `.splice` file to write
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: &str) -> Result<ExitCode> {
    println!("{} {}", "Encoding:".cyan().bold(), input);

    let pattern = encode_json_file(input, output)?;

    println!(
        "{} Wrote {} tracks ({} bytes) to: {}",
        "SUCCESS".green().bold(),
        pattern.tracks.len(),
        pattern.encoded_len(),
        output
    );
    Ok(ExitCode::SUCCESS)
}

/// Parse the JSON pattern at `input` and encode it to `output`.
pub fn encode_json_file(input: &str, output: &str) -> Result<Pattern> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read pattern file: {}", input))?;
    let pattern: Pattern = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON pattern: {}", input))?;

    encode_file(output, &pattern).with_context(|| format!("Failed to encode: {}", output))?;
    Ok(pattern)
}
