//! Verify command implementation
//!
//! Decodes a `.splice` file, re-encodes it, and reports whether the file is
//! byte-for-byte canonical.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use splice_drum::header::{MAGIC_LEN, PREAMBLE_LEN};
use splice_drum::{content_hash, decode_with, to_bytes, DecodeOptions};
use std::fs;
use std::process::ExitCode;

use super::decode_options;

/// Result of verifying one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Input path
    pub input: String,
    /// Whether re-encoding reproduces the file exactly
    pub canonical: bool,
    /// Payload size declared in the header
    pub declared_payload_size: u64,
    /// Length of the file on disk
    pub file_len: u64,
    /// Bytes after the declared payload
    pub trailing_bytes: u64,
    /// Number of decoded tracks
    pub tracks: usize,
    /// BLAKE3 hash of the canonical encoding
    pub hash: String,
}

/// JSON output for the verify command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<VerifyReport>,
}

/// Run the verify command.
///
/// # Arguments
/// * `input` - Path to the `.splice` file
/// * `json_output` - Whether to output machine-readable JSON
/// * `reject_trailing` - Fail if data follows the declared payload
///
/// # Returns
/// Exit code: 0 if the file is canonical, 1 otherwise
pub fn run(input: &str, json_output: bool, reject_trailing: bool) -> Result<ExitCode> {
    let options = decode_options(reject_trailing);
    if json_output {
        run_json(input, &options)
    } else {
        run_human(input, &options)
    }
}

/// Decode, re-encode and compare.
pub fn check(input: &str, options: &DecodeOptions) -> Result<VerifyReport> {
    let data = fs::read(input).with_context(|| format!("Failed to read: {}", input))?;

    let pattern = decode_with(&mut data.as_slice(), options)
        .with_context(|| format!("Failed to decode: {}", input))?;

    // Decoding succeeded, so the 14-byte preamble is present.
    let mut size = [0u8; 8];
    size.copy_from_slice(&data[MAGIC_LEN..PREAMBLE_LEN]);
    let declared_payload_size = i64::from_be_bytes(size) as u64;
    let consumed = PREAMBLE_LEN as u64 + declared_payload_size;

    let encoded = to_bytes(&pattern).context("Failed to re-encode pattern")?;
    let hash = content_hash(&pattern).context("Failed to hash pattern")?;

    Ok(VerifyReport {
        input: input.to_string(),
        canonical: encoded == data,
        declared_payload_size,
        file_len: data.len() as u64,
        trailing_bytes: (data.len() as u64).saturating_sub(consumed),
        tracks: pattern.tracks.len(),
        hash,
    })
}

fn run_human(input: &str, options: &DecodeOptions) -> Result<ExitCode> {
    println!("{} {}", "Verifying:".cyan().bold(), input);

    let report = check(input, options)?;

    println!("{} {}", "Tracks:".dimmed(), report.tracks);
    println!(
        "{} {} (file {} bytes)",
        "Payload size:".dimmed(),
        report.declared_payload_size,
        report.file_len
    );
    if report.trailing_bytes > 0 {
        println!(
            "{} {} bytes after the declared payload",
            "WARNING".yellow().bold(),
            report.trailing_bytes
        );
    }
    println!("{} {}", "Hash:".dimmed(), report.hash);

    if report.canonical {
        println!("{} File is canonical", "PASSED".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Re-encoding does not reproduce the file",
            "FAILED".red().bold()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(input: &str, options: &DecodeOptions) -> Result<ExitCode> {
    let (output, code) = match check(input, options) {
        Ok(report) => {
            let code = if report.canonical {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
            let output = VerifyOutput {
                success: report.canonical,
                error: None,
                report: Some(report),
            };
            (output, code)
        }
        Err(err) => {
            let output = VerifyOutput {
                success: false,
                error: Some(format!("{:#}", err)),
                report: None,
            };
            (output, ExitCode::from(1))
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(code)
}
