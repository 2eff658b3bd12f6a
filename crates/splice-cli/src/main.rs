//! Splice CLI - Command-line interface for SPLICE drum pattern files
//!
//! This binary provides commands for dumping, encoding and verifying
//! `.splice` files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use splice_cli::{commands, logging};

/// Splice - Drum Machine Pattern Tool
#[derive(Parser)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a pattern file and print it
    Dump {
        /// Path to the .splice file
        #[arg(short, long)]
        input: String,

        /// Print the pattern as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Fail if data follows the declared payload
        #[arg(long)]
        reject_trailing: bool,
    },

    /// Encode a JSON pattern into a .splice file
    Encode {
        /// Path to the JSON pattern
        #[arg(short, long)]
        input: String,

        /// Path of the .splice file to write
        #[arg(short, long)]
        output: String,
    },

    /// Check that a pattern file re-encodes to identical bytes
    Verify {
        /// Path to the .splice file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Fail if data follows the declared payload
        #[arg(long)]
        reject_trailing: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Dump {
            input,
            json,
            reject_trailing,
        } => commands::dump::run(&input, json, reject_trailing),
        Commands::Encode { input, output } => commands::encode::run(&input, &output),
        Commands::Verify {
            input,
            json,
            reject_trailing,
        } => commands::verify::run(&input, json, reject_trailing),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_dump() {
        let cli = Cli::try_parse_from(["splice", "dump", "--input", "a.splice", "--json"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Dump {
                input,
                json,
                reject_trailing,
            } => {
                assert_eq!(input, "a.splice");
                assert!(json);
                assert!(!reject_trailing);
            }
            _ => panic!("expected dump command"),
        }
    }

    #[test]
    fn test_cli_parses_encode() {
        let cli =
            Cli::try_parse_from(["splice", "encode", "-i", "p.json", "-o", "p.splice"]).unwrap();
        match cli.command {
            Commands::Encode { input, output } => {
                assert_eq!(input, "p.json");
                assert_eq!(output, "p.splice");
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_cli_parses_verify_with_global_verbose() {
        let cli = Cli::try_parse_from([
            "splice",
            "verify",
            "--input",
            "p.splice",
            "--reject-trailing",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Verify {
                input,
                json,
                reject_trailing,
            } => {
                assert_eq!(input, "p.splice");
                assert!(!json);
                assert!(reject_trailing);
            }
            _ => panic!("expected verify command"),
        }
    }

    #[test]
    fn test_cli_requires_output_for_encode() {
        assert!(Cli::try_parse_from(["splice", "encode", "--input", "p.json"]).is_err());
    }
}
