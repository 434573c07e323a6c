mod label_tests;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use labelscan_core::{parse_label_with_options, ParseOptions};

#[derive(Parser)]
#[command(name = "labelscan")]
#[command(about = "Label parser developer tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse OCR label text and print the structured result as JSON
    Parse {
        /// Path to a text file, or '-' for stdin
        input: String,
        /// Accept bare 3-digit additive codes (legacy permissive matching)
        #[arg(long)]
        bare_codes: bool,
    },
    /// Update golden test fixtures to match current parser output
    UpdateFixtures {
        /// Fixtures directory (default: labelscan-core/tests/fixtures/label_parsing)
        #[arg(long)]
        fixtures_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, bare_codes } => parse(&input, bare_codes),
        Commands::UpdateFixtures { fixtures_dir } => {
            label_tests::update_fixtures(fixtures_dir.as_deref())
        }
    }
}

fn parse(input: &str, bare_codes: bool) -> Result<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    let options = ParseOptions {
        bare_additive_codes: bare_codes,
    };
    let label = parse_label_with_options(&text, &options);

    println!("{}", serde_json::to_string_pretty(&label)?);

    Ok(())
}
