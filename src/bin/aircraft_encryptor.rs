// src/bin/aircraft_encryptor.rs
//! Encrypts aircraft XML files for the simulator using AES-256-CBC
//!
//! Output format: [16 bytes IV][ciphertext]

use std::path::PathBuf;
use std::process::ExitCode;

use aircraft_cipher::config::{self, Config};
use aircraft_cipher::file_ops::{decrypt_file, default_output_path_with, encrypt_file};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Encrypts aircraft XML files for JSBSim using AES-256-CBC.",
    after_help = "If output is not specified, replaces .xml with .bin"
)]
struct Cli {
    /// File to encrypt (or to decrypt with --decrypt)
    input: PathBuf,

    /// Where to write the result; derived from the input name when omitted
    output: Option<PathBuf>,

    /// Turn a container back into plaintext (.bin → .xml)
    #[arg(short, long)]
    decrypt: bool,
}

impl Cli {
    fn verb(&self) -> (&'static str, &'static str) {
        if self.decrypt {
            ("Decrypted", "Decryption")
        } else {
            ("Encrypted", "Encryption")
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage goes to stdout and exits 1, not clap's stderr/2
            print!("{err}");
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let (done, action) = cli.verb();
    match run(&cli) {
        Ok(output) => {
            println!("{done}: {} -> {}", cli.input.display(), output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{action} failed: {err}");
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let config_path = config::config_path();
    let conf = config::load()
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    init_tracing(conf);
    debug!(config = %config_path.display(), exists = config_path.exists(), "config resolved");

    let output = match &cli.output {
        Some(output) => output.clone(),
        None => derive_output(cli, conf),
    };

    if cli.decrypt {
        decrypt_file(&cli.input, &output)
            .with_context(|| format!("Failed to decrypt {}", cli.input.display()))?;
    } else {
        encrypt_file(&cli.input, &output)
            .with_context(|| format!("Failed to encrypt {}", cli.input.display()))?;
    }
    Ok(output)
}

fn derive_output(cli: &Cli, conf: &Config) -> PathBuf {
    let ext = &conf.extensions;
    if cli.decrypt {
        default_output_path_with(&cli.input, &ext.container, &ext.plaintext)
    } else {
        default_output_path_with(&cli.input, &ext.plaintext, &ext.container)
    }
}

fn init_tracing(conf: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&conf.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
