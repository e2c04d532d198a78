//! AES-IGE command line tool
//!
//! Encrypts or decrypts a hex-encoded file with AES in IGE mode. The key
//! length picks AES-128, AES-192 or AES-256. The input is not padded and
//! must already be a whole number of 16-byte blocks.

use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use ige::aes::cipher::KeyInit;
use ige::aes::{Aes128, Aes192, Aes256};
use ige::BlockCipher;
use log::{debug, info};

/// Command-line arguments for the AES-IGE program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the hex encoded input file")]
    file: String,

    /// Key for the cipher.
    #[arg(short, long, help = "File containing the hex encoded AES key (16, 24 or 32 bytes)")]
    key: String,

    /// IV for the chain.
    #[arg(short, long, help = "File containing the hex encoded 32 byte IV")]
    iv: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

/// Decodes hex text, ignoring whitespace and line breaks.
fn parse_hex(content: &str) -> Result<Vec<u8>> {
    let hex_string: String = content.chars().filter(|c| !c.is_whitespace()).collect();

    if hex_string.is_empty() {
        bail!("no hex data found");
    }

    hex::decode(&hex_string).context("invalid hex data")
}

/// Formats bytes as lowercase hex with a single space between bytes.
fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<String>>()
        .join(" ")
}

fn read_hex_from_file(filename: &str) -> Result<Vec<u8>> {
    let content = fs::read_to_string(filename)
        .with_context(|| format!("failed to read {filename}"))?;
    parse_hex(&content).with_context(|| format!("failed to decode {filename}"))
}

fn run<C: BlockCipher>(cipher: C, iv: &[u8], data: &[u8], mode: OperationMode) -> ige::Result<Vec<u8>> {
    match mode {
        OperationMode::Encrypt => ige::encrypt_to_vec(cipher, iv, data),
        OperationMode::Decrypt => ige::decrypt_to_vec(cipher, iv, data),
    }
}

/// Picks the AES variant from the key length and runs the chain.
fn process(key: &[u8], iv: &[u8], data: &[u8], mode: OperationMode) -> Result<Vec<u8>> {
    let result = match key.len() {
        16 => run(Aes128::new_from_slice(key).map_err(|_| anyhow!("bad AES-128 key"))?, iv, data, mode),
        24 => run(Aes192::new_from_slice(key).map_err(|_| anyhow!("bad AES-192 key"))?, iv, data, mode),
        32 => run(Aes256::new_from_slice(key).map_err(|_| anyhow!("bad AES-256 key"))?, iv, data, mode),
        other => bail!("invalid key length: {other} bytes, expected 16, 24 or 32"),
    };

    Ok(result?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data = read_hex_from_file(&cli.file)?;
    let key = read_hex_from_file(&cli.key)?;
    let iv = read_hex_from_file(&cli.iv)?;
    debug!("input {} bytes, key {} bytes, iv {} bytes", data.len(), key.len(), iv.len());

    info!("{:?} with AES-{}-IGE", cli.mode, key.len() * 8);
    let result = process(&key, &iv, &data, cli.mode)
        .with_context(|| format!("failed to {:?} {}", cli.mode, cli.file))?;

    fs::write(&cli.output, format_hex(&result))
        .with_context(|| format!("failed to write {}", cli.output))?;

    info!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}
