//! Command-line interface for `aes128`.

#![forbid(unsafe_code)]

mod hex_arg;

use std::io::{self, Write};

use aes128_core::{
    encrypt_rounds, encrypt_with_round_keys, expand_key, Aes128Key, Block, RoundKeys, Trace,
};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::hex_arg::parse_block_hex;

/// FIPS-197 Appendix C.1 key.
const DEFAULT_KEY: &str = "000102030405060708090a0b0c0d0e0f";
/// FIPS-197 Appendix C.1 plaintext.
const DEFAULT_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

/// AES-128 single-block encryption CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    about = "Encrypt one AES-128 block and show the state after every transform"
)]
struct Cli {
    /// AES-128 key as 32 hex characters.
    #[arg(value_name = "KEY_HEX", default_value = DEFAULT_KEY)]
    key: String,
    /// Plaintext block as 32 hex characters.
    #[arg(value_name = "PLAINTEXT_HEX", default_value = DEFAULT_PLAINTEXT)]
    plaintext: String,
    /// Print only the ciphertext.
    #[arg(short, long)]
    quiet: bool,
    /// Print the expanded key schedule before the trace.
    #[arg(long, conflicts_with = "quiet")]
    round_keys: bool,
}

impl Cli {
    /// Decodes the positional hex arguments.
    fn blocks(&self) -> Result<(Aes128Key, Block), clap::Error> {
        let key = decode_arg("KEY_HEX", &self.key)?;
        let plaintext = decode_arg("PLAINTEXT_HEX", &self.plaintext)?;
        Ok((Aes128Key::from(key), plaintext))
    }
}

fn decode_arg(name: &str, value: &str) -> Result<Block, clap::Error> {
    parse_block_hex(value).map_err(|err| {
        Cli::command().error(
            ErrorKind::ValueValidation,
            format!("invalid value '{value}' for '<{name}>': {err}"),
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (key, plaintext) = cli.blocks().unwrap_or_else(|err| err.exit());
    let mut out = io::stdout().lock();
    run(&cli, &key, &plaintext, &mut out).context("write to stdout")?;
    out.flush().context("flush stdout")
}

fn run(cli: &Cli, key: &Aes128Key, plaintext: &Block, out: &mut impl Write) -> io::Result<()> {
    let round_keys = expand_key(key);

    if cli.quiet {
        let ciphertext = encrypt_with_round_keys(plaintext, &round_keys);
        return writeln!(out, "{}", hex::encode(ciphertext));
    }

    if cli.round_keys {
        write_round_keys(out, &round_keys)?;
    }

    let mut trace = Trace::new();
    let ciphertext = encrypt_rounds(plaintext, &round_keys, &mut trace);
    for snapshot in &trace {
        write!(out, "{snapshot}")?;
    }
    writeln!(out, "Ciphertext: {}", hex::encode(ciphertext))
}

fn write_round_keys(out: &mut impl Write, round_keys: &RoundKeys) -> io::Result<()> {
    writeln!(out, "Round Keys:")?;
    for (round, round_key) in round_keys.iter().enumerate() {
        writeln!(out, "  {round:>2}: {}", hex::encode(round_key))?;
    }
    Ok(())
}
