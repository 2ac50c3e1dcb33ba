use anyhow::{Context, Result};
use clap::Parser;
use crydi::crypto::hmac;
use crydi::Algorithm;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// text to hash
    #[arg(short, long)]
    input: Option<String>,

    /// the file to read input from
    ///
    /// the program will read from stdin if neither input-file or input are set
    #[arg(long, conflicts_with = "input")]
    input_file: Option<PathBuf>,

    /// treat the input as hex, whitespace between digits is ignored
    #[arg(long, default_value_t = false)]
    hex: bool,

    /// key for an additional HMAC line
    #[arg(short, long)]
    key: Option<String>,

    /// treat the key as hex
    #[arg(long, default_value_t = false, requires = "key")]
    hex_key: bool,

    /// hash function underlying the HMAC
    #[arg(short, long, default_value_t = Algorithm::Sha256, value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// only print the digest from this hash function
    #[arg(long, value_parser = parse_algorithm)]
    only: Option<Algorithm>,
}

/// Algorithm names on the command line are matched ignoring case.
fn parse_algorithm(name: &str) -> crydi::Result<Algorithm> {
    Algorithm::ALL
        .into_iter()
        .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| crydi::Error::UnsupportedAlgorithm(name.to_owned()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Read the message, dropping a single trailing newline from files and stdin.
fn read_input(args: &Args) -> Result<String> {
    if let Some(ref input) = args.input {
        return Ok(input.clone());
    }

    let mut input = if let Some(ref input_file) = args.input_file {
        fs::read_to_string(input_file)
            .with_context(|| format!("Reading from {input_file:?} to get input data."))?
    } else {
        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("Reading input data from stdin.")?;
        data
    };

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn strip_whitespace(hex: &str) -> String {
    hex.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .collect()
}

/// Print one `label: value` line, returning whether it succeeded.
fn report(label: &str, result: crydi::Result<String>) -> bool {
    match result {
        Ok(hex) => {
            println!("{label}: {hex}");
            true
        }
        Err(e) => {
            println!("{label}: error: {e}");
            false
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let mut input = read_input(&args)?;
    if args.hex {
        input = strip_whitespace(&input);
    }
    tracing::debug!(len = input.len(), hex = args.hex, "read input");

    let algorithms = match args.only {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };

    let mut ok = true;
    for algorithm in algorithms {
        ok &= report(algorithm.name(), algorithm.digest(&input, args.hex));
    }

    if let Some(ref key) = args.key {
        let key = if args.hex_key {
            strip_whitespace(key)
        } else {
            key.clone()
        };
        let label = format!("HMAC-{}", args.algorithm);
        let mac = hmac::hmac(&input, args.algorithm.name(), &key, args.hex, args.hex_key);
        ok &= report(&label, mac);
    }

    Ok(ok)
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args: Args = Args::try_parse()?;

    if run(args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
