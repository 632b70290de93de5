mod config;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hashchain_rng::avalanche;
use hashchain_rng::crypto::hash::{HashFunction, SHA256, SHA3_256};
use hashchain_rng::generator::{validate_seed, HashChainGenerator, DEFAULT_HEX_LENGTH, MAX_SEED, MIN_SEED};

use crate::config::{
    DemoConfig, HashKind, DEFAULT_AVALANCHE_ITERATIONS, DEFAULT_HEX_STRINGS, DEFAULT_INTEGERS,
};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

#[derive(Parser)]
#[command(version, about = "Hash-chain random number generator demo", long_about = None)]
struct Cli {
    /// Four digit seed; prompted for when omitted
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// How many 32-bit integers to print
    #[arg(long, default_value_t = DEFAULT_INTEGERS)]
    integers: usize,

    /// How many hex strings to print
    #[arg(long, default_value_t = DEFAULT_HEX_STRINGS)]
    hex_strings: usize,

    /// Length of each hex string
    #[arg(long, default_value_t = DEFAULT_HEX_LENGTH)]
    hex_length: usize,

    /// Paired draws in the avalanche comparison
    #[arg(long, default_value_t = DEFAULT_AVALANCHE_ITERATIONS)]
    avalanche_iterations: usize,

    #[arg(long, value_enum, default_value_t = HashKind::Sha256)]
    hash: HashKind,
}

/// Ask for a seed until a valid one is entered
fn prompt_seed(input: impl BufRead, mut output: impl Write) -> anyhow::Result<i64> {
    let mut lines = input.lines();
    loop {
        write!(output, "\nEnter a four digit number ({MIN_SEED}-{MAX_SEED}): ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            bail!("standard input closed before a seed was entered");
        };
        let line = line.context("failed to read seed from standard input")?;

        match line.trim().parse::<i64>() {
            Ok(seed) => match validate_seed(seed) {
                Ok(seed) => return Ok(seed),
                Err(_) => writeln!(output, "Error: enter a number between {MIN_SEED} and {MAX_SEED}!")?,
            },
            Err(_) => writeln!(output, "Error: enter a valid number!")?,
        }
    }
}

fn print_avalanche<H: HashFunction + Copy>(config: &DemoConfig, hasher: H) -> anyhow::Result<()> {
    let seed_b = config.neighbour_seed();

    println!("\n{RULE}");
    println!("AVALANCHE EFFECT TEST");
    println!("{RULE}");
    println!("Seed 1: {}", config.seed);
    println!("Seed 2: {}", seed_b);
    println!("Difference: {}", (config.seed - seed_b).abs());
    println!("{THIN_RULE}");

    let mut a = HashChainGenerator::with_hasher(config.seed, hasher)?;
    let mut b = HashChainGenerator::with_hasher(seed_b, hasher)?;
    let report = avalanche::compare(&mut a, &mut b, config.avalanche_iterations);

    for (i, sample) in report.samples().iter().enumerate() {
        println!("Iteration {}:", i + 1);
        println!("  Value 1: {:032b} ({})", sample.value_a, sample.value_a);
        println!("  Value 2: {:032b} ({})", sample.value_b, sample.value_b);
        println!(
            "  Differing bits: {}/32 ({:.1}%)",
            sample.differing_bits,
            sample.ratio() * 100.0
        );
    }

    println!("{THIN_RULE}");
    println!(
        "Mean differing bits: {:.1}/32 ({:.1}%)",
        report.mean_differing_bits(),
        report.mean_ratio() * 100.0
    );
    println!("(Ideal: ~50%)");
    Ok(())
}

fn run<H: HashFunction + Copy>(config: &DemoConfig, hasher: H) -> anyhow::Result<()> {
    let mut generator = HashChainGenerator::with_hasher(config.seed, hasher)?;

    println!("\n{THIN_RULE}");
    println!("GENERATED VALUES ({})", hasher.name());
    println!("{THIN_RULE}");

    println!("\n32-bit random integers:");
    for i in 0..config.integers {
        let value = generator.next_u32();
        println!("  {}. {:>10} (0x{:08X})", i + 1, value, value);
    }

    println!("\n{}-character hex strings:", config.hex_length);
    for i in 0..config.hex_strings {
        println!("  {}. {}", i + 1, generator.next_hex_string(config.hex_length));
    }

    print_avalanche(config, hasher)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{RULE}");
    println!("HASH-CHAIN RANDOM NUMBER GENERATOR");
    println!("{RULE}");

    let seed = match cli.seed {
        Some(seed) => seed,
        None => prompt_seed(io::stdin().lock(), io::stdout().lock())?,
    };

    let config = DemoConfig {
        integers: cli.integers,
        hex_strings: cli.hex_strings,
        hex_length: cli.hex_length,
        avalanche_iterations: cli.avalanche_iterations,
        hash: cli.hash,
        ..DemoConfig::new(seed)
    };
    config.validate().context("invalid demo configuration")?;

    match config.hash {
        HashKind::Sha256 => run(&config, SHA256::new()),
        HashKind::Sha3 => run(&config, SHA3_256::new()),
    }
}
