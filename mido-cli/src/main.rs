//! MIDO CLI - middle-out file compression.
//!
//! A thin wrapper over `mido-codec`: read the input file into memory,
//! run the codec, write the result, print a summary.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mido")]
#[command(author, version, about = "Middle-out compressor (LZ77 + static rANS)")]
#[command(long_about = "
MIDO compresses single files with a 32 KiB-window LZ77 parse and a
static-model rANS entropy coder.

Examples:
  mido compress input.bin output.mido
  mido decompress output.mido restored.bin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Compressed output path
        output: PathBuf,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Restored output path
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => cmd_compress(&input, &output),
        Commands::Decompress { input, output } => cmd_decompress(&input, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let data = fs::read(input)?;
    println!("Input size: {} bytes", data.len());

    let (packed, summary) = mido_codec::compress_with_summary(&data)?;
    fs::write(output, &packed)?;

    if data.is_empty() {
        println!("Input is empty; wrote an empty artifact");
        return Ok(());
    }

    println!(
        "LZ77: {} matches, {} literals",
        summary.match_count, summary.literal_count
    );

    let elapsed = start.elapsed().as_secs_f64();
    let ratio = data.len() as f64 / packed.len() as f64;

    println!("--------------------------------------------------");
    println!("Middle-Out Compression Results");
    println!("--------------------------------------------------");
    println!("Original size   : {} bytes", data.len());
    println!("Compressed size : {} bytes", packed.len());
    println!("Ratio           : {:.2}", ratio);
    println!("Time            : {:.4} s", elapsed);
    println!("Weissman score  : {:.2}", weissman_score(ratio, elapsed));
    println!("--------------------------------------------------");

    Ok(())
}

fn cmd_decompress(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let restored = mido_codec::decompress(&data)?;
    fs::write(output, &restored)?;

    println!("Decompressed {} bytes", restored.len());
    Ok(())
}

/// The Weissman score, as seen on television. Decorative.
fn weissman_score(ratio: f64, time_s: f64) -> f64 {
    let score = ratio * (1.0 / (time_s + 0.0001)).log10() * 10.0;
    score.max(0.0)
}
