//! krait - an AArch64 (A64) instruction-word decoder
//!
//! Usage:
//!   krait decode <binary>        Decode a raw little-endian word stream
//!   krait word <hex>             Decode a single instruction word
//!   krait time <binary>          Time decoding of a word stream

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use krait_core::{Insn, IsaMode};
use krait_decode::{decode, stream};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "krait")]
#[command(about = "AArch64 instruction-word decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a raw binary file of little-endian A64 words and list the results
    Decode {
        /// Path to the raw instruction stream
        binary: PathBuf,

        /// Program counter of the first word
        #[arg(short, long, value_parser = parse_hex, default_value = "0")]
        base: u64,

        /// Emit the decoded records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a single instruction word given as hex
    Word {
        /// The 32-bit word, e.g. 0x11000000
        #[arg(value_parser = parse_hex32)]
        word: u32,

        /// Program counter to decode at
        #[arg(short, long, value_parser = parse_hex, default_value = "0")]
        pc: u64,
    },
    /// Decode every word of a file repeatedly and report the elapsed time
    Time {
        /// Path to the raw instruction stream
        binary: PathBuf,

        /// Number of passes over the stream
        #[arg(short, long, default_value = "100")]
        iters: u32,
    },
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn parse_hex32(s: &str) -> Result<u32, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u32::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn load_words(path: &PathBuf) -> Result<Vec<u32>> {
    let data = fs::read(path)
        .with_context(|| format!("failed to read instruction stream: {}", path.display()))?;
    stream::words_from_bytes(&data)
        .with_context(|| format!("malformed instruction stream: {}", path.display()))
}

fn print_insn(insn: &Insn) {
    if insn.is_valid() {
        println!(
            "{:#012x}  {:08x}  {:<8} {:?}",
            insn.pc,
            insn.word,
            insn.opcode.name(),
            insn.opcode
        );
    } else {
        println!("{:#012x}  {:08x}  .inst", insn.pc, insn.word);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { binary, base, json } => {
            let words = load_words(&binary)?;
            let insns: Vec<Insn> = words
                .iter()
                .enumerate()
                .map(|(i, &word)| decode(IsaMode::A64, base + 4 * i as u64, word))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&insns)?);
            } else {
                for insn in &insns {
                    print_insn(insn);
                }
                let invalid = insns.iter().filter(|i| !i.is_valid()).count();
                if invalid > 0 {
                    eprintln!("{invalid} of {} words did not decode", insns.len());
                }
            }
        }
        Commands::Word { word, pc } => {
            let insn = decode(IsaMode::A64, pc, word);
            print_insn(&insn);
            if !insn.is_valid() {
                bail!("word {word:#010x} matches no defined A64 encoding");
            }
        }
        Commands::Time { binary, iters } => {
            let words = load_words(&binary)?;
            if words.is_empty() {
                bail!("empty instruction stream");
            }

            let start = Instant::now();
            let mut valid = 0u64;
            for _ in 0..iters {
                for (i, &word) in words.iter().enumerate() {
                    if decode(IsaMode::A64, 4 * i as u64, word).is_valid() {
                        valid += 1;
                    }
                }
            }
            let elapsed = start.elapsed();

            let total = words.len() as u64 * iters as u64;
            println!(
                "{total} decodes in {:.6}s ({:.1} Minsn/s, {valid} valid)",
                elapsed.as_secs_f64(),
                total as f64 / elapsed.as_secs_f64() / 1e6
            );
        }
    }

    Ok(())
}
