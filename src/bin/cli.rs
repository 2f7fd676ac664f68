//! mmdict CLI
//!
//! Generates a dictionary from a word list or loads an existing one, then
//! runs a single query against it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use mmdict::{Config, LengthBound, OverflowPolicy, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// mmdict CLI
#[derive(Parser, Debug)]
#[command(name = "mmdict-cli")]
#[command(about = "Fixed-record, memory-mapped word dictionary")]
#[command(version)]
struct Args {
    /// Backing dictionary file
    #[arg(short, long, default_value = "./words.dict")]
    path: PathBuf,

    /// Number of slots (must match the value used at generate time)
    #[arg(short, long, default_value = "500000")]
    capacity: usize,

    /// Bound count queries by the widest word instead of the slot count
    #[arg(long)]
    word_width_bound: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the dictionary from a newline-delimited word list
    Generate {
        /// Word list, one word per line
        source: PathBuf,

        /// Fail instead of dropping words that do not fit
        #[arg(long)]
        strict: bool,
    },

    /// Check whether a word is in the dictionary
    Exists {
        /// The word to look up
        word: String,
    },

    /// Count words by length
    Count {
        /// Length to compare against
        n: usize,

        /// Which side of `n` to count
        #[arg(short, long, value_enum, default_value = "equal")]
        by: Comparison,
    },

    /// Print occupancy and length statistics
    Stats,

    /// Print stored words with their slot index
    Dump {
        /// Maximum number of words to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Comparison {
    /// Words longer than N bytes
    Longer,

    /// Words shorter than N bytes
    Shorter,

    /// Words exactly N bytes long
    Equal,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mmdict=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> mmdict::Result<()> {
    tracing::debug!("mmdict v{}", mmdict::VERSION);

    let overflow_policy = match &args.command {
        Commands::Generate { strict: true, .. } => OverflowPolicy::Reject,
        _ => OverflowPolicy::Truncate,
    };
    let length_bound = if args.word_width_bound {
        LengthBound::WordWidth
    } else {
        LengthBound::SlotCount
    };

    let config = Config::builder()
        .path(&args.path)
        .capacity(args.capacity)
        .overflow_policy(overflow_policy)
        .length_bound(length_bound)
        .build();

    let mut store = Store::with_config(config)?;

    match args.command {
        Commands::Generate { source, .. } => {
            let report = store.generate(&source)?;
            println!(
                "wrote {} words ({} skipped, {} truncated, {} dropped)",
                report.words_written,
                report.lines_skipped,
                report.words_truncated,
                report.lines_dropped
            );
        }
        Commands::Exists { word } => {
            store.load()?;
            match store.exists(word.as_bytes())? {
                Some(slot) => println!("found at slot {}", slot),
                None => println!("not found"),
            }
        }
        Commands::Count { n, by } => {
            store.load()?;
            let (label, total) = match by {
                Comparison::Longer => ("longer than", store.count_longer_than(n)?),
                Comparison::Shorter => ("shorter than", store.count_shorter_than(n)?),
                Comparison::Equal => ("equal to", store.count_equal_to(n)?),
            };
            println!("{} words {} {}", total, label, n);
        }
        Commands::Stats => {
            store.load()?;
            let stats = store.stats()?;
            println!("capacity:  {}", stats.capacity);
            println!("populated: {}", stats.populated);
            println!("empty:     {}", stats.empty);
            if let (Some(min), Some(max)) = (stats.min_len, stats.max_len) {
                println!("length:    {}..={}", min, max);
                println!(
                    "mean:      {:.2}",
                    stats.total_len as f64 / stats.populated as f64
                );
            }
        }
        Commands::Dump { limit } => {
            store.load()?;
            for (slot, record) in store.iter()?.take(limit.unwrap_or(usize::MAX)) {
                println!("{}\t{}", slot, String::from_utf8_lossy(record.word()));
            }
        }
    }

    store.close()
}
