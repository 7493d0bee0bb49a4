//! fasta2nex - FASTA to NEXUS converter
//!
//! ## Usage
//!
//! ```bash
//! fasta2nex input.fasta > output.nexus
//! fasta2nex input.fasta 50000 outgroup_taxon > output.nexus
//! fasta2nex input.fasta --data-only -o matrix.nex
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fasta2nex::formats::convert_file;
use fasta2nex::formats::nexus::{NexusOptions, DEFAULT_NGEN};

/// fasta2nex - Convert a FASTA alignment to NEXUS with a MrBayes block
///
/// The NEXUS document is written to stdout unless -o/--output is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input FASTA file
    input: PathBuf,

    /// Number of MCMC generations in the MrBayes block
    #[arg(default_value_t = DEFAULT_NGEN, value_parser = clap::value_parser!(u64).range(1..))]
    ngen: u64,

    /// Outgroup taxon name
    outgroup: Option<String>,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Write only the DATA block, without the MrBayes block
    #[arg(long = "data-only")]
    data_only: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn nexus_options(&self) -> NexusOptions {
        NexusOptions {
            ngen: self.ngen,
            outgroup: self.outgroup.clone(),
            mrbayes: !self.data_only,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fasta2nex=debug")
    } else {
        EnvFilter::new("fasta2nex=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let nexus = convert_file(&args.input, &args.nexus_options())
        .with_context(|| format!("Cannot convert {}", args.input.display()))?;

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(nexus.as_bytes())?;
        handle.flush()?;
    } else {
        std::fs::write(&args.output, nexus)
            .with_context(|| format!("Cannot write {}", args.output))?;
        info!(output = %args.output, "wrote NEXUS file");
    }

    Ok(())
}
