//! Generates a multi-sample IGV session file (without alignments).
//!
//! ```shell
//! cargo run --release --bin=igv-multi-session --features=binaries -- \
//!     --samples 200081,200082 \
//!     --locus chr14:100826000-100827000
//! ```
//!
//! The session is written to `igv-sessions/<out>`.

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use clap_verbosity_flag::WarnLevel;
use igvsession::cohort;
use igvsession::locus::Locus;
use igvsession::output;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The delimiter between sample IDs.
const SAMPLE_DELIMITER: char = ',';

/// Generate a multi-sample IGV session.
#[derive(Parser)]
struct Args {
    /// Comma-separated list of sample IDs (e.g., `sample1,sample2`).
    #[arg(long)]
    samples: String,

    /// Genomic locus (e.g., `chr14:100826000-100827000`).
    #[arg(long)]
    locus: String,

    /// Output filename in the `igv-sessions` directory.
    #[arg(long, default_value = output::DEFAULT_COHORT_FILE_NAME)]
    out: String,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

/// Splits a delimited list of sample IDs, trimming whitespace around each.
fn split_samples(samples: &str) -> Vec<&str> {
    samples.split(SAMPLE_DELIMITER).map(str::trim).collect()
}

fn generate(args: &Args) -> Result<()> {
    if Locus::try_new(&args.locus).is_none() {
        warn!(
            "locus `{}` is not of the form `contig:start-end`; writing it as given",
            args.locus
        );
    }

    let samples = split_samples(&args.samples);
    if samples.iter().any(|sample| sample.is_empty()) {
        warn!("sample list `{}` contains an empty sample ID", args.samples);
    }

    info!("session: building for {} sample(s)", samples.len());
    let session = cohort::build(&samples, &args.locus, &cohort::Options::default())
        .context("building multi-sample session")?;

    for id in session.duplicate_track_ids() {
        warn!("track id `{id}` is used by more than one track; is a sample repeated?");
    }

    let xml = session.to_xml().context("serializing session")?;

    info!("session: writing {}", args.out);
    let path = output::write(Path::new(output::SESSIONS_DIR), &args.out, &xml)
        .with_context(|| format!("writing session file `{}`", args.out))?;

    println!("Multi-sample IGV session created: {}", path.display());

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    generate(&args)
}
