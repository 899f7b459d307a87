//! Generates an IGV session file for a single individual.
//!
//! ```shell
//! cargo run --release --bin=igv-session --features=binaries 200081 chr14:100826000-100827000
//! ```
//!
//! The session is written to `igv-sessions/<individual>.<locus>.xml` using the
//! default genome, base URL, and methylation type, with alignments included.

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use clap_verbosity_flag::WarnLevel;
use igvsession::individual;
use igvsession::locus::Locus;
use igvsession::output;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Generate an IGV session file for a single individual with phased genomic
/// data.
#[derive(Debug, Parser)]
struct Args {
    /// The ID of the individual (e.g., `200081`).
    individual_id: String,

    /// Initial genomic locus to display (e.g., `chr14:100826000-100827000`).
    locus: String,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn generate(args: &Args) -> Result<()> {
    if Locus::try_new(&args.locus).is_none() {
        warn!(
            "locus `{}` is not of the form `contig:start-end`; writing it as given",
            args.locus
        );
    }

    info!("session: building for individual `{}`", args.individual_id);
    let session = individual::build(
        &args.individual_id,
        &args.locus,
        &individual::Options::default(),
    )
    .with_context(|| format!("building session for `{}`", args.individual_id))?;

    let xml = session.to_xml().context("serializing session")?;

    let file_name = output::individual_file_name(&args.individual_id, &args.locus);
    info!("session: writing {file_name}");
    let path = output::write(Path::new(output::SESSIONS_DIR), &file_name, &xml)
        .with_context(|| format!("writing session file `{file_name}`"))?;

    println!("IGV session file created: {}", path.display());

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
