//! keyrank CLI: run every model over a corpus and write the precision
//! report.

use anyhow::Context;
use clap::Parser;
use keyrank::{run_all_models, write_report, Corpus, ExtractionConfig, ReferenceSet, StopwordFilter};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "keyrank",
    version,
    about = "Extract key phrases from .abstr documents and report precision against .uncontr reference keywords"
)]
struct Args {
    /// Directory holding .abstr documents and paired .uncontr keyword files
    #[arg(long, default_value = "Training")]
    corpus: PathBuf,

    /// Stopword file, one word per line (built-in English list when omitted)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Report output path
    #[arg(long, default_value = "report.txt")]
    output: PathBuf,

    /// Number of keywords selected per document
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Disable the POS boost in the POS-filtered model
    #[arg(long)]
    no_pos_boost: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stopwords = match &args.stopwords {
        Some(path) => StopwordFilter::from_file(path)
            .with_context(|| format!("loading stopwords from {}", path.display()))?,
        None => StopwordFilter::english(),
    };

    let corpus = Corpus::load_dir(&args.corpus, "abstr")
        .with_context(|| format!("loading corpus from {}", args.corpus.display()))?;
    let references = ReferenceSet::load_dir(&args.corpus, "uncontr")
        .with_context(|| format!("loading reference keywords from {}", args.corpus.display()))?;
    log::info!(
        "evaluating {} documents against {} reference sets",
        corpus.len(),
        references.len()
    );

    let config = ExtractionConfig::default()
        .with_top_k(args.top_k)
        .with_pos_boost(!args.no_pos_boost);
    let rows = run_all_models(&corpus, &references, &stopwords, &config)?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating report file {}", args.output.display()))?;
    write_report(&mut file, &rows)
        .with_context(|| format!("writing report to {}", args.output.display()))?;
    log::info!("report written to {}", args.output.display());

    Ok(())
}
