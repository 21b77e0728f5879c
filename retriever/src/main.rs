use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ir_core::cli::IndexArgs;
use ir_core::retrieval::run_batch;
use ir_core::stats::{bottom_terms, find_similar_terms, top_terms, TermFrequency, SIMILAR_MAX_DF, SIMILAR_MIN_DF};
use ir_core::InvertedIndex;
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "retriever")]
#[command(about = "Boolean retrieval over <DOC>-tagged corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an RPN query file and write one result line per query
    Retrieve {
        #[command(flatten)]
        index: IndexArgs,
        /// Query file, one RPN query per line
        #[arg(long, default_value = "BooleanQueries.txt")]
        queries: PathBuf,
        /// Result file
        #[arg(long, default_value = "Part_2.txt")]
        output: PathBuf,
    },
    /// Print the most and least frequent terms by document frequency
    Stats {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long, default_value_t = 10)]
        n: usize,
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Find two alphabetic terms with identical posting lists
    Similar {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long, default_value_t = SIMILAR_MIN_DF)]
        min_df: usize,
        #[arg(long, default_value_t = SIMILAR_MAX_DF)]
        max_df: usize,
        /// Ignore the document frequency bounds
        #[arg(long, default_value_t = false)]
        unbounded: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Retrieve { index, queries, output } => retrieve(&index, &queries, &output),
        Commands::Stats { index, n, json } => stats(&index, n, json),
        Commands::Similar { index, min_df, max_df, unbounded } => {
            let bounds = (!unbounded).then_some(min_df..=max_df);
            similar(&index, bounds)
        }
    }
}

fn build_index(args: &IndexArgs) -> Result<InvertedIndex> {
    args.build_index().with_context(|| format!("indexing {}", args.corpus.display()))
}

fn retrieve(args: &IndexArgs, queries: &Path, output: &Path) -> Result<()> {
    let index = build_index(args)?;
    let input = File::open(queries).with_context(|| format!("opening {}", queries.display()))?;
    let out = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let report = run_batch(&index, BufReader::new(input), BufWriter::new(out))?;
    for (line, err) in &report.failures {
        eprintln!("{}:{line}: {err}", queries.display());
    }
    tracing::info!(
        queries = report.queries,
        failed = report.failures.len(),
        output = %output.display(),
        "boolean retrieval results written"
    );
    Ok(())
}

fn stats(args: &IndexArgs, n: usize, json: bool) -> Result<()> {
    let index = build_index(args)?;
    let top = top_terms(&index, n);
    let bottom = bottom_terms(&index, n);
    if json {
        let body = serde_json::json!({ "num_docs": index.num_docs(), "num_terms": index.num_terms(), "top": top, "bottom": bottom });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }
    println!("documents: {}  terms: {}", index.num_docs(), index.num_terms());
    print_terms(&format!("top {n}"), &top);
    print_terms(&format!("bottom {n}"), &bottom);
    Ok(())
}

fn print_terms(title: &str, terms: &[TermFrequency]) {
    println!("\n{title}:");
    for t in terms {
        println!("  {:>8}  {}", t.doc_frequency, t.term);
    }
}

fn similar(args: &IndexArgs, bounds: Option<std::ops::RangeInclusive<usize>>) -> Result<()> {
    let index = build_index(args)?;
    match find_similar_terms(&index, bounds)? {
        Some(found) => println!("{}", serde_json::to_string_pretty(&found)?),
        None => println!("no pair of alphabetic terms shares a posting list"),
    }
    Ok(())
}
