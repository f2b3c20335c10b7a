use anyhow::Result;
use clap::Parser;
use lineqa::{
    DEFAULT_FALLBACK_REPLY, DEFAULT_MIN_SCORE, FileCorpus, answer, matcher_with_min_score, rank,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// lineqa: answer a question with the most similar line of a corpus file.
///
/// Prints the matching line and exits 0, or prints the fallback reply and
/// exits 1 when no line scores above the threshold.
#[derive(Parser)]
#[command(name = "lineqa", version, about)]
struct Cli {
    /// Corpus file, one candidate answer per line
    #[arg(long, default_value = "data.md")]
    corpus: PathBuf,

    /// A line must score strictly above this to count as a match
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    min_score: f64,

    /// Print up to N ranked lines with their scores instead of one answer
    #[arg(long)]
    top: Option<usize>,

    /// The question to answer
    query: String,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lineqa=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let matcher = matcher_with_min_score(cli.min_score)?;
    let corpus = FileCorpus::new(&cli.corpus);

    if let Some(limit) = cli.top {
        let ranked = rank(&cli.query, &corpus, &matcher, limit)?;
        for scored in &ranked {
            println!("{:.4}\t{}", scored.score, scored.line);
        }
        return Ok(if ranked.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let outcome = answer(&cli.query, &corpus, &matcher)?;
    match outcome.line() {
        Some(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("{DEFAULT_FALLBACK_REPLY}");
            Ok(ExitCode::FAILURE)
        }
    }
}
