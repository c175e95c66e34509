//! Print a highlighted snippet for a query.
//!
//! Usage:
//!     highlight "Plz snip" "Plz 2 snip snip me" --max-count 10
//!     cat notes.txt | highlight "build failed" --json
//!
//! Exits with status 1 when some query word does not occur in the text.
//! Set RUST_LOG=highlighter=debug to see why a text did not match.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use highlighter::{HighlightConfig, Highlighter, MergeStrategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace-separated words that must all occur in the text
    query: String,

    /// Text to search (read from stdin when omitted)
    text: Option<String>,

    /// Maximum snippet length in characters
    #[arg(short, long)]
    max_count: Option<usize>,

    /// How overlapping matches are unioned
    #[arg(long, value_enum)]
    merge: Option<MergeArg>,

    /// Marker for truncated text
    #[arg(short, long)]
    ellipsis: Option<String>,

    /// Inline JSON config, e.g. '{"max_count": 40, "mark_open": "<b>", "mark_close": "</b>"}'
    /// Flags above take precedence over it.
    #[arg(short, long)]
    config: Option<String>,

    /// Print the snippet record as JSON instead of markup
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MergeArg {
    Sweep,
    SinglePass,
}

impl From<MergeArg> for MergeStrategy {
    fn from(arg: MergeArg) -> Self {
        match arg {
            MergeArg::Sweep => MergeStrategy::Sweep,
            MergeArg::SinglePass => MergeStrategy::SinglePass,
        }
    }
}

fn build_config(args: &Args) -> Result<HighlightConfig> {
    let mut config = match &args.config {
        Some(json) => HighlightConfig::from_json_str(json).context("Failed to parse --config")?,
        None => HighlightConfig::default(),
    };
    if let Some(max_count) = args.max_count {
        config = config.with_max_count(max_count);
    }
    if let Some(merge) = args.merge {
        config = config.with_merge(merge.into());
    }
    if let Some(ellipsis) = &args.ellipsis {
        config = config.with_ellipsis(ellipsis.clone());
    }
    config.validate().context("Invalid highlighter options")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let highlighter = Highlighter::new(config);
    let output = if args.json {
        highlighter
            .snippet(&args.query, &text)
            .map(|snippet| serde_json::to_string_pretty(&snippet))
            .transpose()
            .context("Failed to serialize snippet")?
    } else {
        highlighter.markup(&args.query, &text)
    };

    match output {
        Some(out) => {
            println!("{}", out);
            Ok(())
        }
        None => {
            eprintln!("No match for {:?}", args.query);
            std::process::exit(1);
        }
    }
}
