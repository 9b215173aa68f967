use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use calmread_core::{
    ExtractConfig, FetchConfig, ReaderMode, ReaderModeConfig, calculate_quality, detect_spans, extract_candidates,
    extract_title, fetch_file, fetch_stdin, fetch_url, highlight, make_calm_summary, make_fallback_summary,
    select_best,
};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Extract, score, summarize and annotate news articles
#[derive(Parser, Debug)]
#[command(name = "calmread")]
#[command(version, about = "Calm reading for noisy news pages", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output file (default: stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "12", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the main readable text of a page
    Extract {
        /// URL to fetch, local HTML file, or "-" for stdin
        input: String,
    },
    /// Print quality metrics of the extracted text
    Quality {
        /// URL to fetch, local HTML file, or "-" for stdin
        input: String,
    },
    /// Print a calm summary of the extracted text
    Summary {
        /// URL to fetch, local HTML file, or "-" for stdin
        input: String,
        /// Treat the input as plain text instead of HTML
        #[arg(long)]
        raw: bool,
        /// Short description of what happened, used when no summary can be built
        #[arg(long, value_name = "TEXT")]
        what: Option<String>,
        /// Short description of why it matters, used when no summary can be built
        #[arg(long, value_name = "TEXT")]
        why: Option<String>,
    },
    /// Highlight manipulative, promotional and emphatic spans
    Spans {
        /// URL to fetch, local HTML file, or "-" for stdin
        input: String,
        /// Treat the input as plain text instead of HTML
        #[arg(long)]
        raw: bool,
    },
    /// Fetch a URL in reader mode, falling back to the given text
    Read {
        /// Page URL
        url: String,
        /// Text used when the page cannot be fetched or is too thin
        #[arg(long, value_name = "TEXT")]
        fallback: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Reads raw input from stdin, a URL, or a file
async fn load_input(input: &str, args: &Args) -> anyhow::Result<String> {
    if input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        return fetch_stdin().context("Failed to read from stdin");
    }

    if is_url(input) {
        if args.verbose {
            echo::print_step(1, 3, &format!("Fetching from {}", input.bright_white().underline()));
        }
        let mut config = FetchConfig { timeout: args.timeout, ..FetchConfig::default() };
        if let Some(user_agent) = &args.user_agent {
            config.user_agent = user_agent.clone();
        }
        return fetch_url(input, &config).await.context("Failed to fetch URL");
    }

    if args.verbose {
        echo::print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
    }
    fetch_file(input).with_context(|| format!("Failed to read file: {}", input))
}

/// Extracts the main text from HTML, reporting the winning candidate in verbose mode
fn extract_text(html: &str, verbose: bool) -> String {
    let candidates = extract_candidates(html, &ExtractConfig::default());
    let total = candidates.len();
    let best = select_best(candidates);

    if verbose {
        echo::print_step(2, 3, "Extracting main content");
        match &best {
            Some(candidate) => echo::print_candidate(candidate, total),
            None => echo::print_warning("No readable content found"),
        }
    }

    best.map(|candidate| candidate.text).unwrap_or_default()
}

async fn run_extract(input: &str, args: &Args, timings: &mut Vec<(String, Duration)>) -> anyhow::Result<String> {
    let started = Instant::now();
    let html = load_input(input, args).await?;
    timings.push(("Load".to_string(), started.elapsed()));

    if args.verbose {
        eprintln!("  {} {}\n", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
    }

    let started = Instant::now();
    let text = extract_text(&html, args.verbose);
    timings.push(("Extract".to_string(), started.elapsed()));

    Ok(match args.format {
        OutputFormat::Text => text,
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "title": extract_title(&html),
            "text": text,
        }))?,
    })
}

async fn run_quality(input: &str, args: &Args) -> anyhow::Result<String> {
    let html = load_input(input, args).await?;
    let quality = calculate_quality(&extract_text(&html, args.verbose));

    if args.verbose {
        echo::print_quality_details(&quality);
    }

    Ok(match args.format {
        OutputFormat::Text => format!(
            "chars: {}\nsentences: {}\nwords: {}\ncta_density: {:.3}\nok_for_summary: {}",
            quality.char_count, quality.sentence_count, quality.word_count, quality.cta_density, quality.ok_for_summary
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&quality)?,
    })
}

async fn run_summary(
    input: &str, raw: bool, what: Option<&str>, why: Option<&str>, args: &Args,
) -> anyhow::Result<String> {
    let content = load_input(input, args).await?;
    let text = if raw { content } else { extract_text(&content, args.verbose) };

    if args.verbose {
        echo::print_step(3, 3, "Summarizing");
    }

    let mut paragraphs = make_calm_summary(&text);
    if paragraphs.is_empty() {
        if args.verbose {
            echo::print_info("Text too thin to summarize, using fallback fields");
        }
        paragraphs = make_fallback_summary(what, why);
    }
    if paragraphs.is_empty() {
        echo::print_warning("No summary available");
    }

    Ok(match args.format {
        OutputFormat::Text => paragraphs.join("\n\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&paragraphs)?,
    })
}

async fn run_spans(input: &str, raw: bool, args: &Args) -> anyhow::Result<String> {
    let content = load_input(input, args).await?;
    let text = if raw { content.trim_end().to_string() } else { extract_text(&content, args.verbose) };
    let spans = detect_spans(&text);

    if args.verbose {
        echo::print_info(&format!("{} spans detected", spans.len()));
    }

    Ok(match args.format {
        OutputFormat::Text => {
            let mut output = highlight(&text, &spans, "[", "]");
            if !spans.is_empty() {
                output.push_str("\n\n");
                let lines: Vec<String> = spans
                    .iter()
                    .map(|span| format!("{}..{}\t{}\t{}", span.start, span.end, span.label(), span.text))
                    .collect();
                output.push_str(&lines.join("\n"));
            }
            output
        }
        OutputFormat::Json => serde_json::to_string_pretty(&spans)?,
    })
}

async fn run_read(url: &str, fallback: Option<&str>, args: &Args) -> anyhow::Result<String> {
    let config = ReaderModeConfig::builder().fetch_timeout(Duration::from_secs(args.timeout)).build();
    let reader = ReaderMode::http(config, args.user_agent.clone()).context("Failed to build HTTP client")?;

    if args.verbose {
        echo::print_step(1, 1, &format!("Reading {}", url.bright_white().underline()));
    }

    let article = reader
        .read(url, fallback)
        .await
        .with_context(|| format!("No readable content for {}", url))?;

    if args.verbose {
        echo::print_quality_details(&article.quality);
    }

    Ok(match args.format {
        OutputFormat::Text => match &article.title {
            Some(title) => format!("{}\n\n{}", title, article.text),
            None => article.text,
        },
        OutputFormat::Json => article.to_json()?,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(command = ?args.command, format = ?args.format, "starting");

    if args.verbose {
        echo::print_banner();
    }

    let started = Instant::now();
    let mut timings = Vec::new();

    let output = match &args.command {
        Command::Extract { input } => run_extract(input, &args, &mut timings).await?,
        Command::Quality { input } => run_quality(input, &args).await?,
        Command::Summary { input, raw, what, why } => {
            run_summary(input, *raw, what.as_deref(), why.as_deref(), &args).await?
        }
        Command::Spans { input, raw } => run_spans(input, *raw, &args).await?,
        Command::Read { url, fallback } => run_read(url, fallback.as_deref(), &args).await?,
    };

    if args.verbose && !timings.is_empty() {
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
    }

    Ok(())
}
