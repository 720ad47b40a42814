use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use carbon::compare::{Checker, HighlightStyle};
use carbon::config::Config;
use carbon::error::CheckError;
use carbon::output::FileNames;

/// Carbon: a two-document plagiarism checker.
///
/// Scores shared vocabulary between two files (txt, pdf or docx), lists
/// the sentences they have in common, and shows both documents with those
/// sentences highlighted.
#[derive(Parser)]
#[command(name = "carbon", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    Compare {
        /// First document (.txt, .pdf, .docx)
        file1: PathBuf,

        /// Second document (.txt, .pdf, .docx)
        file2: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip printing the highlighted documents
        #[arg(long)]
        no_text: bool,
    },

    /// List the active stopwords (English list plus configured extras)
    Stopwords,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Colored terminal report
    Terminal,
    /// Machine-readable JSON payload
    Json,
    /// Markdown report
    Markdown,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carbon=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            file1,
            file2,
            format,
            output,
            no_text,
        } => {
            let config = Config::load()?;
            let highlight = match (format, &output) {
                (OutputFormat::Terminal, None) => HighlightStyle::Ansi,
                _ => HighlightStyle::Markdown,
            };
            let checker = Checker::new(config.stop_words()?).with_highlight(highlight);

            info!(file1 = %file1.display(), file2 = %file2.display(), "Comparing documents");

            let spinner = (format == OutputFormat::Terminal).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("  {spinner} {msg}")
                        .expect("valid template"),
                );
                pb.set_message("Reading and comparing documents...");
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            });

            let result = checker.check_files(&file1, &file2, config.max_file_bytes);

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let report = match result {
                Ok(report) => report,
                Err(e) => return Ok(report_check_error(&e)),
            };

            let (name_1, name_2) = (display_name(&file1), display_name(&file2));
            let names = FileNames {
                first: &name_1,
                second: &name_2,
            };

            match format {
                OutputFormat::Terminal if output.is_none() => {
                    carbon::output::terminal::display_report(&report, names, !no_text);
                }
                _ => {
                    let rendered = match format {
                        OutputFormat::Json => serde_json::to_string_pretty(&report)
                            .context("Failed to serialize report")?,
                        _ => carbon::output::markdown::render_report(&report, names, !no_text),
                    };
                    match &output {
                        Some(path) => {
                            carbon::output::markdown::write_report(&rendered, path)?;
                            println!(
                                "{}",
                                format!("Report saved to: {}", path.display()).bold()
                            );
                        }
                        None => println!("{rendered}"),
                    }
                }
            }
        }

        Commands::Stopwords => {
            let config = Config::load()?;
            let stop_words = config.stop_words()?;
            println!(
                "{}",
                format!("=== Active stopwords ({}) ===", stop_words.len()).bold()
            );
            for word in stop_words.sorted() {
                println!("  {word}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print a comparison error as a single user-facing line.
fn report_check_error(err: &CheckError) -> ExitCode {
    eprintln!("{} {}", "Error:".red().bold(), err);
    ExitCode::FAILURE
}
