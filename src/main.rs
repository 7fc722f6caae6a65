use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use resumatch::analysis::{self, AnalysisOptions};
use resumatch::config::Config;
use resumatch::extract;
use resumatch::matching::keywords::top_keywords;
use resumatch::matching::normalize::Normalizer;
use resumatch::output::{pdf, terminal};
use resumatch::session::Session;

/// Resumatch: compare a resume against a job description.
///
/// Scores how closely the two documents match (cosine similarity of their
/// keyword counts) and shows which job keywords the resume is missing.
#[derive(Parser)]
#[command(name = "resumatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a job description with a resume
    Analyze {
        /// Job description file (.pdf or .txt)
        #[arg(long, short)]
        job: PathBuf,

        /// Resume file (.pdf or .txt)
        #[arg(long, short)]
        resume: PathBuf,

        /// Keywords to extract per document (default: 20, or RESUMATCH_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,

        /// Also write a PDF report to this path
        #[arg(long)]
        export: Option<PathBuf>,

        /// Skip the overlap chart
        #[arg(long)]
        no_chart: bool,

        /// Print the result as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },

    /// Show the top keywords of a single document
    Keywords {
        /// Document to inspect (.pdf or .txt)
        path: PathBuf,

        /// Keywords to show (default: 20, or RESUMATCH_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// Start an interactive session (choose files, analyze, export)
    Shell {
        /// Keywords to extract per document (default: 20, or RESUMATCH_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resumatch=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let top_n_flag = match &cli.command {
        Commands::Analyze { top_n, .. }
        | Commands::Keywords { top_n, .. }
        | Commands::Shell { top_n } => *top_n,
    };
    let config = Config::load(top_n_flag)?;

    match cli.command {
        Commands::Analyze {
            job,
            resume,
            export,
            no_chart,
            json,
            ..
        } => {
            let options = AnalysisOptions {
                top_n: config.top_n,
            };
            let normalizer = Normalizer::new();

            info!(job = %job.display(), resume = %resume.display(), "Analyzing documents");
            let result = analysis::analyze_files(&normalizer, &job, &resume, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_summary(&result);
                if !no_chart {
                    terminal::display_overlap_chart(&result.overlap());
                }
            }

            if let Some(path) = export {
                let pages = pdf::export_report(&result, &path)?;
                // Keep stdout pure JSON when --json is set
                if !json {
                    println!(
                        "\n{}",
                        format!("Report saved to: {} ({pages} pages)", path.display()).bold()
                    );
                }
            }
        }

        Commands::Keywords { path, .. } => {
            let n = config.top_n;
            let text = extract::extract_text(&path)?.require_text()?;
            let cleaned = Normalizer::new().clean(&text);
            let keywords = top_keywords(&cleaned, n);

            println!(
                "\n{}",
                format!("=== Keywords for {} ===", path.display()).bold()
            );
            println!("  Tokens after cleaning: {}", cleaned.len());
            println!("  Distinct keywords shown: {}", keywords.len());
            println!();
            for (i, word) in keywords.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, word);
            }
        }

        Commands::Shell { .. } => {
            let options = AnalysisOptions {
                top_n: config.top_n,
            };
            let mut session = Session::new(options);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            resumatch::shell::run(&mut session, &config.report_path, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
