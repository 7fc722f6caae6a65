// Interactive shell: a line-oriented stand-in for the single-window tool.
//
// Mirrors the window's actions: choose a job description, choose a resume,
// analyze, export. Every failure is printed as a message and the loop keeps
// going; only `quit` or end of input ends the session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::warn;

use crate::error::AnalysisError;
use crate::extract::DocumentRole;
use crate::output::terminal;
use crate::session::{ReportState, Session};

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(DocumentRole, PathBuf),
    Analyze,
    Export(Option<PathBuf>),
    Status,
    Help,
    Quit,
    Empty,
    /// A known command missing its argument, or an unknown command
    Invalid(String),
}

const HELP: &str = "\
Commands:
  job <path>       choose the job description (.pdf or .txt)
  resume <path>    choose the resume (.pdf or .txt)
  analyze          compare the two documents
  export [path]    save the last analysis as a PDF report
  status           show chosen files and whether a result is ready
  help             show this message
  quit             leave the shell";

/// Parse a line of input. Paths may contain spaces and may be quoted.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, unquote(rest.trim())),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "job" | "jd" => select(DocumentRole::JobDescription, rest),
        "resume" | "cv" => select(DocumentRole::Resume, rest),
        "analyze" | "analyse" => Command::Analyze,
        "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command `{other}`; type `help`")),
    }
}

fn select(role: DocumentRole, rest: &str) -> Command {
    if rest.is_empty() {
        Command::Invalid(format!("choose the {role} with a file path"))
    } else {
        Command::Select(role, PathBuf::from(rest))
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// Run the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    default_report: &Path,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", "Resume / Job Description Analyzer".bold())?;
    writeln!(out, "{}", "Type `help` for commands.".dimmed())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} ", ">".bold())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Invalid(message) => writeln!(out, "{} {}", "?".yellow(), message)?,
            Command::Status => write_status(session, out)?,
            Command::Select(role, path) => {
                let name = display_name(&path);
                session.select(role, path);
                writeln!(out, "Uploaded {role}: {}", name.green())?;
            }
            Command::Analyze => match session.analyze() {
                Ok(result) => {
                    write!(out, "{}", terminal::render_summary(&result))?;
                    write!(out, "{}", terminal::render_overlap_chart(&result.overlap()))?;
                }
                Err(e) => report_error(out, &e)?,
            },
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| default_report.to_path_buf());
                match session.export(&path) {
                    Ok(pages) => writeln!(
                        out,
                        "Report saved to {} ({} page{})",
                        path.display().to_string().bold(),
                        pages,
                        if pages == 1 { "" } else { "s" }
                    )?,
                    Err(e) => report_error(out, &e)?,
                }
            }
        }
    }

    Ok(())
}

fn write_status<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    for role in [DocumentRole::JobDescription, DocumentRole::Resume] {
        let chosen = match session.selected(role) {
            Some(path) => display_name(path).normal(),
            None => "No file uploaded".dimmed(),
        };
        writeln!(out, "  {role}: {chosen}")?;
    }
    let state = match session.state() {
        ReportState::NoResult => "not analyzed yet".dimmed(),
        ReportState::HasResult(result) => format!("{:.2}% similarity", result.similarity).normal(),
    };
    writeln!(out, "  result: {state}")?;
    writeln!(out, "  keywords per document: {}", session.options().top_n)
}

fn report_error<W: Write>(out: &mut W, error: &AnalysisError) -> io::Result<()> {
    warn!(error = %error, "Shell command failed");
    let title = if error.is_input_error() {
        "Warning:".yellow().bold()
    } else {
        "Error:".red().bold()
    };
    writeln!(out, "{title} {error}")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
