use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::matching::keywords::DEFAULT_TOP_N;

/// Default destination for a bare `export` in the interactive shell.
pub const DEFAULT_REPORT_PATH: &str = "resume-analysis-report.pdf";

/// Central configuration loaded from environment variables.
///
/// Everything has a default, and command-line flags override what is here.
/// A .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Keywords extracted per document (RESUMATCH_TOP_N)
    pub top_n: usize,
    /// Where the shell writes the report when `export` has no path
    /// (RESUMATCH_REPORT_PATH)
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `top_n` given on the command line wins, and RESUMATCH_TOP_N is then
    /// not read at all, so a bad value there can't block an explicit flag.
    pub fn load(top_n: Option<usize>) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), top_n)
    }

    /// Build configuration from any key lookup. Split out from `load` so
    /// tests don't have to mutate the process environment.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        top_n: Option<usize>,
    ) -> Result<Self> {
        let top_n = match (top_n, lookup("RESUMATCH_TOP_N")) {
            (Some(n), _) => n,
            (None, Some(raw)) => parse_top_n(&raw)?,
            (None, None) => DEFAULT_TOP_N,
        };

        let report_path = lookup("RESUMATCH_REPORT_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

        Ok(Self { top_n, report_path })
    }
}

fn parse_top_n(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => anyhow::bail!(
            "RESUMATCH_TOP_N must be a positive integer, got {raw:?}.\n\
             Unset it to use the default of {DEFAULT_TOP_N}."
        ),
    }
}
