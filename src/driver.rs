use crate::config::{Config, Mode};
use rail_core::Expression;
use rail_notation::{diagram, parse, rail, ParseError};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Why an input produced no output
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("can't open file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: cannot serialize node tree: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of a run over all inputs
#[derive(Debug, Default)]
pub struct Summary {
    /// Inputs that produced output
    pub rendered: usize,
    /// Inputs that held no rule
    pub skipped: usize,
    /// Inputs that could not be read, parsed or serialized
    pub failures: Vec<DriverError>,
}

/// Reads each input, parses its rule and writes it out in the configured mode
pub struct Driver {
    config: Config,
}

impl Driver {
    pub fn new(config: Config) -> Self {
        Driver { config }
    }

    /// Process every input in order
    ///
    /// A failing input is reported and skipped; only a failure to write to
    /// `out` stops the run.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<Summary> {
        let mut summary = Summary::default();

        for path in &self.config.inputs {
            match self.translate(path) {
                Ok(Some(text)) => {
                    writeln!(out, "{}", text)?;
                    summary.rendered += 1;
                }
                Ok(None) => {
                    tracing::debug!(path = %path.display(), "no rule found");
                    summary.skipped += 1;
                }
                Err(err) => {
                    tracing::error!("{}", err);
                    summary.failures.push(err);
                }
            }
        }

        Ok(summary)
    }

    /// Translate one input; `Ok(None)` when it holds no rule
    pub fn translate(&self, path: &Path) -> Result<Option<String>, DriverError> {
        let bytes = fs::read(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let source = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = source {
            tracing::warn!(path = %path.display(), "input is not valid UTF-8, invalid bytes replaced");
        }

        let expr = parse(&source).map_err(|source| DriverError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match expr {
            Some(expr) => {
                tracing::debug!(path = %path.display(), rule = %expr.name, "translating");
                self.render(&expr)
                    .map(Some)
                    .map_err(|source| DriverError::Serialize {
                        path: path.to_path_buf(),
                        source,
                    })
            }
            None => Ok(None),
        }
    }

    /// Render an expression in the configured mode
    pub fn render(&self, expr: &Expression) -> Result<String, serde_json::Error> {
        match self.config.mode {
            Mode::Diagram => Ok(diagram::render(expr).text),
            Mode::Rail => Ok(rail::render(expr).text),
            Mode::Ast => serde_json::to_string_pretty(expr),
        }
    }
}
