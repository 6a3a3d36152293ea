use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;

/// Output produced for each rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `ComplexDiagram(...)` calls for railroad-diagrams
    #[default]
    Diagram,
    /// Rail notation for LaTeX documents
    Rail,
    /// The parsed node tree as pretty-printed JSON
    Ast,
}

#[derive(Parser, Debug)]
#[command(name = "rail2js")]
#[command(about = "Translate rail grammar rules into railroad-diagrams calls or LaTeX rail notation", long_about = None)]
pub struct Cli {
    /// Rule files, translated in the order given
    pub files: Vec<PathBuf>,

    /// Emit rail notation for LaTeX instead of diagram calls
    #[arg(long)]
    pub latex: bool,

    /// Dump the parsed node tree as JSON
    #[arg(long, conflicts_with = "latex")]
    pub ast: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Trace every input as it is processed
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the command line, accepting the historical `-latex` spelling
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(normalize_args(args))
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

/// Rewrite a leading `-latex` into `--latex`
///
/// `-latex` only counts as the flag when at least one file follows it;
/// on its own it is taken as a file name.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).map_or(false, |arg| arg == "-latex") {
        if args.len() > 2 {
            args[1] = OsString::from("--latex");
        } else {
            args.insert(1, OsString::from("--"));
        }
    }
    args
}

/// Settings for one run of the driver
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub mode: Mode,
    pub inputs: Vec<PathBuf>,
}

impl Config {
    pub fn new(mode: Mode, inputs: Vec<PathBuf>) -> Self {
        Config { mode, inputs }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = if cli.ast {
            Mode::Ast
        } else if cli.latex {
            Mode::Rail
        } else {
            Mode::Diagram
        };
        Config::new(mode, cli.files)
    }
}
