//! Command line arguments

use clap::Parser as ClapParser;

/// Convert data literals to tagged JSON
#[derive(Debug, Clone, Default, ClapParser)]
#[command(name = "lit2json", version)]
pub struct Cli {
    /// Read the source from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Convert the given text instead of reading input
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Write JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Emit single-line JSON
    #[arg(short, long)]
    pub compact: bool,

    /// Start an interactive session
    #[arg(short, long)]
    pub repl: bool,

    /// Dump the token stream to stderr
    #[arg(long)]
    pub print_tokens: bool,

    /// Dump the parsed AST to stderr
    #[arg(long)]
    pub print_ast: bool,
}

impl Cli {
    /// Arguments for reading stdin with default output
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments for converting a file
    pub fn with_file(file: String) -> Self {
        Self {
            file: Some(file),
            ..Self::default()
        }
    }

    /// Arguments for the interactive session
    pub fn with_repl() -> Self {
        Self {
            repl: true,
            ..Self::default()
        }
    }
}
