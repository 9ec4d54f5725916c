//! Conversion orchestration
//!
//! The Converter reads source text, runs the parser and serializes the
//! resulting nodes as JSON. Only the binary decides what to do with a
//! failure.

use crate::error::{CliError, CliResult};
use crate::Cli;
use parser::Node;
use std::io::Read;

/// Turns data literal source into tagged JSON
#[derive(Debug, Clone, Default)]
pub struct Converter {
    /// Emit single-line JSON
    compact: bool,
    /// Dump tokens to stderr before parsing
    print_tokens: bool,
    /// Dump the AST to stderr after parsing
    print_ast: bool,
}

impl Converter {
    /// Create a converter with pretty output and no debug dumps
    ///
    /// # Example
    /// ```
    /// use lit_cli::Converter;
    ///
    /// let json = Converter::new().with_compact(true).convert_string("[1]").unwrap();
    /// assert_eq!(json, r#"[{"%k":"list","%v":[{"%k":"int","%v":1}]}]"#);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a converter from command line flags
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_compact(cli.compact)
            .with_print_tokens(cli.print_tokens)
            .with_print_ast(cli.print_ast)
    }

    /// Enable single-line output
    pub fn with_compact(mut self, enabled: bool) -> Self {
        self.compact = enabled;
        self
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Check if compact output is enabled
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Check if token printing is enabled
    pub fn is_print_tokens_enabled(&self) -> bool {
        self.print_tokens
    }

    /// Check if AST printing is enabled
    pub fn is_print_ast_enabled(&self) -> bool {
        self.print_ast
    }

    /// Convert a file
    ///
    /// # Errors
    /// Returns `CliError::ReadFile` if the file cannot be read and
    /// `CliError::Syntax` if it does not parse
    pub fn convert_file(&self, path: &str) -> CliResult<String> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_string(),
            source,
        })?;
        self.convert_string(&source)
    }

    /// Read all of `reader` and convert it
    pub fn convert_reader(&self, mut reader: impl Read) -> CliResult<String> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.convert_string(&source)
    }

    /// Convert a source string
    pub fn convert_string(&self, source: &str) -> CliResult<String> {
        let nodes = self.parse(source)?;
        self.to_json(&nodes)
    }

    /// Parse a source string, honouring the debug dump flags
    pub fn parse(&self, source: &str) -> CliResult<Vec<Node>> {
        if self.print_tokens {
            for token in parser::tokenize(source) {
                eprintln!("{}", token);
            }
        }

        let nodes = parser::parse(source)?;

        if self.print_ast {
            eprintln!("AST: {:#?}", nodes);
        }
        Ok(nodes)
    }

    /// Serialize nodes as a JSON array
    pub fn to_json(&self, nodes: &[Node]) -> CliResult<String> {
        let json = if self.compact {
            serde_json::to_string(nodes)?
        } else {
            serde_json::to_string_pretty(nodes)?
        };
        Ok(json)
    }

    /// Start the interactive session
    ///
    /// # Example
    /// ```no_run
    /// use lit_cli::Converter;
    ///
    /// Converter::new().repl().unwrap();
    /// ```
    pub fn repl(&self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
