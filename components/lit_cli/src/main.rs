//! lit2json
//!
//! Entry point for the data literal converter. Parses CLI arguments and
//! delegates to the Converter.

use clap::Parser as ClapParser;
use lit_cli::{Cli, CliError, CliResult, Converter};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let converter = Converter::from_cli(cli);

    if cli.repl {
        return converter.repl();
    }

    let json = if let Some(code) = &cli.eval {
        converter.convert_string(code)?
    } else if let Some(file) = &cli.file {
        converter.convert_file(file)?
    } else {
        converter.convert_reader(std::io::stdin().lock())?
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json)).map_err(|source| CliError::WriteFile {
                path: path.clone(),
                source,
            })?
        }
        None => println!("{}", json),
    }
    Ok(())
}
