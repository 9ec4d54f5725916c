//! REPL (Read-Eval-Print Loop) implementation

use crate::converter::Converter;
use crate::error::{CliError, CliResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

/// Run the interactive session
///
/// Every complete entry is parsed on its own and printed as JSON. Syntax
/// errors are reported and the session carries on with the next entry.
///
/// # Arguments
/// * `converter` - The Converter used for every entry
///
/// # Returns
/// `Ok(())` when the session exits normally
pub fn run_repl(converter: &Converter) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("lit2json {}", env!("CARGO_PKG_VERSION"));
    println!("Type data literals, '.help' for help or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed);
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }
                in_multiline = false;

                let _ = editor.add_history_entry(line_buffer.as_str());

                match converter.convert_string(&line_buffer) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("{}", e),
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str) {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .clear    - Clear the screen");
            println!("  .exit     - Exit the REPL");
            println!("  exit      - Exit the REPL");
            println!("  quit      - Exit the REPL");
        }
        ".clear" => {
            if let Err(e) = clear_screen(&mut io::stdout()) {
                eprintln!("error: {}", e);
            }
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// Write the ANSI clear-screen sequence and flush it
fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x1B[2J\x1B[1;1H")?;
    out.flush()
}

/// Check if the input appears to be complete
///
/// Counts `[`/`]` and `{`/`}` outside of `#` comments. An entry with more
/// closers than openers is complete too, so the parser can report it.
fn is_input_complete(input: &str) -> bool {
    let mut depth: i64 = 0;

    for line in input.lines() {
        let code = line.split('#').next().unwrap_or("");
        for c in code.chars() {
            match c {
                '[' | '{' => depth += 1,
                ']' | '}' => depth -= 1,
                _ => {}
            }
        }
    }

    depth <= 0
}
