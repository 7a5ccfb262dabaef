//! REPL (Read-Eval-Print Loop) implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;

/// Run the interactive REPL
///
/// Each complete entry is compiled and run on a fresh tape.
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("brick {}", env!("CARGO_PKG_VERSION"));
    println!("Type a program, .help for commands or .exit to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && trimmed.starts_with('.') {
                    if handle_repl_command(trimmed, runtime) == Command::Exit {
                        break;
                    }
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

                if !line_buffer.trim().is_empty() {
                    let _ = editor.add_history_entry(line_buffer.as_str());
                    if let Err(e) = evaluate(runtime, &line_buffer) {
                        eprintln!("{}", e.diagnostic());
                    }
                }
                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type .exit to quit");
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

fn evaluate(runtime: &Runtime, source: &str) -> CliResult<()> {
    let chunk = runtime.compile_source(source)?;
    runtime.execute(&chunk, runtime.console())?;
    println!();
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Continue,
    Exit,
}

fn handle_repl_command(command: &str, runtime: &mut Runtime) -> Command {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help      - Show this help message");
            println!("  .bytecode  - Toggle printing of compiled bytecode");
            println!("  .tape      - Toggle the tape dump after each run");
            println!("  .exit      - Exit the REPL");
        }
        ".bytecode" => {
            let enabled = !runtime.prints_bytecode();
            runtime.set_print_bytecode(enabled);
            println!("bytecode printing: {}", on_off(enabled));
        }
        ".tape" => {
            let enabled = !runtime.dumps_tape();
            runtime.set_dump_tape(enabled);
            println!("tape dump: {}", on_off(enabled));
        }
        ".exit" => return Command::Exit,
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
    Command::Continue
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// An entry is complete once every `[` has been closed.
///
/// A stray `]` also counts as complete so the compiler can report it.
fn is_input_complete(input: &str) -> bool {
    let mut depth: i64 = 0;
    for c in input.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
