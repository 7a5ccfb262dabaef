//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Compiler and virtual machine for the brick tape language
#[derive(Debug, Parser)]
#[command(name = "brick", version, about)]
pub struct Cli {
    /// Source (.bf) or bytecode (.bkb) file
    #[arg(required_unless_present = "repl")]
    pub file: Option<PathBuf>,

    /// Compile FILE to bytecode
    #[arg(short, long)]
    pub compile: bool,

    /// Run FILE; combined with -c, run the freshly compiled bytecode
    #[arg(short, long)]
    pub run: bool,

    /// Compile FILE, write the bytecode, then run it (same as -cr)
    #[arg(long)]
    pub compile_run: bool,

    /// Bytecode output path (defaults to FILE with a .bkb extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the bytecode text
    #[arg(long)]
    pub print_bytecode: bool,

    /// Print the tape and pointer after a run
    #[arg(long)]
    pub dump_tape: bool,

    /// Do not prompt before each input read
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Start the interactive REPL
    #[arg(long)]
    pub repl: bool,
}

/// Explicit log level
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Phase summaries
    Info,
    /// Pipeline details
    Debug,
    /// Every executed instruction
    Trace,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Log directive chosen from --log-level, --quiet and -v.
    pub fn log_directive(&self) -> &'static str {
        if let Some(level) = self.log_level {
            return level.as_directive();
        }
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Prompt printed before each input read.
    pub fn prompt(&self) -> Option<String> {
        if self.no_prompt {
            None
        } else {
            Some(interpreter::StdConsole::DEFAULT_PROMPT.to_string())
        }
    }
}
