//! Runtime orchestration for brick programs
//!
//! The Runtime struct coordinates the components over files:
//! - compiler for source text
//! - BytecodeChunk for the bytecode file format
//! - VM for execution

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytecode_system::BytecodeChunk;
use core_types::{BrickError, ErrorKind};
use interpreter::{Console, ExecutionReport, StdConsole, VM};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Source file extension
pub const SOURCE_EXTENSION: &str = "bf";
/// Bytecode file extension
pub const BYTECODE_EXTENSION: &str = "bkb";

/// What to do with the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Source to bytecode file
    Compile,
    /// Execute a bytecode file
    Run,
    /// Compile, write the bytecode file, then execute it
    CompileRun,
}

impl Mode {
    /// Mode requested by explicit flags, if any.
    pub fn from_flags(compile: bool, run: bool) -> Option<Mode> {
        match (compile, run) {
            (true, true) => Some(Mode::CompileRun),
            (true, false) => Some(Mode::Compile),
            (false, true) => Some(Mode::Run),
            (false, false) => None,
        }
    }

    /// Mode implied by the file extension.
    pub fn infer(path: &Path) -> CliResult<Mode> {
        match extension(path) {
            Some(SOURCE_EXTENSION) => Ok(Mode::Compile),
            Some(BYTECODE_EXTENSION) => Ok(Mode::Run),
            _ => Err(CliError::InvalidExtension {
                path: path.to_path_buf(),
                expected: ".bf or .bkb",
            }),
        }
    }

    /// Resolve the mode for parsed arguments.
    pub fn for_cli(cli: &Cli, path: &Path) -> CliResult<Mode> {
        if cli.compile_run {
            return Ok(Mode::CompileRun);
        }
        match Mode::from_flags(cli.compile, cli.run) {
            Some(mode) => Ok(mode),
            None => Mode::infer(path),
        }
    }
}

/// Drives compilation and execution of files
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    /// Whether to print bytecode text
    print_bytecode: bool,
    /// Whether to print the tape after a run
    dump_tape: bool,
    /// Prompt before each input read
    prompt: Option<String>,
    /// Bytecode output path override
    output: Option<PathBuf>,
}

impl Runtime {
    /// Create a runtime that prompts with `?` and prints nothing extra
    ///
    /// # Example
    /// ```
    /// use brick_cli::Runtime;
    ///
    /// let runtime = Runtime::new();
    /// let chunk = runtime.compile_source("+++.").unwrap();
    /// assert_eq!(chunk.to_string(), "+3\"!");
    /// ```
    pub fn new() -> Self {
        Self {
            prompt: Some(StdConsole::DEFAULT_PROMPT.to_string()),
            ..Self::default()
        }
    }

    /// Build a runtime from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_print_bytecode(cli.print_bytecode)
            .with_dump_tape(cli.dump_tape)
            .with_prompt(cli.prompt())
            .with_output(cli.output.clone())
    }

    /// Enable bytecode printing
    pub fn with_print_bytecode(mut self, enabled: bool) -> Self {
        self.print_bytecode = enabled;
        self
    }

    /// Enable the tape dump after each run
    pub fn with_dump_tape(mut self, enabled: bool) -> Self {
        self.dump_tape = enabled;
        self
    }

    /// Set or clear the input prompt
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Override where compiled bytecode is written
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Whether bytecode printing is enabled
    pub fn prints_bytecode(&self) -> bool {
        self.print_bytecode
    }

    /// Whether the tape dump is enabled
    pub fn dumps_tape(&self) -> bool {
        self.dump_tape
    }

    /// Toggle bytecode printing
    pub fn set_print_bytecode(&mut self, enabled: bool) {
        self.print_bytecode = enabled;
    }

    /// Toggle the tape dump
    pub fn set_dump_tape(&mut self, enabled: bool) {
        self.dump_tape = enabled;
    }

    /// Terminal console configured with this runtime's prompt
    pub fn console(&self) -> StdConsole {
        StdConsole::new().with_prompt(self.prompt.clone())
    }

    /// Compile source text, printing the bytecode if enabled
    pub fn compile_source(&self, source: &str) -> CliResult<BytecodeChunk> {
        let chunk = compiler::compile(source)?;
        if self.print_bytecode {
            println!("{}", chunk);
        }
        Ok(chunk)
    }

    /// Where the bytecode for `source_path` is written
    pub fn bytecode_path(&self, source_path: &Path) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => source_path.with_extension(BYTECODE_EXTENSION),
        }
    }

    /// Compile a `.bf` file and write the bytecode file
    ///
    /// # Returns
    /// The path the bytecode was written to
    ///
    /// # Errors
    /// * `InvalidExtension` - the path does not end in `.bf`
    /// * `SourceUnavailable` - the file cannot be read
    /// * any compile error
    pub fn compile_file(&self, path: &Path) -> CliResult<PathBuf> {
        require_extension(path, SOURCE_EXTENSION, ".bf")?;
        let source = fs::read_to_string(path).map_err(|e| unavailable(path, e))?;
        let chunk = self.compile_source(&source)?;

        let target = self.bytecode_path(path);
        fs::write(&target, chunk.to_bytes()).map_err(|source| CliError::Io {
            path: target.clone(),
            source,
        })?;
        info!(
            source = %path.display(),
            target = %target.display(),
            instructions = chunk.instruction_count(),
            "compiled"
        );
        Ok(target)
    }

    /// Read and parse a `.bkb` file
    pub fn load_bytecode(&self, path: &Path) -> CliResult<BytecodeChunk> {
        require_extension(path, BYTECODE_EXTENSION, ".bkb")?;
        self.read_bytecode(path)
    }

    /// Read and parse bytecode from any path
    fn read_bytecode(&self, path: &Path) -> CliResult<BytecodeChunk> {
        let bytes = fs::read(path).map_err(|e| unavailable(path, e))?;
        let chunk = BytecodeChunk::from_bytes(&bytes)?;
        debug!(path = %path.display(), instructions = chunk.instruction_count(), "loaded bytecode");
        Ok(chunk)
    }

    /// Execute a chunk against `console`
    ///
    /// The console is handed back so callers can inspect captured output.
    pub fn execute<C: Console>(
        &self,
        chunk: &BytecodeChunk,
        console: C,
    ) -> CliResult<(ExecutionReport, C)> {
        self.execute_dumping_to(chunk, console, &mut io::stdout().lock())
    }

    /// Execute a chunk, writing the tape dump (if enabled) to `dump`
    ///
    /// The tape is only dumped after a successful run.
    fn execute_dumping_to<C: Console, W: Write>(
        &self,
        chunk: &BytecodeChunk,
        console: C,
        dump: &mut W,
    ) -> CliResult<(ExecutionReport, C)> {
        let mut vm = VM::new(console);
        let report = vm.execute(chunk)?;
        if self.dump_tape {
            writeln!(dump, "{}", vm.tape()).map_err(|e| {
                BrickError::new(
                    ErrorKind::OutputFailure,
                    format!("could not write the tape dump: {}", e),
                )
            })?;
        }
        info!(steps = report.steps, pointer = report.pointer, "program halted");
        Ok((report, vm.into_console()))
    }

    /// Run a `.bkb` file with the given console
    pub fn run_file_with<C: Console>(
        &self,
        path: &Path,
        console: C,
    ) -> CliResult<(ExecutionReport, C)> {
        let chunk = self.load_bytecode(path)?;
        if self.print_bytecode {
            println!("{}", chunk);
        }
        self.execute(&chunk, console)
    }

    /// Compile a `.bf` file, write its bytecode, then run that bytecode file
    pub fn compile_and_run_with<C: Console>(
        &self,
        path: &Path,
        console: C,
    ) -> CliResult<(ExecutionReport, C)> {
        let target = self.compile_file(path)?;
        // -o may name any extension
        let chunk = self.read_bytecode(&target)?;
        self.execute(&chunk, console)
    }

    /// Carry out `mode` on `path` using the terminal console
    pub fn dispatch(&self, mode: Mode, path: &Path) -> CliResult<()> {
        debug!(?mode, path = %path.display(), "dispatching");
        match mode {
            Mode::Compile => self.compile_file(path).map(|_| ()),
            Mode::Run => self.run_file_with(path, self.console()).map(|_| ()),
            Mode::CompileRun => self
                .compile_and_run_with(path, self.console())
                .map(|_| ()),
        }
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

fn require_extension(path: &Path, wanted: &str, expected: &'static str) -> CliResult<()> {
    if extension(path) == Some(wanted) {
        Ok(())
    } else {
        Err(CliError::InvalidExtension {
            path: path.to_path_buf(),
            expected,
        })
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> CliError {
    BrickError::new(
        ErrorKind::SourceUnavailable,
        format!("could not read '{}': {}", path.display(), err),
    )
    .into()
}
