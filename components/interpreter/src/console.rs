//! Character I/O for the input and output opcodes

use std::collections::VecDeque;
use std::io::{self, BufRead, BufWriter, Stdin, Stdout, Write};

use core_types::{BrickError, BrickResult, ErrorKind};

/// Source of input characters and sink of output characters.
///
/// The VM calls [`Console::read_char`] once per input repetition and
/// [`Console::write_char`] once per output repetition, in program order.
pub trait Console {
    /// Block until one character is available
    fn read_char(&mut self) -> BrickResult<char>;

    /// Emit one character
    fn write_char(&mut self, c: char) -> BrickResult<()>;

    /// Push buffered output to its destination
    fn flush(&mut self) -> BrickResult<()> {
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_char(&mut self) -> BrickResult<char> {
        (**self).read_char()
    }

    fn write_char(&mut self, c: char) -> BrickResult<()> {
        (**self).write_char(c)
    }

    fn flush(&mut self) -> BrickResult<()> {
        (**self).flush()
    }
}

/// Terminal console: one line of stdin per input character, buffered stdout.
#[derive(Debug)]
pub struct StdConsole {
    stdin: Stdin,
    stdout: BufWriter<Stdout>,
    prompt: Option<String>,
}

impl StdConsole {
    /// Prompt printed before each read.
    pub const DEFAULT_PROMPT: &'static str = "?";

    /// Create a console that prompts with `?`
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: BufWriter::new(io::stdout()),
            prompt: Some(Self::DEFAULT_PROMPT.to_string()),
        }
    }

    /// Replace the prompt; `None` disables it
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_char(&mut self) -> BrickResult<char> {
        if let Some(prompt) = &self.prompt {
            self.stdout
                .write_all(prompt.as_bytes())
                .map_err(output_failure)?;
        }
        self.flush()?;

        let mut line = String::new();
        let read = self
            .stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| invalid_input(format!("could not read input: {}", e)))?;
        if read == 0 {
            return Err(invalid_input("expected a character, got end of input"));
        }
        single_char(trim_line_ending(&line))
    }

    fn write_char(&mut self, c: char) -> BrickResult<()> {
        let mut buf = [0u8; 4];
        self.stdout
            .write_all(c.encode_utf8(&mut buf).as_bytes())
            .map_err(output_failure)
    }

    fn flush(&mut self) -> BrickResult<()> {
        self.stdout.flush().map_err(output_failure)
    }
}

/// In-memory console with scripted input and captured output.
///
/// # Examples
///
/// ```
/// use interpreter::{BufferedConsole, Console};
///
/// let mut console = BufferedConsole::new("ab");
/// assert_eq!(console.read_char().unwrap(), 'a');
/// console.write_char('z').unwrap();
/// assert_eq!(console.output(), "z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedConsole {
    input: VecDeque<char>,
    output: String,
}

impl BufferedConsole {
    /// Create a console that will supply the characters of `input` in order
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            output: String::new(),
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the console, returning the output
    pub fn into_output(self) -> String {
        self.output
    }

    /// Characters not yet read
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for BufferedConsole {
    fn read_char(&mut self) -> BrickResult<char> {
        self.input
            .pop_front()
            .ok_or_else(|| invalid_input("expected a character, input is exhausted"))
    }

    fn write_char(&mut self, c: char) -> BrickResult<()> {
        self.output.push(c);
        Ok(())
    }
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Accept a reply only when it is exactly one character.
fn single_char(reply: &str) -> BrickResult<char> {
    let mut chars = reply.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid_input(format!(
            "expected a character, got: {:?}",
            reply
        ))),
    }
}

fn invalid_input(message: impl Into<String>) -> BrickError {
    BrickError::new(ErrorKind::InvalidInputCharacter, message)
}

fn output_failure(e: io::Error) -> BrickError {
    BrickError::new(ErrorKind::OutputFailure, format!("could not write output: {}", e))
}
