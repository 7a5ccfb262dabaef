//! Virtual Machine for bytecode execution
//!
//! Main entry point for executing brick bytecode.

use bytecode_system::BytecodeChunk;
use core_types::BrickResult;
use tracing::debug;

use crate::console::Console;
use crate::context::ExecutionContext;
use crate::dispatch::Dispatcher;
use crate::tape::Tape;

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Instructions executed, including the halt
    pub steps: u64,
    /// Pointer position at halt
    pub pointer: i64,
}

/// Virtual Machine for executing brick bytecode
///
/// Each call to [`VM::execute`] runs on a fresh tape. The tape of the last
/// run stays available through [`VM::tape`] until the next one starts.
#[derive(Debug)]
pub struct VM<C: Console> {
    /// Dispatcher for bytecode execution
    dispatcher: Dispatcher,
    /// Character I/O
    console: C,
}

impl<C: Console> VM<C> {
    /// Create a new VM instance
    pub fn new(console: C) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            console,
        }
    }

    /// Execute a bytecode chunk until it halts
    ///
    /// # Arguments
    ///
    /// * `chunk` - The bytecode chunk to execute
    ///
    /// # Returns
    ///
    /// * `Ok(ExecutionReport)` - Execution reached a halt instruction
    /// * `Err(BrickError)` - A fatal condition stopped execution
    ///
    /// # Example
    ///
    /// ```
    /// use interpreter::{BufferedConsole, VM};
    /// use bytecode_system::BytecodeChunk;
    ///
    /// let chunk: BytecodeChunk = "+3\"!".parse().unwrap();
    /// let mut vm = VM::new(BufferedConsole::default());
    ///
    /// let report = vm.execute(&chunk).unwrap();
    /// assert_eq!(report.steps, 3);
    /// assert_eq!(vm.console().output(), "\u{3}");
    /// ```
    pub fn execute(&mut self, chunk: &BytecodeChunk) -> BrickResult<ExecutionReport> {
        self.dispatcher = Dispatcher::new();
        self.run(ExecutionContext::new(chunk.clone()))
    }

    /// Execute a chunk on a tape prepared by the caller
    pub fn execute_with_tape(
        &mut self,
        chunk: &BytecodeChunk,
        tape: Tape,
    ) -> BrickResult<ExecutionReport> {
        self.dispatcher = Dispatcher::new();
        *self.dispatcher.tape_mut() = tape;
        self.run(ExecutionContext::new(chunk.clone()))
    }

    fn run(&mut self, mut ctx: ExecutionContext) -> BrickResult<ExecutionReport> {
        debug!(
            instructions = ctx.bytecode.instruction_count(),
            "starting execution"
        );
        let result = self.dispatcher.execute(&mut ctx, &mut self.console);
        // Output produced before a failure is still delivered.
        let flushed = self.console.flush();
        result?;
        flushed?;

        Ok(ExecutionReport {
            steps: ctx.steps(),
            pointer: self.dispatcher.tape().pointer(),
        })
    }

    /// The tape as left by the last run
    pub fn tape(&self) -> &Tape {
        self.dispatcher.tape()
    }

    /// The console
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Consume the VM, returning its console
    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console + Default> Default for VM<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
