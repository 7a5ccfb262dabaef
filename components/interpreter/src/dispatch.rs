//! Dispatch loop for bytecode execution
//!
//! Handles individual opcode execution.

use bytecode_system::{Instruction, Opcode};
use core_types::{BrickError, BrickResult, Cell, ErrorKind, Position};
use tracing::{debug, trace};

use crate::console::Console;
use crate::context::ExecutionContext;
use crate::tape::Tape;

/// Dispatch handler for executing bytecode
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// Memory tape for the current run
    tape: Tape,
}

impl Dispatcher {
    /// Create a new dispatcher with a fresh tape
    pub fn new() -> Self {
        Self { tape: Tape::new() }
    }

    /// The tape as left by the last run
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Mutable access to the tape, for seeding cells before a run
    pub fn tape_mut(&mut self) -> &mut Tape {
        &mut self.tape
    }

    /// Execute bytecode in the given context until a halt instruction
    ///
    /// # Arguments
    ///
    /// * `ctx` - The execution context with bytecode and cursor
    /// * `console` - Character I/O for input and output opcodes
    pub fn execute<C: Console>(
        &mut self,
        ctx: &mut ExecutionContext,
        console: &mut C,
    ) -> BrickResult<()> {
        loop {
            let (index, inst) = ctx.fetch()?;
            trace!(
                index,
                instruction = %inst,
                pointer = self.tape.pointer(),
                "dispatch"
            );

            if inst.opcode == Opcode::Halt {
                debug!(
                    steps = ctx.steps(),
                    pointer = self.tape.pointer(),
                    "halted"
                );
                return Ok(());
            }
            self.step(&inst, index, ctx, console)
                .map_err(|e| locate(e, index))?;
        }
    }

    /// Execute one non-halt instruction
    fn step<C: Console>(
        &mut self,
        inst: &Instruction,
        index: usize,
        ctx: &mut ExecutionContext,
        console: &mut C,
    ) -> BrickResult<()> {
        match inst.opcode {
            Opcode::Seek => {
                let target = address(required(inst, index)?, index)?;
                self.tape.seek(target)?;
            }
            Opcode::Load => {
                let value = required(inst, index)?;
                let target = self.target(inst, index)?;
                self.tape.set(target, Cell::load(value))?;
            }
            Opcode::Add => {
                let amount = count(inst);
                let target = self.target(inst, index)?;
                let cell = self.tape.cell_mut(target)?;
                *cell = cell.add(amount);
            }
            Opcode::Sub => {
                let amount = count(inst);
                let target = self.target(inst, index)?;
                let cell = self.tape.cell_mut(target)?;
                *cell = cell.sub(amount);
            }
            Opcode::Input => {
                let target = self.target(inst, index)?;
                // Every repetition overwrites the same cell.
                for _ in 0..count(inst) {
                    let c = console.read_char()?;
                    self.tape.set(target, Cell::load(u64::from(u32::from(c))))?;
                }
            }
            Opcode::Output => {
                let target = self.target(inst, index)?;
                for _ in 0..count(inst) {
                    let cell = self.tape.get(target)?;
                    console.write_char(cell.as_char())?;
                }
            }
            Opcode::JumpIfNonZero => {
                let target = required(inst, index)?;
                if !self.tape.current()?.is_zero() {
                    ctx.jump(jump_target(target));
                }
            }
            Opcode::JumpIfZero => {
                let target = required(inst, index)?;
                if self.tape.current()?.is_zero() {
                    ctx.jump(jump_target(target));
                }
            }
            Opcode::MoveRight => {
                let delta = address(count(inst), index)?;
                self.tape.shift(delta)?;
            }
            Opcode::MoveLeft => {
                let delta = address(count(inst), index)?;
                self.tape.shift(-delta)?;
            }
            Opcode::Halt => {}
        }
        Ok(())
    }

    /// operand2 for opcodes that take an address, otherwise the pointer
    fn target(&self, inst: &Instruction, index: usize) -> BrickResult<i64> {
        match inst.operand2 {
            Some(explicit) if inst.opcode.accepts_address() => address(explicit, index),
            _ => Ok(self.tape.pointer()),
        }
    }
}

/// Attach the failing instruction to errors raised below the dispatcher.
fn locate(error: BrickError, index: usize) -> BrickError {
    if error.position.is_some() {
        error
    } else {
        error.at(Position::Instruction(index))
    }
}

/// Repeat count, defaulting to 1
fn count(inst: &Instruction) -> u64 {
    inst.operand().unwrap_or(1)
}

/// operand1 of an opcode that has no default
fn required(inst: &Instruction, index: usize) -> BrickResult<u64> {
    inst.operand1.ok_or_else(|| {
        BrickError::new(
            ErrorKind::MissingOperand,
            format!("instruction '{}' needs an operand", inst.opcode),
        )
        .at(Position::Instruction(index))
    })
}

fn address(value: u64, index: usize) -> BrickResult<i64> {
    i64::try_from(value).map_err(|_| {
        BrickError::new(
            ErrorKind::AddressOutOfRange,
            format!("{} is outside the addressable tape", value),
        )
        .at(Position::Instruction(index))
    })
}

/// Targets beyond `usize` are kept out of range so the fetch reports them.
fn jump_target(target: u64) -> usize {
    usize::try_from(target).unwrap_or(usize::MAX)
}
