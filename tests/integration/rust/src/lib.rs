//! Integration test suite for the brick toolchain
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

use std::collections::{HashMap, VecDeque};

use core_types::Cell;

/// Re-export components for test convenience
pub mod components {
    pub use brick_cli;
    pub use bytecode_system;
    pub use compiler;
    pub use core_types;
    pub use interpreter;
}

/// Reference interpretation of source text, symbol by symbol.
///
/// Uses the same cell normalization as the VM, so compiled programs must
/// produce identical output. Panics on unbalanced brackets or missing input.
pub fn interpret_source(source: &str, input: &str) -> String {
    let program: Vec<char> = source.chars().collect();
    let mut partner = HashMap::new();
    let mut open = Vec::new();
    for (i, c) in program.iter().enumerate() {
        match c {
            '[' => open.push(i),
            ']' => {
                let j = open.pop().expect("balanced brackets");
                partner.insert(i, j);
                partner.insert(j, i);
            }
            _ => {}
        }
    }

    let mut tape: HashMap<i64, Cell> = HashMap::new();
    let mut input: VecDeque<char> = input.chars().collect();
    let mut output = String::new();
    let mut pointer = 0i64;
    let mut pc = 0usize;

    while pc < program.len() {
        let cell = tape.entry(pointer).or_default();
        match program[pc] {
            '+' => *cell = cell.add(1),
            '-' => *cell = cell.sub(1),
            '>' => pointer += 1,
            '<' => pointer -= 1,
            '.' => output.push(cell.as_char()),
            ',' => {
                let c = input.pop_front().expect("enough input");
                *cell = Cell::load(u64::from(u32::from(c)));
            }
            '[' if cell.is_zero() => pc = partner[&pc],
            ']' if !cell.is_zero() => pc = partner[&pc],
            _ => {}
        }
        pc += 1;
    }
    output
}
