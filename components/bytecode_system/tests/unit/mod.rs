//! Unit tests for bytecode_system

mod test_chunk;
mod test_decoder;
mod test_opcode;
