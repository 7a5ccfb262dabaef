//! Contract compliance tests for bytecode_system
//! Verifies the textual bytecode format shared by compiler and VM

mod test_contract_compliance;
