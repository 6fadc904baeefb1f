//! Program Disassembler.
//!
//! Renders a decoded program back into assembly text for debug tracing, the CLI's
//! `disasm` command, and test diagnostics. Every line is accepted unchanged by
//! [`parse_program`](crate::sim::loader::parse_program), with the instruction index
//! kept in a trailing comment.
//!
//! # Usage
//!
//! ```
//! use gridvm_core::isa::disasm::disassemble;
//! use gridvm_core::isa::program::Program;
//!
//! let program = Program::from_triples([("CONST", 3, 7), ("PUSH", 3, 0)]).unwrap();
//! assert_eq!(disassemble(&program), "CONST 3 7 ; 0\nPUSH 3 0 ; 1\n");
//! ```

use std::fmt::Write;

use super::program::Program;

/// Disassembles a whole program, one instruction per line.
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for (index, inst) in program.iter().enumerate() {
        let _ = writeln!(out, "{inst} ; {index}");
    }
    out
}
