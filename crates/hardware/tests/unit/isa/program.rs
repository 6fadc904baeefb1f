//! Program Tests.

use gridvm_core::common::VmError;
use gridvm_core::isa::{Instruction, Opcode, Program};

#[test]
fn from_triples_decodes_in_order() {
    let program = Program::from_triples([("CONST", 3, 7), ("PUSH", 3, 0), ("NOOP", 0, 0)]).unwrap();

    assert_eq!(program.len(), 3);
    assert!(!program.is_empty());
    assert_eq!(program[0], Instruction::new(Opcode::Const, 3, 7));
    assert_eq!(program.get(1), Some(&Instruction::new(Opcode::Push, 3, 0)));
    assert_eq!(program.get(3), None);

    let opcodes: Vec<Opcode> = program.iter().map(|inst| inst.opcode).collect();
    assert_eq!(opcodes, [Opcode::Const, Opcode::Push, Opcode::Noop]);
}

#[test]
fn from_triples_stops_at_unknown_mnemonic() {
    let err = Program::from_triples([("CONST", 3, 7), ("HALT", 0, 0)]).unwrap_err();
    assert_eq!(
        err,
        VmError::UnrecognizedInstruction {
            mnemonic: "HALT".into()
        }
    );
}

#[test]
fn empty_program() {
    let program = Program::default();
    assert!(program.is_empty());
    assert!(program.as_slice().is_empty());
}

#[test]
fn instruction_display() {
    let inst = Instruction::decode("JUMPIF", 3, -4).unwrap();
    assert_eq!(inst.to_string(), "JUMPIF 3 -4");
}
