//! Error Reporting Tests.

use gridvm_core::common::{LoadError, VmError};

#[test]
fn vm_error_messages_name_the_fault() {
    let halted = VmError::HaltedMachine { pc: 4, len: 4 };
    assert!(halted.to_string().starts_with("VM has halted"));

    let unknown = VmError::UnrecognizedInstruction {
        mnemonic: "DIV".into(),
    };
    assert_eq!(unknown.to_string(), "unrecognized instruction `DIV`");

    let underflow = VmError::StackUnderflow { addr: -1, len: 0 };
    assert!(underflow.to_string().contains("address -1"));

    let grid = VmError::GridOutOfBounds { x: 16, y: 2, size: 16 };
    assert!(grid.to_string().contains("(16, 2)"));

    let reg = VmError::RegisterOutOfRange { index: -3 };
    assert!(reg.to_string().contains("-3"));
}

#[test]
fn load_error_prefixes_line_number() {
    let err = LoadError::InvalidOperand {
        line: 12,
        token: "x".into(),
    };
    assert_eq!(err.to_string(), "line 12: invalid operand `x`");

    let err = LoadError::Instruction {
        line: 3,
        source: VmError::UnrecognizedInstruction {
            mnemonic: "JMP".into(),
        },
    };
    assert_eq!(err.to_string(), "line 3: unrecognized instruction `JMP`");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn vm_errors_compare_by_value() {
    let a = VmError::StackUnderflow { addr: 2, len: 1 };
    assert_eq!(a.clone(), a);
    assert_ne!(a, VmError::StackUnderflow { addr: 3, len: 1 });
}
