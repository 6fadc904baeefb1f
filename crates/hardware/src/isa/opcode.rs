//! Opcode definitions.
//!
//! The instruction set is closed: every opcode is a variant of [`Opcode`], and the
//! nine binary operators share the [`Opcode::Alu`] variant through [`AluOp`]. Matching
//! on `Opcode` is therefore exhaustive at compile time.

use std::fmt;
use std::str::FromStr;

use crate::common::error::VmError;
use crate::core::vm::operands::Dialect;

/// Binary operators evaluated by the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AluOp {
    /// Addition modulo 65536.
    Add,
    /// Multiplication modulo 65536.
    Mult,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Left shift, discarding bits shifted past bit 15.
    LShift,
    /// Logical right shift.
    RShift,
    /// 1 if the operands are equal, else 0.
    Equals,
    /// 1 if the first operand is less than the second, else 0.
    LessThan,
}

impl AluOp {
    /// Every ALU operator, in mnemonic order of the instruction set.
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Mult,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::LShift,
        Self::RShift,
        Self::Equals,
        Self::LessThan,
    ];

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mult => "MULT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::LShift => "LSHIFT",
            Self::RShift => "RSHIFT",
            Self::Equals => "EQUALS",
            Self::LessThan => "LESSTHAN",
        }
    }
}

/// Operation tag of one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opcode {
    /// Does nothing beyond advancing the program counter.
    Noop,
    /// Load an immediate.
    Const,
    /// Push a register.
    Push,
    /// Pop into a register.
    Pop,
    /// Read a stack slot relative to the base-of-stack register.
    Load,
    /// Write a stack slot relative to the base-of-stack register.
    Store,
    /// Copy one register into another.
    Copy,
    /// Read an input grid cell into the I/O register.
    Input,
    /// Write the I/O register to an output grid cell.
    Output,
    /// Jump to the address held in a register when the condition is zero.
    JumpIf,
    /// Bitwise complement.
    Not,
    /// Binary operator.
    Alu(AluOp),
}

impl Opcode {
    /// Every opcode of the instruction set.
    pub const ALL: [Self; 20] = [
        Self::Noop,
        Self::Const,
        Self::Push,
        Self::Pop,
        Self::Load,
        Self::Store,
        Self::Copy,
        Self::Input,
        Self::Output,
        Self::JumpIf,
        Self::Alu(AluOp::Add),
        Self::Alu(AluOp::Mult),
        Self::Alu(AluOp::And),
        Self::Alu(AluOp::Or),
        Self::Alu(AluOp::Xor),
        Self::Alu(AluOp::LShift),
        Self::Alu(AluOp::RShift),
        Self::Not,
        Self::Alu(AluOp::Equals),
        Self::Alu(AluOp::LessThan),
    ];

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Noop => "NOOP",
            Self::Const => "CONST",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Copy => "COPY",
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::JumpIf => "JUMPIF",
            Self::Not => "NOT",
            Self::Alu(op) => op.mnemonic(),
        }
    }

    /// Net change in stack length caused by one successful execution in `dialect`.
    ///
    /// In the register dialect only `PUSH` and `POP` touch the stack.
    pub const fn stack_delta(self, dialect: Dialect) -> i8 {
        match dialect {
            Dialect::Stack => match self {
                Self::Const | Self::Push => 1,
                Self::Pop | Self::JumpIf | Self::Alu(_) => -1,
                Self::Input | Self::Output => -2,
                Self::Noop | Self::Load | Self::Store | Self::Copy | Self::Not => 0,
            },
            Dialect::Register => match self {
                Self::Push => 1,
                Self::Pop => -1,
                _ => 0,
            },
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = VmError;

    /// Decodes an upper-case mnemonic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| VmError::UnrecognizedInstruction {
                mnemonic: s.to_owned(),
            })
    }
}
