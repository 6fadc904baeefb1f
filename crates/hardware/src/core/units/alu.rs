//! Arithmetic Logic Unit (ALU).
//!
//! Evaluates the binary operators and the complement on 16-bit machine words.
//! Every result is a `Word`, so the modulo-65536 wraparound the register file and
//! stack rely on is enforced here and nowhere else.

use crate::common::constants::Word;
use crate::isa::opcode::AluOp;

/// Arithmetic Logic Unit for word operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Evaluates `x op y`.
    ///
    /// `x` is the first operand (pushed earlier, or the destination register) and
    /// `y` the second. Shift amounts of 16 or more produce 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridvm_core::core::units::alu::Alu;
    /// use gridvm_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF, 2), 1);
    /// assert_eq!(Alu::execute(AluOp::LShift, 0x8001, 1), 2);
    /// assert_eq!(Alu::execute(AluOp::LessThan, 3, 4), 1);
    /// ```
    pub fn execute(op: AluOp, x: Word, y: Word) -> Word {
        match op {
            AluOp::Add => x.wrapping_add(y),
            AluOp::Mult => x.wrapping_mul(y),
            AluOp::And => x & y,
            AluOp::Or => x | y,
            AluOp::Xor => x ^ y,
            AluOp::LShift => x.checked_shl(u32::from(y)).unwrap_or(0),
            AluOp::RShift => x.checked_shr(u32::from(y)).unwrap_or(0),
            AluOp::Equals => Word::from(x == y),
            AluOp::LessThan => Word::from(x < y),
        }
    }

    /// Bitwise complement within 16 bits.
    pub const fn not(x: Word) -> Word {
        !x
    }
}
