//! Register-Operand Dialect Tests.
//!
//! Operands name registers: `CONST r k` loads `k`, binary operators compute
//! `reg[r] op reg[s]` into `reg[r]`, `INPUT`/`OUTPUT` take coordinates from `reg[r]`
//! and `reg[s]`.

use gridvm_core::common::VmError;
use gridvm_core::isa::{AluOp, Instruction, Opcode};
use gridvm_core::Grid;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;

#[test]
fn const_then_push() {
    let mut ctx = TestContext::register(&[("CONST", 3, 7), ("PUSH", 3, 0)]);
    ctx.run();

    assert_eq!(ctx.reg(3), 7);
    assert_eq!(ctx.stack_values(), vec![7]);
    assert_eq!(ctx.pc(), 2);
    assert!(!ctx.vm.is_running());
}

#[rstest]
#[case(0, 0)]
#[case(65535, 65535)]
#[case(65536, 0)]
#[case(-1, 0xFFFF)]
#[case(70000, 4464)]
fn const_wraps_immediate(#[case] k: i32, #[case] expected: u16) {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("CONST", 4, k);
    assert_eq!(ctx.reg(4), expected);
}

#[test]
fn const_into_pc_jumps() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("CONST", 0, 40);
    assert_eq!(ctx.pc(), 40);
}

#[test]
fn output_writes_io_register_at_coordinates() {
    let mut ctx = TestContext::register(&[
        ("CONST", 2, 42),
        ("CONST", 3, 2),
        ("CONST", 4, 3),
        ("OUTPUT", 3, 4),
    ]);
    ctx.run();

    assert_eq!(ctx.output(2, 3), 42);
    assert_eq!(ctx.output_nonzero(), 1);
}

#[test]
fn input_reads_into_io_register() {
    let mut input = Grid::new(16);
    input.write(1, 2, 99).unwrap();
    let mut ctx = TestContext::register(&[("CONST", 3, 1), ("CONST", 4, 2), ("INPUT", 3, 4)])
        .with_input(input);
    ctx.run();

    assert_eq!(ctx.reg(2), 99);
    assert_eq!(ctx.output_nonzero(), 0);
}

#[test]
fn output_out_of_bounds_leaves_grid_and_state_unchanged() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("CONST", 2, 5);
    ctx.exec("CONST", 3, 16);
    let before = ctx.vm.snapshot();

    assert_eq!(
        ctx.try_exec("OUTPUT", 3, 0),
        Err(VmError::GridOutOfBounds { x: 16, y: 0, size: 16 })
    );
    assert_eq!(ctx.vm.snapshot(), before);
    assert_eq!(ctx.output_nonzero(), 0);
}

#[test]
fn input_out_of_bounds() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("CONST", 4, 20);
    assert_eq!(
        ctx.try_exec("INPUT", 0, 4).map(|_| ()),
        Err(VmError::GridOutOfBounds { x: 1, y: 20, size: 16 })
    );
}

#[rstest]
#[case::add(AluOp::Add, 0xFFFF, 2, 1)]
#[case::mult(AluOp::Mult, 300, 300, 24464)]
#[case::and(AluOp::And, 12, 10, 8)]
#[case::or(AluOp::Or, 12, 10, 14)]
#[case::xor(AluOp::Xor, 12, 10, 6)]
#[case::lshift(AluOp::LShift, 3, 2, 12)]
#[case::rshift(AluOp::RShift, 0x100, 4, 0x10)]
#[case::equals(AluOp::Equals, 9, 9, 1)]
#[case::less_than(AluOp::LessThan, 3, 4, 1)]
#[case::less_than_reversed(AluOp::LessThan, 4, 3, 0)]
fn binary_operator_writes_first_operand(
    #[case] op: AluOp,
    #[case] x: u16,
    #[case] y: u16,
    #[case] expected: u16,
) {
    let mut ctx = TestContext::register(&[]);
    ctx.set_reg(3, x);
    ctx.set_reg(4, y);
    let _ = ctx
        .vm
        .step_with(Instruction::new(Opcode::Alu(op), 3, 4))
        .unwrap();

    assert_eq!(ctx.reg(3), expected);
    assert_eq!(ctx.reg(4), y);
    assert!(ctx.stack_values().is_empty());
}

#[test]
fn binary_operator_on_same_register() {
    let mut ctx = TestContext::register(&[]);
    ctx.set_reg(5, 21);
    ctx.exec("ADD", 5, 5);
    assert_eq!(ctx.reg(5), 42);
}

#[test]
fn not_complements_in_place() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("CONST", 3, 0);
    ctx.exec("NOT", 3, 0);
    assert_eq!(ctx.reg(3), 0xFFFF);
    ctx.exec("NOT", 3, 0);
    assert_eq!(ctx.reg(3), 0);
}

#[test]
fn copy_moves_between_registers() {
    let mut ctx = TestContext::register(&[]);
    ctx.set_reg(6, 1234);
    ctx.exec("COPY", 2, 6);
    assert_eq!(ctx.reg(2), 1234);
    assert_eq!(ctx.reg(6), 1234);
}

#[test]
fn copy_to_itself_only_advances_pc() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("CONST", 3, 9);
    let mut expected = ctx.vm.snapshot();
    expected.registers_mut().set_pc(2);

    ctx.exec("COPY", 3, 3);
    assert_eq!(ctx.vm.snapshot(), expected);
}

#[test]
fn jumpif_taken_on_zero() {
    let mut ctx = TestContext::register(&[("CONST", 3, 5), ("CONST", 4, 0), ("JUMPIF", 3, 4)]);
    ctx.run();
    assert_eq!(ctx.pc(), 5);
}

#[test]
fn jumpif_falls_through_on_nonzero() {
    let mut ctx = TestContext::register(&[
        ("CONST", 3, 5),
        ("CONST", 4, 1),
        ("JUMPIF", 3, 4),
        ("CONST", 6, 77),
    ]);
    ctx.run();
    assert_eq!(ctx.reg(6), 77);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn load_and_store_are_relative_to_base_of_stack() {
    let mut ctx = TestContext::register(&[]);
    for val in [10, 20, 30] {
        ctx.exec("CONST", 3, val);
        ctx.exec("PUSH", 3, 0);
    }

    ctx.exec("CONST", 4, 1);
    ctx.exec("LOAD", 5, 4);
    assert_eq!(ctx.reg(5), 20);

    ctx.exec("CONST", 6, 77);
    ctx.exec("STORE", 6, 4);
    assert_eq!(ctx.stack_values(), vec![10, 77, 30]);

    // Moving the base shifts every relative address.
    ctx.exec("CONST", 1, 2);
    ctx.exec("CONST", 4, 0);
    ctx.exec("LOAD", 5, 4);
    assert_eq!(ctx.reg(5), 30);
}

#[test]
fn load_past_top_of_stack_underflows() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("PUSH", 3, 0);
    ctx.exec("CONST", 4, 5);
    assert_eq!(
        ctx.try_exec("LOAD", 5, 4).map(|_| ()),
        Err(VmError::StackUnderflow { addr: 5, len: 1 })
    );
    assert_eq!(
        ctx.try_exec("STORE", 5, 4).map(|_| ()),
        Err(VmError::StackUnderflow { addr: 5, len: 1 })
    );
}

#[test]
fn pop_from_empty_stack_leaves_state_unchanged() {
    let mut ctx = TestContext::register(&[("POP", 0, 0)]);
    let before = ctx.vm.snapshot();

    assert_eq!(
        ctx.try_run(),
        Err(VmError::StackUnderflow { addr: -1, len: 0 })
    );
    assert_eq!(ctx.vm.snapshot(), before);
    assert_eq!(ctx.pc(), 0);
}

#[rstest]
#[case("CONST", 8, 1, 8)]
#[case("PUSH", -1, 0, -1)]
#[case("COPY", 3, 9, 9)]
#[case("ADD", 3, 100, 100)]
#[case("OUTPUT", -2, 0, -2)]
fn register_operand_out_of_range(
    #[case] mnemonic: &str,
    #[case] r: i32,
    #[case] s: i32,
    #[case] index: i64,
) {
    let mut ctx = TestContext::register(&[]);
    let before = ctx.vm.snapshot();
    assert_eq!(
        ctx.try_exec(mnemonic, r, s).map(|_| ()),
        Err(VmError::RegisterOutOfRange { index })
    );
    assert_eq!(ctx.vm.snapshot(), before);
}

#[test]
fn push_and_pop_track_top_of_stack() {
    let mut ctx = TestContext::register(&[]);
    ctx.exec("PUSH", 0, 0);
    ctx.exec("PUSH", 0, 0);
    assert_eq!(ctx.vm.state().top_of_stack(), 2);
    // PUSH 0 pushes the already-incremented PC.
    assert_eq!(ctx.stack_values(), vec![1, 2]);
    ctx.exec("POP", 7, 0);
    assert_eq!(ctx.vm.state().top_of_stack(), 1);
    assert_eq!(ctx.reg(7), 2);
}
