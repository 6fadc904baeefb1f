


/// Register-operand dialect semantics.
pub mod register_dialect;
