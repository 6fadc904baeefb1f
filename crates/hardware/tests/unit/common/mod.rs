/// Error messages and equality.
pub mod error;
