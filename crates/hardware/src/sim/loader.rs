//! Assembly and Grid Loader.
//!
//! This module turns text into the values a machine is built from. It performs:
//! 1. **Line parsing:** Strips `;` comments, splits on whitespace, decodes the mnemonic and
//!    up to two integer operands. Missing operands default to 0; tokens after the second
//!    operand are ignored.
//! 2. **Program loading:** Parses a whole source text, skipping blank and comment-only lines.
//! 3. **Grid loading:** Parses whitespace-separated rows of integers into a square grid,
//!    zero-filling short rows and missing rows.

use std::fs;
use std::path::Path;

use crate::common::constants::Word;
use crate::common::error::LoadError;
use crate::core::arch::grid::Grid;
use crate::isa::instruction::Instruction;
use crate::isa::program::Program;

/// Character that starts a comment running to the end of the line.
const COMMENT_CHAR: char = ';';

/// Parses one line of assembly.
///
/// Returns `Ok(None)` for blank and comment-only lines. `line` is the 1-based line
/// number reported in errors.
///
/// # Errors
///
/// Returns [`LoadError::Instruction`] for an unknown mnemonic and
/// [`LoadError::InvalidOperand`] for an operand that is not an `i32`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Instruction>, LoadError> {
    let code = strip_comment(text);
    let mut tokens = code.split_whitespace();
    let Some(mnemonic) = tokens.next() else {
        return Ok(None);
    };

    let arg1 = parse_operand(line, tokens.next())?;
    let arg2 = parse_operand(line, tokens.next())?;

    Instruction::decode(mnemonic, arg1, arg2)
        .map(Some)
        .map_err(|source| LoadError::Instruction { line, source })
}

/// Parses an assembly source text into a program.
///
/// # Errors
///
/// Returns the first error raised by [`parse_line`].
pub fn parse_program(source: &str) -> Result<Program, LoadError> {
    let mut instructions = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        if let Some(inst) = parse_line(idx + 1, text)? {
            instructions.push(inst);
        }
    }
    Ok(Program::new(instructions))
}

/// Parses a grid text into a `size`x`size` grid.
///
/// Each non-blank line is a row of whitespace-separated values; `;` comments are
/// allowed.
///
/// # Errors
///
/// Returns [`LoadError::InvalidGridValue`] for a value outside `0..=65535` and
/// [`LoadError::Grid`] when the text has more than `size` rows or columns.
pub fn parse_grid(source: &str, size: usize) -> Result<Grid, LoadError> {
    let mut grid = Grid::new(size);
    let rows = source
        .lines()
        .enumerate()
        .map(|(idx, text)| (idx + 1, strip_comment(text)))
        .filter(|(_, code)| !code.is_empty());

    for (y, (line, code)) in rows.enumerate() {
        for (x, token) in code.split_whitespace().enumerate() {
            let val: Word = token.parse().map_err(|_| LoadError::InvalidGridValue {
                line,
                token: token.to_owned(),
            })?;
            grid.write(x, y, val)
                .map_err(|source| LoadError::Grid { line, source })?;
        }
    }
    Ok(grid)
}

/// Reads and parses an assembly file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    parse_program(&read(path.as_ref())?)
}

/// Reads and parses a grid file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_grid`].
pub fn load_grid(path: impl AsRef<Path>, size: usize) -> Result<Grid, LoadError> {
    parse_grid(&read(path.as_ref())?, size)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn strip_comment(text: &str) -> &str {
    text.split(COMMENT_CHAR).next().unwrap_or_default().trim()
}

fn parse_operand(line: usize, token: Option<&str>) -> Result<i32, LoadError> {
    token.map_or(Ok(0), |token| {
        token.parse().map_err(|_| LoadError::InvalidOperand {
            line,
            token: token.to_owned(),
        })
    })
}
