//! Terminal errors of the pipeline and their process exit codes.

use crate::catalog::OperandKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad command line.
    Usage(String),
    /// Standard input could not be read.
    Input(String),
    /// The document could not be serialized or written.
    Output(String),
    /// Missing or malformed `.IPPcode23` header. `found` is the offending
    /// line, or `None` when the source has no header candidate at all.
    Header { line_no: usize, found: Option<String> },
    UnknownOpcode { line_no: usize, opcode: String },
    Arity {
        line_no: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },
    /// `position` is 1-based, matching the `argN` element index.
    OperandSyntax {
        line_no: usize,
        opcode: &'static str,
        position: usize,
        expected: OperandKind,
        token: String,
    },
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 10,
            Error::Input(_) => 11,
            Error::Output(_) => 12,
            Error::Header { .. } => 21,
            Error::UnknownOpcode { .. } => 22,
            Error::Arity { .. } | Error::OperandSyntax { .. } => 23,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(msg) => write!(f, "usage: {}", msg),
            Error::Input(msg) => write!(f, "cannot read input: {}", msg),
            Error::Output(msg) => write!(f, "cannot write output: {}", msg),
            Error::Header { found: None, .. } => {
                write!(f, "missing .IPPcode23 header")
            }
            Error::Header {
                line_no,
                found: Some(text),
            } => write!(
                f,
                "line {}: expected .IPPcode23 header, found '{}'",
                line_no, text
            ),
            Error::UnknownOpcode { line_no, opcode } => {
                write!(f, "line {}: unknown opcode '{}'", line_no, opcode)
            }
            Error::Arity {
                line_no,
                opcode,
                expected,
                found,
            } => write!(
                f,
                "line {}: {} takes {} operand(s), found {}",
                line_no, opcode, expected, found
            ),
            Error::OperandSyntax {
                line_no,
                opcode,
                position,
                expected,
                token,
            } => write!(
                f,
                "line {}: {} operand {}: '{}' is not a valid {}",
                line_no, opcode, position, token, expected
            ),
        }
    }
}

impl std::error::Error for Error {}
