//! Lexical grammars for the four operand kinds.
//!
//! Each parser takes one whitespace-free token and either returns its typed
//! payload or a short reason for rejecting it.

use crate::catalog::OperandKind;
use crate::ir::{Constant, DataType, Operand, Scope, Symbol, VarRef};
use regex::Regex;
use std::sync::LazyLock;

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z$&%*!?_-][a-zA-Z0-9_$&%*!?]*$").unwrap());
static RE_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap()
});
static RE_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\\[0-9]{3}|[^#\s\\\x00-\x1F])*$").unwrap());

pub type Reject = &'static str;

pub fn is_identifier(text: &str) -> bool {
    RE_IDENTIFIER.is_match(text)
}

/// Decodes `\ddd` escapes. Returns `None` for a malformed escape.
pub fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let digits: String = chars.by_ref().take(3).collect();
        if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let code: u32 = digits.parse().ok()?;
        out.push(char::from_u32(code)?);
    }
    Some(out)
}

/// `GF@name`, `LF@name` or `TF@name`.
pub fn parse_variable(token: &str) -> Result<VarRef, Reject> {
    let (tag, name) = token.split_once('@').ok_or("missing '@'")?;
    let scope = Scope::from_tag(tag).ok_or("unknown frame scope")?;
    if !is_identifier(name) {
        return Err("malformed identifier");
    }
    Ok(VarRef {
        scope,
        name: name.to_string(),
    })
}

fn parse_constant(ty: DataType, value: &str) -> Result<Constant, Reject> {
    match ty {
        DataType::Int => {
            if RE_INT.is_match(value) {
                Ok(Constant::Int {
                    raw: value.to_string(),
                })
            } else {
                Err("malformed int literal")
            }
        }
        DataType::Bool => match value {
            "true" => Ok(Constant::Bool { value: true }),
            "false" => Ok(Constant::Bool { value: false }),
            _ => Err("bool literal must be true or false"),
        },
        DataType::Nil => {
            if DataType::from_name(value).is_some() {
                Ok(Constant::Nil {
                    raw: value.to_string(),
                })
            } else {
                Err("malformed nil literal")
            }
        }
        DataType::String => {
            if !RE_STRING.is_match(value) {
                return Err("malformed string literal");
            }
            let decoded = unescape(value).ok_or("malformed escape sequence")?;
            Ok(Constant::String {
                raw: value.to_string(),
                value: decoded,
            })
        }
    }
}

/// A variable reference or a typed constant such as `int@42`.
pub fn parse_symbol(token: &str) -> Result<Symbol, Reject> {
    if token == "string@" {
        return Ok(Symbol::Const(Constant::String {
            raw: String::new(),
            value: String::new(),
        }));
    }
    let (prefix, value) = token.split_once('@').ok_or("missing '@'")?;
    if Scope::from_tag(prefix).is_some() {
        return parse_variable(token).map(Symbol::Var);
    }
    let ty = DataType::from_name(prefix).ok_or("unknown symbol type")?;
    parse_constant(ty, value).map(Symbol::Const)
}

pub fn parse_type(token: &str) -> Result<DataType, Reject> {
    DataType::from_name(token).ok_or("not a type name")
}

pub fn parse_label(token: &str) -> Result<String, Reject> {
    if is_identifier(token) {
        Ok(token.to_string())
    } else {
        Err("malformed label")
    }
}

/// Parses `token` with the grammar for `kind`.
pub fn parse_operand(kind: OperandKind, token: &str) -> Result<Operand, Reject> {
    match kind {
        OperandKind::Variable => parse_variable(token).map(Operand::Var),
        OperandKind::Symbol => parse_symbol(token).map(Operand::Symbol),
        OperandKind::Type => parse_type(token).map(Operand::Type),
        OperandKind::Label => parse_label(token).map(Operand::Label),
    }
}
