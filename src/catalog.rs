use indexmap::IndexMap;
use std::fmt;

/// Lexical category an operand slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Variable,
    Symbol,
    Type,
    Label,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperandKind::Variable => "variable",
            OperandKind::Symbol => "symbol",
            OperandKind::Type => "type",
            OperandKind::Label => "label",
        };
        f.write_str(name)
    }
}

use OperandKind::{Label, Symbol, Type, Variable};

const SIGNATURES: &[(&str, &[OperandKind])] = &[
    // frames and calls
    ("MOVE", &[Variable, Symbol]),
    ("CREATEFRAME", &[]),
    ("PUSHFRAME", &[]),
    ("POPFRAME", &[]),
    ("DEFVAR", &[Variable]),
    ("CALL", &[Label]),
    ("RETURN", &[]),
    // data stack
    ("PUSHS", &[Symbol]),
    ("POPS", &[Variable]),
    // arithmetic, relational, boolean
    ("ADD", &[Variable, Symbol, Symbol]),
    ("SUB", &[Variable, Symbol, Symbol]),
    ("MUL", &[Variable, Symbol, Symbol]),
    ("IDIV", &[Variable, Symbol, Symbol]),
    ("LT", &[Variable, Symbol, Symbol]),
    ("GT", &[Variable, Symbol, Symbol]),
    ("EQ", &[Variable, Symbol, Symbol]),
    ("AND", &[Variable, Symbol, Symbol]),
    ("OR", &[Variable, Symbol, Symbol]),
    ("NOT", &[Variable, Symbol]),
    ("INT2CHAR", &[Variable, Symbol]),
    ("STRI2INT", &[Variable, Symbol, Symbol]),
    ("INT2FLOAT", &[Variable, Symbol]),
    ("FLOAT2INT", &[Variable, Symbol]),
    // I/O
    ("READ", &[Variable, Type]),
    ("WRITE", &[Symbol]),
    // strings and types
    ("CONCAT", &[Variable, Symbol, Symbol]),
    ("STRLEN", &[Variable, Symbol]),
    ("GETCHAR", &[Variable, Symbol, Symbol]),
    ("SETCHAR", &[Variable, Symbol, Symbol]),
    ("TYPE", &[Variable, Symbol]),
    // control flow
    ("LABEL", &[Label]),
    ("JUMP", &[Label]),
    ("JUMPIFEQ", &[Label, Symbol, Symbol]),
    ("JUMPIFNEQ", &[Label, Symbol, Symbol]),
    ("EXIT", &[Symbol]),
    // debugging
    ("DPRINT", &[Symbol]),
    ("BREAK", &[]),
];

/// Operand list expected by one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub opcode: &'static str,
    pub operands: &'static [OperandKind],
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.operands.len()
    }
}

/// Immutable opcode table shared by the analyzer and the emitter.
///
/// Keys are the canonical upper-case opcodes; lookups accept any casing.
/// Iteration follows declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: IndexMap<&'static str, Signature>,
}

impl Catalog {
    /// The IPPcode23 instruction set.
    pub fn ippcode23() -> Self {
        let entries = SIGNATURES
            .iter()
            .map(|&(opcode, operands)| (opcode, Signature { opcode, operands }))
            .collect();
        Catalog { entries }
    }

    pub fn lookup(&self, opcode: &str) -> Option<&Signature> {
        self.entries.get(opcode.to_ascii_uppercase().as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        let catalog = Catalog::ippcode23();
        assert_eq!(catalog.len(), 37);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::ippcode23();
        let upper = catalog.lookup("MOVE").unwrap();
        let lower = catalog.lookup("move").unwrap();
        let mixed = catalog.lookup("MoVe").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
        assert_eq!(upper.opcode, "MOVE");
    }

    #[test]
    fn test_unknown_opcode() {
        let catalog = Catalog::ippcode23();
        assert!(catalog.lookup("FOOBAR").is_none());
        assert!(catalog.lookup("").is_none());
        // only ASCII letters fold
        assert!(catalog.lookup("\u{131}nt2char").is_none());
        assert!(catalog.lookup("int2char").is_some());
    }

    #[test]
    fn test_signatures() {
        let catalog = Catalog::ippcode23();
        assert_eq!(catalog.lookup("BREAK").unwrap().arity(), 0);
        assert_eq!(catalog.lookup("READ").unwrap().operands, &[Variable, Type]);
        assert_eq!(
            catalog.lookup("JUMPIFNEQ").unwrap().operands,
            &[Label, Symbol, Symbol]
        );
        assert_eq!(catalog.lookup("CALL").unwrap().operands, &[Label]);
    }

    #[test]
    fn test_declaration_order() {
        let catalog = Catalog::ippcode23();
        let first: Vec<&str> = catalog.iter().take(3).map(|s| s.opcode).collect();
        assert_eq!(first, vec!["MOVE", "CREATEFRAME", "PUSHFRAME"]);
        assert_eq!(catalog.iter().last().unwrap().opcode, "BREAK");
    }

    #[test]
    fn test_keys_are_uppercase() {
        let catalog = Catalog::ippcode23();
        for sig in catalog.iter() {
            assert_eq!(sig.opcode, sig.opcode.to_uppercase());
        }
    }
}
