use crate::catalog::OperandKind;
use std::fmt;

/// A comment-free, trimmed, non-empty line that survived normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Position among the normalized lines, starting at 0.
    pub index: usize,
    /// 1-based line number in the source text.
    pub line_no: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
    Temporary,
}

impl Scope {
    pub fn from_tag(tag: &str) -> Option<Scope> {
        match tag {
            "GF" => Some(Scope::Global),
            "LF" => Some(Scope::Local),
            "TF" => Some(Scope::Temporary),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Scope::Global => "GF",
            Scope::Local => "LF",
            Scope::Temporary => "TF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Bool,
    String,
    Nil,
}

impl DataType {
    pub fn from_name(name: &str) -> Option<DataType> {
        match name {
            "int" => Some(DataType::Int),
            "bool" => Some(DataType::Bool),
            "string" => Some(DataType::String),
            "nil" => Some(DataType::Nil),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Bool => "bool",
            DataType::String => "string",
            DataType::Nil => "nil",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRef {
    pub scope: Scope,
    pub name: String,
}

impl fmt::Display for VarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.scope.tag(), self.name)
    }
}

/// A typed constant; `raw` is the token text after the first `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    Int { raw: String },
    Bool { value: bool },
    String { raw: String, value: String },
    Nil { raw: String },
}

impl Constant {
    pub fn data_type(&self) -> DataType {
        match self {
            Constant::Int { .. } => DataType::Int,
            Constant::Bool { .. } => DataType::Bool,
            Constant::String { .. } => DataType::String,
            Constant::Nil { .. } => DataType::Nil,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Constant::Int { raw } | Constant::String { raw, .. } | Constant::Nil { raw } => {
                raw.as_str()
            }
            Constant::Bool { value: true } => "true",
            Constant::Bool { value: false } => "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Var(VarRef),
    Const(Constant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Var(VarRef),
    Symbol(Symbol),
    Type(DataType),
    Label(String),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Var(_) => OperandKind::Variable,
            Operand::Symbol(_) => OperandKind::Symbol,
            Operand::Type(_) => OperandKind::Type,
            Operand::Label(_) => OperandKind::Label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandLiteral {
    pub token: String,
    pub operand: Operand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based, contiguous across the program.
    pub order: usize,
    /// Canonical upper-case opcode.
    pub opcode: &'static str,
    pub operands: Vec<OperandLiteral>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_tags() {
        for tag in ["GF", "LF", "TF"] {
            assert_eq!(Scope::from_tag(tag).unwrap().tag(), tag);
        }
        assert!(Scope::from_tag("gf").is_none());
        assert!(Scope::from_tag("XF").is_none());
    }

    #[test]
    fn test_data_type_names() {
        for name in ["int", "bool", "string", "nil"] {
            assert_eq!(DataType::from_name(name).unwrap().to_string(), name);
        }
        assert!(DataType::from_name("float").is_none());
        assert!(DataType::from_name("INT").is_none());
    }

    #[test]
    fn test_var_ref_display() {
        let var = VarRef {
            scope: Scope::Local,
            name: "counter".to_string(),
        };
        assert_eq!(var.to_string(), "LF@counter");
    }

    #[test]
    fn test_constant_raw() {
        assert_eq!(Constant::Bool { value: false }.raw(), "false");
        let s = Constant::String {
            raw: "a\\032b".to_string(),
            value: "a b".to_string(),
        };
        assert_eq!(s.raw(), "a\\032b");
        assert_eq!(s.data_type(), DataType::String);
    }

    #[test]
    fn test_operand_kind() {
        assert_eq!(Operand::Type(DataType::Int).kind(), OperandKind::Type);
        assert_eq!(Operand::Label("end".to_string()).kind(), OperandKind::Label);
    }
}
