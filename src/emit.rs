use crate::catalog::{Catalog, OperandKind};
use crate::config::Config;
use crate::error::Error;
use crate::ir::{Instruction, Operand, OperandLiteral, Program, Symbol};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const LANGUAGE: &str = "IPPcode23";

type XmlWriter = Writer<Vec<u8>>;

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|e| Error::Output(e.to_string()))
}

/// `type` attribute and text content of one `argN` element.
fn arg_parts(kind: OperandKind, lit: &OperandLiteral) -> (&'static str, &str) {
    match kind {
        OperandKind::Variable => ("var", lit.token.as_str()),
        OperandKind::Type => ("type", lit.token.as_str()),
        OperandKind::Label => ("label", lit.token.as_str()),
        OperandKind::Symbol => match &lit.operand {
            Operand::Symbol(Symbol::Const(c)) => (c.data_type().name(), c.raw()),
            _ => ("var", lit.token.as_str()),
        },
    }
}

fn emit_instruction(
    writer: &mut XmlWriter,
    ins: &Instruction,
    catalog: &Catalog,
) -> Result<(), Error> {
    let sig = catalog
        .lookup(ins.opcode)
        .ok_or_else(|| Error::Output(format!("opcode {} is not in the catalog", ins.opcode)))?;
    debug_assert!(sig
        .operands
        .iter()
        .copied()
        .eq(ins.operands.iter().map(|lit| lit.operand.kind())));

    let order = ins.order.to_string();
    let start = BytesStart::new("instruction")
        .with_attributes([("order", order.as_str()), ("opcode", ins.opcode)]);

    if ins.operands.is_empty() {
        return write(writer, Event::Empty(start));
    }

    write(writer, Event::Start(start))?;
    for (i, (&kind, lit)) in sig.operands.iter().zip(&ins.operands).enumerate() {
        let name = format!("arg{}", i + 1);
        let (ty, text) = arg_parts(kind, lit);
        let arg = BytesStart::new(name.as_str()).with_attributes([("type", ty)]);
        if text.is_empty() {
            write(writer, Event::Empty(arg))?;
        } else {
            write(writer, Event::Start(arg))?;
            write(writer, Event::Text(BytesText::from_escaped(partial_escape(text))))?;
            write(writer, Event::End(BytesEnd::new(name.as_str())))?;
        }
    }
    write(writer, Event::End(BytesEnd::new("instruction")))
}

/// Serializes a validated program as an indented XML document ending in a
/// newline.
pub fn emit_xml(program: &Program, catalog: &Catalog, config: &Config) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', config.indent);
    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let root = BytesStart::new("program").with_attributes([("language", LANGUAGE)]);
    if program.is_empty() {
        write(&mut writer, Event::Empty(root))?;
    } else {
        write(&mut writer, Event::Start(root))?;
        for ins in &program.instructions {
            emit_instruction(&mut writer, ins, catalog)?;
        }
        write(&mut writer, Event::End(BytesEnd::new("program")))?;
    }

    let mut out =
        String::from_utf8(writer.into_inner()).map_err(|e| Error::Output(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
