use crate::catalog::Catalog;
use crate::diag::Diagnostics;
use crate::error::Error;
use crate::ir::{Instruction, OperandLiteral, Program, SourceLine};
use crate::operand::parse_operand;

fn analyze_line(
    line: &SourceLine,
    order: usize,
    catalog: &Catalog,
    diag: &dyn Diagnostics,
) -> Result<Instruction, Error> {
    let mut tokens = line.text.split_whitespace();
    let opcode = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    let Some(sig) = catalog.lookup(opcode) else {
        diag.report(
            "parse",
            &format!("line {}: unknown opcode '{}'", line.line_no, opcode),
        );
        return Err(Error::UnknownOpcode {
            line_no: line.line_no,
            opcode: opcode.to_string(),
        });
    };

    if args.len() != sig.arity() {
        diag.report(
            "parse",
            &format!(
                "line {}: {} expects {} operand(s), got {:?}",
                line.line_no, sig.opcode, sig.arity(), args
            ),
        );
        return Err(Error::Arity {
            line_no: line.line_no,
            opcode: sig.opcode,
            expected: sig.arity(),
            found: args.len(),
        });
    }

    let mut operands = Vec::with_capacity(args.len());
    for (i, (&kind, &token)) in sig.operands.iter().zip(&args).enumerate() {
        match parse_operand(kind, token) {
            Ok(operand) => operands.push(OperandLiteral {
                token: token.to_string(),
                operand,
            }),
            Err(reason) => {
                diag.report(
                    "parse",
                    &format!(
                        "line {}: {} operand {} '{}': {}",
                        line.line_no,
                        sig.opcode,
                        i + 1,
                        token,
                        reason
                    ),
                );
                return Err(Error::OperandSyntax {
                    line_no: line.line_no,
                    opcode: sig.opcode,
                    position: i + 1,
                    expected: kind,
                    token: token.to_string(),
                });
            }
        }
    }

    Ok(Instruction {
        order,
        opcode: sig.opcode,
        operands,
    })
}

/// Validates every line in order and assigns contiguous 1-based order
/// numbers. Stops at the first invalid line.
pub fn stage1(
    lines: &[SourceLine],
    catalog: &Catalog,
    diag: &dyn Diagnostics,
) -> Result<Program, Error> {
    let instructions = lines
        .iter()
        .enumerate()
        .map(|(i, line)| analyze_line(line, i + 1, catalog, diag))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program { instructions })
}
