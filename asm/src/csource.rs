//! C-source rendering of an assembled program.
//!
//! The second serialization of a compiled program: one `#define` per
//! label, then one indented, comma-terminated word per line, symbolic
//! where the source gives a symbol. Word order, count, and values
//! match the binary image, since both render the same resolved
//! instructions.

use arch::inst::Insn;
use arch::op::OpKind;
use arch::trap;

use crate::assemble::{Code, Imm, Line, Program};
use crate::error::Error;

const INDENT: usize = 2;

fn indented(s: String, depth: usize) -> String {
    format!("{}{},", " ".repeat(depth * INDENT), s)
}

fn insn_name(op: OpKind) -> String {
    format!("SM_INSN_{op}")
}

fn shifted(operand: &str, op: OpKind) -> String {
    format!("LSHIFT({operand}, SM_OP_SHIFT) | {}", insn_name(op))
}

fn numeric(insn: &Insn) -> String {
    match insn.operand {
        None => insn_name(insn.op),
        Some(v) => match insn.op {
            OpKind::FLOAT | OpKind::_FLOAT => shifted(&format!("0x{:X}", v), insn.op),
            _ => shifted(&v.to_string(), insn.op),
        },
    }
}

fn render(line: &Line, prog: &Program) -> Result<Vec<String>, Error> {
    // Resolve first so both output modes validate and split operands
    // identically; symbolic forms below only change the spelling.
    let insns = line.code.resolve(&prog.labels)?;
    Ok(match &line.code {
        // Label names are #defined above, so they are valid C here.
        Code::Int(Imm::Ident(name)) => vec![shifted(name, OpKind::INT)],
        Code::Link(Imm::Ident(name)) => vec![shifted(name, OpKind::LINK)],
        Code::Push(Imm::Ident(name)) => vec![
            shifted(&format!("{name} >> SM_OP_SHIFT"), OpKind::PUSH),
            shifted(&format!("{name} & SM_OP_MASK"), OpKind::_PUSH),
        ],
        Code::Trap(id) => match trap::name_of(*id) {
            Some(name) => vec![shifted(&format!("TRAP_{name}"), OpKind::TRAP)],
            None => vec![shifted(&id.to_string(), OpKind::TRAP)],
        },
        _ => insns.iter().map(numeric).collect(),
    })
}

/// Render the program as C source lines: `#define`s for the label
/// table, then one line per word.
pub fn emit(prog: &Program) -> Result<Vec<String>, Error> {
    let mut out = vec![];
    for (label, pc) in &prog.labels {
        out.push(format!("#define {label} {pc}"));
    }
    for line in &prog.lines {
        for s in render(line, prog)? {
            out.push(indented(s, line.depth));
        }
    }
    Ok(out)
}
