use arch::inst::Insn;
use arch::op::OpKind;
use arch::trap;
use arch::word::{Uword, Word, OP_MASK, OP_SHIFT};
use color_print::cformat;
use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::Error;

// ----------------------------------------------------------------------------
// Immediate operands

/// Integer operand: a literal, or a label name resolved against the
/// final label table (so forward references work).
#[derive(Debug, Clone, PartialEq)]
pub enum Imm {
    Literal(Word),
    Ident(String),
}

impl Imm {
    fn parse(s: &str) -> Imm {
        match parse_with_prefix(s) {
            Ok(v) => Imm::Literal(v),
            Err(_) => Imm::Ident(s.to_string()),
        }
    }

    pub fn resolve(&self, labels: &IndexMap<String, Uword>) -> Result<Word, Error> {
        match self {
            Imm::Literal(v) => Ok(*v),
            Imm::Ident(s) => match labels.get(s) {
                Some(pc) => Ok(*pc as Word),
                None => Err(Error::UndefinedLabel(s.clone())),
            },
        }
    }

    fn cfmt(&self) -> String {
        match self {
            Imm::Literal(v) => cformat!("<y>{}</>", v),
            Imm::Ident(s) => cformat!("<r,u>{}</>", s),
        }
    }
}

fn parse_with_prefix(s: &str) -> Result<Word, std::num::ParseIntError> {
    if let Some(num) = s.strip_prefix("0b") {
        Word::from_str_radix(num, 2)
    } else if let Some(num) = s.strip_prefix("0o") {
        Word::from_str_radix(num, 8)
    } else if let Some(num) = s.strip_prefix("0x") {
        Word::from_str_radix(num, 16)
    } else {
        s.parse()
    }
}

// ----------------------------------------------------------------------------
// Instructions

/// One source instruction, operands not yet resolved. The wide forms
/// (`Float`, `Push`) expand to two words on resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Code {
    Plain(OpKind),
    Int(Imm),
    Link(Imm),
    Float(f32),
    Trap(Word),
    Push(Imm),
    Bra(Uword),
    Ket(Uword),
}

impl Code {
    fn parse(inst: &str) -> Result<Code, Error> {
        let toks: Vec<&str> = inst.split_whitespace().collect();
        let (name, args) = match toks.split_first() {
            Some((name, args)) => (*name, args),
            None => return Err(Error::InvalidNode("empty instruction".to_string())),
        };
        let op = OpKind::parse(name).map_err(|_| Error::UnknownMnemonic(name.to_string()))?;

        if !op.has_operand() {
            if !args.is_empty() {
                return Err(Error::MalformedOperand(format!(
                    "unexpected operand for `{name}`"
                )));
            }
            return Ok(Code::Plain(op));
        }

        if args.len() != 1 {
            return Err(Error::MalformedOperand(format!("`{name}` needs an operand")));
        }
        let arg = args[0];
        match op {
            OpKind::INT => Ok(Code::Int(Imm::parse(arg))),
            OpKind::LINK => Ok(Code::Link(Imm::parse(arg))),
            OpKind::FLOAT => match arg.parse::<f32>() {
                Ok(f) => Ok(Code::Float(f)),
                Err(_) => Err(Error::MalformedOperand(format!("bad float `{arg}`"))),
            },
            OpKind::TRAP => match trap::parse(arg) {
                Some(id) => Ok(Code::Trap(id)),
                None => Err(Error::UnknownTrap(arg.to_string())),
            },
            OpKind::PUSH => Ok(Code::Push(Imm::parse(arg))),
            _ => unreachable!("has_operand covers exactly the five operand mnemonics"),
        }
    }

    /// Number of words this instruction occupies.
    pub fn words(&self) -> Uword {
        match self {
            Code::Float(_) | Code::Push(_) => 2,
            _ => 1,
        }
    }

    /// Resolve operands and expand to packed-form instructions. Wide
    /// operands split into a high word carrying the primary opcode and
    /// a low word carrying the continuation opcode.
    pub fn resolve(&self, labels: &IndexMap<String, Uword>) -> Result<Vec<Insn>, Error> {
        Ok(match self {
            Code::Plain(op) => vec![Insn::plain(*op)],
            Code::Int(imm) => vec![Insn::with_operand(OpKind::INT, imm.resolve(labels)?)],
            Code::Link(imm) => vec![Insn::with_operand(OpKind::LINK, imm.resolve(labels)?)],
            Code::Float(f) => {
                let bits = f.to_bits();
                vec![
                    Insn::with_operand(OpKind::FLOAT, (bits >> OP_SHIFT) as Word),
                    Insn::with_operand(OpKind::_FLOAT, (bits & OP_MASK as Uword) as Word),
                ]
            }
            Code::Trap(id) => vec![Insn::with_operand(OpKind::TRAP, *id)],
            Code::Push(imm) => {
                let v = imm.resolve(labels)?;
                vec![
                    Insn::with_operand(OpKind::PUSH, v >> OP_SHIFT),
                    Insn::with_operand(OpKind::_PUSH, v & OP_MASK),
                ]
            }
            Code::Bra(n) => vec![Insn::with_operand(OpKind::BRA, *n as Word)],
            Code::Ket(n) => vec![Insn::with_operand(OpKind::KET, *n as Word)],
        })
    }

    pub fn cformat(&self) -> String {
        macro_rules! opfmt {
            ($name:expr, $operand:expr) => {
                cformat!("<r>{:<8}</>{}", $name, $operand)
            };
        }
        match self {
            Code::Plain(op) => opfmt!(op.to_string().to_lowercase(), ""),
            Code::Int(imm) => opfmt!("int", imm.cfmt()),
            Code::Link(imm) => opfmt!("link", imm.cfmt()),
            Code::Float(f) => opfmt!("float", cformat!("<y>{}</>", f)),
            Code::Trap(id) => match trap::name_of(*id) {
                Some(name) => opfmt!("trap", cformat!("<g>{}</>", name)),
                None => opfmt!("trap", cformat!("<y>{}</>", id)),
            },
            Code::Push(imm) => opfmt!("push", imm.cfmt()),
            Code::Bra(n) => opfmt!("bra", cformat!("<y>{}</>", n)),
            Code::Ket(n) => opfmt!("ket", cformat!("<y>{}</>", n)),
        }
    }
}

// ----------------------------------------------------------------------------
// Assembled program

/// One assembled instruction with its word offset and block depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub pc: Uword,
    pub depth: usize,
    pub code: Code,
}

/// Ordered instructions, the label table, and the total word count
/// (terminators included). Owned by one compile; nothing persists.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub lines: Vec<Line>,
    pub labels: IndexMap<String, Uword>,
    pub nwords: Uword,
}

impl Program {
    /// Binary image: one packed word per encoded instruction.
    pub fn words(&self) -> Result<Vec<Word>, Error> {
        let mut words = Vec::with_capacity(self.nwords as usize);
        for line in &self.lines {
            for insn in line.code.resolve(&self.labels)? {
                words.push(insn.pack());
            }
        }
        Ok(words)
    }
}

// ----------------------------------------------------------------------------
// Tree walk

type Assembled = (Vec<Line>, IndexMap<String, Uword>, Uword);

fn asm_node(node: &Value, depth: usize, pc: Uword) -> Result<Assembled, Error> {
    match node {
        // `label: instruction` attaches a name to the current counter,
        // then assembles the wrapped node at the same counter.
        Value::Mapping(map) => {
            if map.len() != 1 {
                return Err(Error::BadLabelNode(format!(
                    "expected a single `label: instruction` entry, found {}",
                    map.len()
                )));
            }
            let (key, sub) = match map.iter().next() {
                Some(entry) => entry,
                None => return Err(Error::BadLabelNode("empty mapping".to_string())),
            };
            let name = match key {
                Value::String(name) => name,
                _ => return Err(Error::BadLabelNode("string expected".to_string())),
            };
            let (lines, sub_labels, n) = asm_node(sub, depth, pc)?;
            let mut labels = IndexMap::new();
            labels.insert(name.clone(), pc);
            labels.extend(sub_labels);
            Ok((lines, labels, n))
        }
        // A nested list is a sub-routine, bracketed so the engine can
        // skip it in one step or return over it.
        Value::Sequence(seq) => {
            let (mut lines, labels, n) = asm_seq(seq, depth + 1, pc + 1)?;
            lines.insert(
                0,
                Line {
                    pc,
                    depth,
                    code: Code::Bra(n),
                },
            );
            lines.push(Line {
                pc: pc + 1 + n,
                depth,
                code: Code::Ket(n),
            });
            Ok((lines, labels, n + 2))
        }
        Value::String(inst) => {
            let code = Code::parse(inst)?;
            let n = code.words();
            Ok((
                vec![Line { pc, depth, code }],
                IndexMap::new(),
                n,
            ))
        }
        other => Err(Error::InvalidNode(format!("{:?}", other))),
    }
}

fn asm_seq(nodes: &[Value], depth: usize, pc0: Uword) -> Result<Assembled, Error> {
    let mut lines = vec![];
    let mut labels = IndexMap::new();
    let mut pc = pc0;
    for node in nodes {
        let (sub_lines, sub_labels, n) = asm_node(node, depth, pc)?;
        lines.extend(sub_lines);
        labels.extend(sub_labels);
        pc += n;
    }
    Ok((lines, labels, pc - pc0))
}

/// Assemble a whole program tree. The top level must be a list (it is
/// not bracketed); the forced-halt epilogue `link 1`, `link 1` is
/// appended after it.
pub fn assemble(prog: &Value) -> Result<Program, Error> {
    let seq = match prog {
        Value::Sequence(seq) => seq,
        _ => return Err(Error::BadProgram),
    };
    let (mut lines, labels, nwords) = asm_seq(seq, 0, 0)?;
    for i in 0..2 {
        lines.push(Line {
            pc: nwords + i,
            depth: 0,
            code: Code::Link(Imm::Literal(1)),
        });
    }
    Ok(Program {
        lines,
        labels,
        nwords: nwords + 2,
    })
}
