use color_print::cformat;

use crate::op::OpKind;
use crate::trap;
use crate::word::{Uword, Word, OP_SHIFT};

/// One encoded machine word: an opcode with its immediate operand
/// already reduced to a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insn {
    pub op: OpKind,
    pub operand: Option<Word>,
}

impl Insn {
    pub fn plain(op: OpKind) -> Self {
        Insn { op, operand: None }
    }

    pub fn with_operand(op: OpKind, operand: Word) -> Self {
        Insn {
            op,
            operand: Some(operand),
        }
    }

    /// Pack into a word: `(operand << OP_SHIFT) | opcode`, or the bare
    /// opcode value when there is no operand.
    pub fn pack(&self) -> Word {
        let opcode = u8::from(self.op) as Uword;
        match self.operand {
            Some(v) => (((v as Uword) << OP_SHIFT) | opcode) as Word,
            None => opcode as Word,
        }
    }
}

impl Insn {
    pub fn cformat(&self) -> String {
        let name = self.op.to_string().to_lowercase();
        match self.operand {
            None => cformat!("<r>{:<8}</>", name),
            Some(v) => match self.op {
                OpKind::TRAP => match trap::name_of(v) {
                    Some(t) => cformat!("<r>{:<8}</><g>{}</>", name, t),
                    None => cformat!("<r>{:<8}</><y>{}</>", name, v),
                },
                OpKind::INT | OpKind::LINK => cformat!("<r>{:<8}</><y>{}</>", name, v),
                _ => cformat!("<r>{:<8}</><y>0x{:X}</>", name, v),
            },
        }
    }
}
