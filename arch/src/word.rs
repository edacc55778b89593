//! Word layout of the SM32 machine.
//!
//! Instructions occupy one word, with the opcode in the low `OP_SHIFT`
//! bits; the rest of the word is an immediate operand. Operands wider
//! than the immediate field are split across two words (see the
//! `float`/`_float` and `push`/`_push` instruction pairs).

/// Machine word.
pub type Word = i32;

/// Unsigned view of a word, for bit fiddling and program counters.
pub type Uword = u32;

pub const WORD_BITS: u32 = 32;

/// Bits reserved for the opcode field.
pub const OP_SHIFT: u32 = 8;

/// Mask selecting the opcode field, or the low half of a split operand.
pub const OP_MASK: Word = (1 << OP_SHIFT) - 1;
