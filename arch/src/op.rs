use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum OpKind {
    #[default]
    NOP,
    INT,
    FLOAT,
    _FLOAT,
    I2F,
    F2I,
    PUSH,
    _PUSH,
    POP,
    DUP,
    SWAP,
    IDUP,
    ISET,
    BRA,
    KET,
    LINK,
    DO,
    IF,
    WHILE,
    LOOP,
    NOT,
    AND,
    OR,
    XOR,
    LSH,
    RSH,
    ARSH,
    EQ,
    LT,
    NEG,
    ADD,
    MUL,
    DIV,
    REM,
    POW,
    SIN,
    COS,
    DEG,
    RAD,
    HALT = 0xFE,
    TRAP = 0xFF,
}

impl OpKind {
    /// Mnemonics are matched case-insensitively.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }

    /// Whether this mnemonic takes an operand token in source programs.
    /// `bra`/`ket` carry operands too, but only the assembler writes those.
    pub fn has_operand(&self) -> bool {
        use OpKind::*;
        matches!(self, INT | LINK | FLOAT | TRAP | PUSH)
    }
}
