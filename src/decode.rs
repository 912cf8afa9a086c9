//! Decoding and encoding of 16-bit instruction words.

use num::{FromPrimitive, ToPrimitive};

use crate::alu::AluFlag;
use crate::constants::*;
use crate::Word;

/// The jump condition carried by a C-instruction's low three bits, numbered
/// so that the discriminant equals the bit pattern `(j1 j2 j3)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, ToPrimitive)]
pub enum JumpCondition {
    Never = 0,
    Gt = 1,
    Eq = 2,
    Ge = 3,
    Lt = 4,
    Ne = 5,
    Le = 6,
    Always = 7,
}

impl JumpCondition {
    pub fn bits(self) -> u16 {
        self.to_u16().expect("JumpCondition fits in three bits")
    }

    pub fn from_bits(bits: u16) -> JumpCondition {
        JumpCondition::from_u16(bits & 0b111).expect("masked to three bits")
    }

    /// Whether this condition is satisfied given the ALU's `zr`/`ng` flags.
    pub fn is_satisfied(self, zr: bool, ng: bool) -> bool {
        match self {
            JumpCondition::Never => false,
            JumpCondition::Gt => !zr && !ng,
            JumpCondition::Eq => zr,
            JumpCondition::Ge => zr || !ng,
            JumpCondition::Lt => ng,
            JumpCondition::Ne => !zr,
            JumpCondition::Le => zr || ng,
            JumpCondition::Always => true,
        }
    }
}

/// A decoded instruction word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Instruction {
    /// An A-instruction: loads the A register with a 15-bit address.
    A(Word),
    /// A C-instruction: computes `alu` (using M when `am` is set), optionally
    /// storing into A/D/M per `dest`, then optionally jumping per `jump`.
    C {
        am: bool,
        alu: AluFlag,
        dest: (bool, bool, bool),
        jump: JumpCondition,
    },
}

/// Decodes a raw 16-bit word into an [`Instruction`].
pub fn decode(word: Word) -> Instruction {
    if word & C_INSTRUCTION_BIT == 0 {
        return Instruction::A(word & ADDRESS_MASK);
    }

    Instruction::C {
        am: word & AM_BIT != 0,
        alu: AluFlag {
            zx: word & ZX_BIT != 0,
            nx: word & NX_BIT != 0,
            zy: word & ZY_BIT != 0,
            ny: word & NY_BIT != 0,
            f: word & F_BIT != 0,
            no: word & NO_BIT != 0,
        },
        dest: (
            word & DEST_A_BIT != 0,
            word & DEST_D_BIT != 0,
            word & DEST_M_BIT != 0,
        ),
        jump: JumpCondition::from_bits(word & 0b111),
    }
}

/// Encodes an [`Instruction`] back into its 16-bit word, the inverse of
/// [`decode`].
pub fn encode(instruction: &Instruction) -> Word {
    match *instruction {
        Instruction::A(address) => address & ADDRESS_MASK,
        Instruction::C { am, alu, dest, jump } => {
            let mut word = C_INSTRUCTION_PREFIX;
            if am {
                word |= AM_BIT;
            }
            if alu.zx {
                word |= ZX_BIT;
            }
            if alu.nx {
                word |= NX_BIT;
            }
            if alu.zy {
                word |= ZY_BIT;
            }
            if alu.ny {
                word |= NY_BIT;
            }
            if alu.f {
                word |= F_BIT;
            }
            if alu.no {
                word |= NO_BIT;
            }
            let (a, d, m) = dest;
            if a {
                word |= DEST_A_BIT;
            }
            if d {
                word |= DEST_D_BIT;
            }
            if m {
                word |= DEST_M_BIT;
            }
            word |= jump.bits();
            word
        }
    }
}
