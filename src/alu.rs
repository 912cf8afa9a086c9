//! The ALU: 18 canonical operations selected by a 6-bit flag tuple.

use crate::Word;

/// The six-bit control word `(zx, nx, zy, ny, f, no)` that fully determines
/// an ALU operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AluFlag {
    pub zx: bool,
    pub nx: bool,
    pub zy: bool,
    pub ny: bool,
    pub f: bool,
    pub no: bool,
}

impl AluFlag {
    pub const ZERO: AluFlag = AluFlag { zx: true, nx: false, zy: true, ny: false, f: true, no: false };
    pub const ONE: AluFlag = AluFlag { zx: true, nx: true, zy: true, ny: true, f: true, no: true };
    pub const MINUS_ONE: AluFlag = AluFlag { zx: true, nx: true, zy: true, ny: false, f: true, no: false };
    pub const X: AluFlag = AluFlag { zx: false, nx: false, zy: true, ny: true, f: false, no: false };
    pub const NOT_X: AluFlag = AluFlag { zx: false, nx: false, zy: true, ny: true, f: false, no: true };
    pub const MINUS_X: AluFlag = AluFlag { zx: false, nx: false, zy: true, ny: true, f: true, no: true };
    pub const Y: AluFlag = AluFlag { zx: true, nx: true, zy: false, ny: false, f: false, no: false };
    pub const NOT_Y: AluFlag = AluFlag { zx: true, nx: true, zy: false, ny: false, f: false, no: true };
    pub const MINUS_Y: AluFlag = AluFlag { zx: true, nx: true, zy: false, ny: false, f: true, no: true };
    pub const X_PLUS_1: AluFlag = AluFlag { zx: false, nx: true, zy: true, ny: true, f: true, no: true };
    pub const Y_PLUS_1: AluFlag = AluFlag { zx: true, nx: true, zy: false, ny: true, f: true, no: true };
    pub const X_MINUS_1: AluFlag = AluFlag { zx: false, nx: false, zy: true, ny: true, f: true, no: false };
    pub const Y_MINUS_1: AluFlag = AluFlag { zx: true, nx: true, zy: false, ny: false, f: true, no: false };
    pub const X_PLUS_Y: AluFlag = AluFlag { zx: false, nx: false, zy: false, ny: false, f: true, no: false };
    pub const X_MINUS_Y: AluFlag = AluFlag { zx: false, nx: true, zy: false, ny: false, f: true, no: true };
    pub const Y_MINUS_X: AluFlag = AluFlag { zx: false, nx: false, zy: false, ny: true, f: true, no: true };
    pub const X_AND_Y: AluFlag = AluFlag { zx: false, nx: false, zy: false, ny: false, f: false, no: false };
    pub const X_OR_Y: AluFlag = AluFlag { zx: false, nx: true, zy: false, ny: true, f: false, no: true };

    /// Looks up a flag tuple by its canonical mnemonic (`"x+y"`, `"!x"`,
    /// `"-1"`, ...), matching the naming of the ALU operation table.
    pub fn named(name: &str) -> Option<AluFlag> {
        Some(match name {
            "0" => AluFlag::ZERO,
            "1" => AluFlag::ONE,
            "-1" => AluFlag::MINUS_ONE,
            "x" => AluFlag::X,
            "!x" => AluFlag::NOT_X,
            "-x" => AluFlag::MINUS_X,
            "y" => AluFlag::Y,
            "!y" => AluFlag::NOT_Y,
            "-y" => AluFlag::MINUS_Y,
            "x+1" => AluFlag::X_PLUS_1,
            "y+1" => AluFlag::Y_PLUS_1,
            "x-1" => AluFlag::X_MINUS_1,
            "y-1" => AluFlag::Y_MINUS_1,
            "x+y" => AluFlag::X_PLUS_Y,
            "x-y" => AluFlag::X_MINUS_Y,
            "y-x" => AluFlag::Y_MINUS_X,
            "x&y" => AluFlag::X_AND_Y,
            "x|y" => AluFlag::X_OR_Y,
            _ => return None,
        })
    }
}

/// Computes one ALU operation, returning `(out, zr, ng)`.
///
/// The six steps are applied in the fixed order `zx, nx, zy, ny, f, no`;
/// `zr` is set iff the result is the all-zero word, `ng` iff its MSB is 1.
pub fn compute(x: Word, y: Word, flags: AluFlag) -> (Word, bool, bool) {
    let x = if flags.zx { 0 } else { x };
    let x = if flags.nx { !x } else { x };
    let y = if flags.zy { 0 } else { y };
    let y = if flags.ny { !y } else { y };
    let out = if flags.f { x.wrapping_add(y) } else { x & y };
    let out = if flags.no { !out } else { out };

    let zr = out == 0;
    let ng = out & 0x8000 != 0;

    (out, zr, ng)
}
