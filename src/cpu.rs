//! The CPU datapath: wires the ALU, the A/D registers and the program
//! counter together around one decoded instruction per tick.

use crate::alu;
use crate::control;
use crate::decode::Instruction;
use crate::register::{ProgramCounter, Register};
use crate::Word;

/// Everything the surrounding [`crate::computer::Computer`] needs from one
/// tick of the CPU: the (possibly updated) address register, whether this
/// tick wants to write `out_m` to RAM, and the new program counter.
#[derive(Clone, Copy, Debug)]
pub struct CpuTick {
    pub address_m: Word,
    pub out_m: Word,
    pub write_m: bool,
    pub pc: Word,
}

/// The A/D registers and the program counter. The ALU itself is stateless
/// and lives in [`crate::alu`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cpu {
    a: Register,
    d: Register,
    pc: ProgramCounter,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            a: Register::new(),
            d: Register::new(),
            pc: ProgramCounter::new(),
        }
    }

    pub fn a(&self) -> Word {
        self.a.get()
    }

    pub fn d(&self) -> Word {
        self.d.get()
    }

    pub fn pc(&self) -> Word {
        self.pc.get()
    }

    /// Executes one instruction.
    ///
    /// `in_m` is the value already sitting on the memory data bus, read
    /// combinationally from RAM at the *previous* tick's `address_m` (the A
    /// register only changes at the end of a tick, so `address_m` for the
    /// memory access that feeds this tick's ALU input is the pre-tick A
    /// value, never a value this same tick just computed).
    pub fn tick(&mut self, instruction: Instruction, in_m: Word, reset: bool) -> CpuTick {
        let old_a = self.a.get();

        let (out, zr, ng) = match instruction {
            Instruction::A(address) => (address, false, false),
            Instruction::C { am, alu: flags, .. } => {
                let y = if am { in_m } else { old_a };
                alu::compute(self.d.get(), y, flags)
            }
        };

        let (load_a, load_d, write_m) = control::write_control(&instruction);
        let jump = control::jump_signal(&instruction, zr, ng);

        self.a.tick(out, load_a);
        self.d.tick(out, load_d);
        let pc = self.pc.tick(old_a, true, jump, reset);

        CpuTick {
            address_m: old_a,
            out_m: out,
            write_m,
            pc,
        }
    }
}
