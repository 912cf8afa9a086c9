//! The top-level machine: ROM, RAM and the CPU wired together, advanced one
//! instruction per [`Computer::tick`].

use crate::cpu::Cpu;
use crate::decode::{self, Instruction};
use crate::memory::Ram;
use crate::memory::Rom;
use crate::{Address, Word};

/// A complete Hack computer: a fixed program in ROM, mutable data RAM, and
/// the CPU that steps between them.
#[derive(Clone, Debug)]
pub struct Computer {
    rom: Rom,
    ram: Ram,
    cpu: Cpu,
}

impl Computer {
    pub fn new(rom: Rom) -> Computer {
        Computer {
            rom,
            ram: Ram::new(),
            cpu: Cpu::new(),
        }
    }

    pub fn a(&self) -> Word {
        self.cpu.a()
    }

    pub fn d(&self) -> Word {
        self.cpu.d()
    }

    pub fn pc(&self) -> Word {
        self.cpu.pc()
    }

    /// Inspects a RAM cell without side effects.
    pub fn ram(&self, address: Address) -> Word {
        self.ram.peek(address)
    }

    /// Advances the machine by one instruction.
    ///
    /// The instruction at the current PC is fetched from ROM and decoded;
    /// RAM is read combinationally at the CPU's current A value to produce
    /// `in_m` before the CPU computes this tick, so that the ALU and any
    /// RAM write both observe a single, consistent pre-tick address.
    pub fn tick(&mut self, reset: bool) {
        let word = self.rom.read(self.pc());
        let instruction = decode::decode(word);

        let in_m = self.ram.peek(self.a());
        let result = self.cpu.tick(instruction, in_m, reset);

        self.ram.access(result.address_m, result.out_m, result.write_m);
    }

    /// Ticks once with `reset` asserted, returning the program counter to 0.
    pub fn reset(&mut self) {
        self.tick(true);
    }

    /// Renders a decoded instruction as Hack assembly-like text, for
    /// debugging and trace output.
    pub fn disassemble(instruction: Instruction) -> String {
        match instruction {
            Instruction::A(address) => format!("@{}", address),
            Instruction::C { am, alu, dest, jump } => {
                let comp = alu_mnemonic(am, alu);
                let (a, d, m) = dest;
                let mut dest_str = String::new();
                if a {
                    dest_str.push('A');
                }
                if d {
                    dest_str.push('D');
                }
                if m {
                    dest_str.push('M');
                }

                let jump_str = jump_mnemonic(jump);

                match (dest_str.is_empty(), jump_str.is_empty()) {
                    (true, true) => comp,
                    (false, true) => format!("{}={}", dest_str, comp),
                    (true, false) => format!("{};{}", comp, jump_str),
                    (false, false) => format!("{}={};{}", dest_str, comp, jump_str),
                }
            }
        }
    }
}

fn alu_mnemonic(am: bool, flags: crate::alu::AluFlag) -> String {
    use crate::alu::AluFlag;

    let table: &[(AluFlag, &str)] = &[
        (AluFlag::ZERO, "0"),
        (AluFlag::ONE, "1"),
        (AluFlag::MINUS_ONE, "-1"),
        (AluFlag::X, "D"),
        (AluFlag::NOT_X, "!D"),
        (AluFlag::MINUS_X, "-D"),
        (AluFlag::Y, "A"),
        (AluFlag::NOT_Y, "!A"),
        (AluFlag::MINUS_Y, "-A"),
        (AluFlag::X_PLUS_1, "D+1"),
        (AluFlag::Y_PLUS_1, "A+1"),
        (AluFlag::X_MINUS_1, "D-1"),
        (AluFlag::Y_MINUS_1, "A-1"),
        (AluFlag::X_PLUS_Y, "D+A"),
        (AluFlag::X_MINUS_Y, "D-A"),
        (AluFlag::Y_MINUS_X, "A-D"),
        (AluFlag::X_AND_Y, "D&A"),
        (AluFlag::X_OR_Y, "D|A"),
    ];

    for (candidate, mnemonic) in table {
        if *candidate == flags {
            return if am {
                mnemonic.replace('A', "M")
            } else {
                mnemonic.to_string()
            };
        }
    }
    format!("{:?}", flags)
}

fn jump_mnemonic(jump: crate::decode::JumpCondition) -> &'static str {
    use crate::decode::JumpCondition::*;

    match jump {
        Never => "",
        Gt => "JGT",
        Eq => "JEQ",
        Ge => "JGE",
        Lt => "JLT",
        Ne => "JNE",
        Le => "JLE",
        Always => "JMP",
    }
}
