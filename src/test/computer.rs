use crate::alu::AluFlag;
use crate::bits::create_image;
use crate::computer::Computer;
use crate::decode::{encode, Instruction, JumpCondition};
use crate::memory::Rom;

fn rom_from(instructions: &[Instruction]) -> Rom {
    let words: Vec<i32> = instructions.iter().map(|i| encode(i) as i32).collect();
    Rom::new(create_image(&words)).unwrap()
}

/// Computes `2 + 2 - 1` into D and stores it to RAM[0], without ever loading
/// A with the destination address until the very last instruction.
#[test]
fn two_plus_two_minus_one() {
    let program = [
        Instruction::A(2),
        Instruction::C {
            am: false,
            alu: AluFlag::Y,
            dest: (false, true, false),
            jump: JumpCondition::Never,
        }, // D=A
        Instruction::C {
            am: false,
            alu: AluFlag::X_PLUS_Y,
            dest: (false, true, false),
            jump: JumpCondition::Never,
        }, // D=D+A  (A still 2)
        Instruction::C {
            am: false,
            alu: AluFlag::X_MINUS_1,
            dest: (false, true, false),
            jump: JumpCondition::Never,
        }, // D=D-1
        Instruction::A(0),
        Instruction::C {
            am: false,
            alu: AluFlag::X,
            dest: (false, false, true),
            jump: JumpCondition::Never,
        }, // M=D
    ];

    let mut computer = Computer::new(rom_from(&program));
    for _ in 0..6 {
        computer.tick(false);
    }

    assert_eq!(computer.a(), 0);
    assert_eq!(computer.d(), 3);
    assert_eq!(computer.ram(0), 3);
}

/// `@0` followed by `0;JMP` never advances past address 1: the program
/// counter must oscillate between the two instructions forever.
#[test]
fn infinite_loop_oscillates() {
    let program = [
        Instruction::A(0),
        Instruction::C {
            am: false,
            alu: AluFlag::ZERO,
            dest: (false, false, false),
            jump: JumpCondition::Always,
        },
    ];

    let mut computer = Computer::new(rom_from(&program));
    let mut seen_pcs = Vec::new();
    for _ in 0..8 {
        computer.tick(false);
        seen_pcs.push(computer.pc());
    }

    assert_eq!(seen_pcs, vec![1, 0, 1, 0, 1, 0, 1, 0]);
}

#[test]
fn reset_returns_pc_to_zero() {
    let program = [Instruction::A(5), Instruction::A(5), Instruction::A(5)];
    let mut computer = Computer::new(rom_from(&program));
    computer.tick(false);
    computer.tick(false);
    assert_eq!(computer.pc(), 2);
    computer.tick(true);
    assert_eq!(computer.pc(), 0);
}

#[test]
fn reset_method_is_equivalent_to_tick_true() {
    let program = [Instruction::A(5), Instruction::A(5), Instruction::A(5)];
    let mut computer = Computer::new(rom_from(&program));
    computer.tick(false);
    computer.tick(false);
    assert_eq!(computer.pc(), 2);
    computer.reset();
    assert_eq!(computer.pc(), 0);
}

#[test]
fn disassemble_renders_dest_comp_jump() {
    let instruction = Instruction::C {
        am: true,
        alu: AluFlag::X_PLUS_Y,
        dest: (false, true, false),
        jump: JumpCondition::Ge,
    };
    assert_eq!(Computer::disassemble(instruction), "D=D+M;JGE");
}

#[test]
fn disassemble_renders_a_instruction() {
    assert_eq!(Computer::disassemble(Instruction::A(123)), "@123");
}
