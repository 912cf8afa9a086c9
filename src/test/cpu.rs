use crate::alu::AluFlag;
use crate::cpu::Cpu;
use crate::decode::{Instruction, JumpCondition};

#[test]
fn a_instruction_loads_a_and_increments_pc() {
    let mut cpu = Cpu::new();
    let tick = cpu.tick(Instruction::A(5), 0, false);
    assert_eq!(cpu.a(), 5);
    assert_eq!(tick.pc, 1);
    assert!(!tick.write_m);
}

/// The address a C-instruction writes to (and the value it reads for `am`)
/// must be the A register as it stood *before* this tick, never a value
/// this same tick's instruction just computed.
#[test]
fn memory_access_uses_pre_tick_a() {
    let mut cpu = Cpu::new();
    cpu.tick(Instruction::A(5), 0, false);
    assert_eq!(cpu.a(), 5);

    let store_d = Instruction::C {
        am: false,
        alu: AluFlag::ONE,
        dest: (false, true, false),
        jump: JumpCondition::Never,
    };
    cpu.tick(store_d, 0, false);
    assert_eq!(cpu.d(), 1);

    let store_m = Instruction::C {
        am: false,
        alu: AluFlag::X,
        dest: (false, false, true),
        jump: JumpCondition::Never,
    };
    let tick = cpu.tick(store_m, 0, false);
    assert_eq!(tick.address_m, 5);
    assert_eq!(tick.out_m, 1);
    assert!(tick.write_m);
}

#[test]
fn am_bit_selects_in_m_over_a() {
    let mut cpu = Cpu::new();
    cpu.tick(Instruction::A(5), 0, false);

    let load_d_from_m = Instruction::C {
        am: true,
        alu: AluFlag::Y,
        dest: (false, true, false),
        jump: JumpCondition::Never,
    };
    cpu.tick(load_d_from_m, 77, false);
    assert_eq!(cpu.d(), 77);
}

#[test]
fn jump_target_is_pre_tick_a() {
    let mut cpu = Cpu::new();
    cpu.tick(Instruction::A(10), 0, false);

    let jump_always = Instruction::C {
        am: false,
        alu: AluFlag::ZERO,
        dest: (false, false, false),
        jump: JumpCondition::Always,
    };
    let tick = cpu.tick(jump_always, 0, false);
    assert_eq!(tick.pc, 10);
}

#[test]
fn reset_overrides_jump() {
    let mut cpu = Cpu::new();
    cpu.tick(Instruction::A(10), 0, false);

    let jump_always = Instruction::C {
        am: false,
        alu: AluFlag::ZERO,
        dest: (false, false, false),
        jump: JumpCondition::Always,
    };
    let tick = cpu.tick(jump_always, 0, true);
    assert_eq!(tick.pc, 0);
}
