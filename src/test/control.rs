use crate::alu::AluFlag;
use crate::control::{jump_signal, write_control};
use crate::decode::{Instruction, JumpCondition};

#[test]
fn a_instruction_only_loads_a() {
    assert_eq!(write_control(&Instruction::A(5)), (true, false, false));
    assert!(!jump_signal(&Instruction::A(5), true, true));
}

#[test]
fn c_instruction_dest_bits_pass_through() {
    let instruction = Instruction::C {
        am: false,
        alu: AluFlag::X,
        dest: (true, false, true),
        jump: JumpCondition::Never,
    };
    assert_eq!(write_control(&instruction), (true, false, true));
}

#[test]
fn c_instruction_jump_depends_on_flags() {
    let instruction = Instruction::C {
        am: false,
        alu: AluFlag::X_MINUS_Y,
        dest: (false, false, false),
        jump: JumpCondition::Lt,
    };
    assert!(jump_signal(&instruction, false, true));
    assert!(!jump_signal(&instruction, false, false));
}
