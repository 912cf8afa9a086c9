//! Two-pass assembly: resolve word counts and labels, then emit machine
//! words instruction by instruction.

use hack_core::alu::AluFlag;
use hack_core::decode::{self, Instruction, JumpCondition};
use hack_core::memory::Rom;

use crate::ast::{parse_line, strip_comment, Arg, Line};
use crate::error::{AssembleError, AssemblerError, ParseError};
use crate::symbols::SymbolTable;

const MAX_ADDRESS: i32 = 1 << 15;

/// Assembles a complete program into its sequence of 16-bit machine words.
pub fn assemble(source: &str) -> Result<Vec<u16>, AssemblerError> {
    let mut symbols = SymbolTable::new();
    let mut pc: i32 = 0;
    let mut program = Vec::new();

    for (offset, raw) in source.lines().enumerate() {
        let line_no = offset + 1;
        let text = match strip_comment(raw) {
            Some(text) => text,
            None => continue,
        };
        let line = parse_line(text).map_err(|err: ParseError| AssemblerError::Parse {
            line: line_no,
            source: err,
        })?;

        match line {
            Line::Label(name) => symbols.define_label(&name, pc),
            Line::Instruction { opcode, args } => {
                let count = word_count(line_no, &opcode, &args, &mut symbols)?;
                pc += count;
                program.push((line_no, opcode, args));
            }
        }
    }

    let mut words = Vec::new();
    for (line_no, opcode, args) in program {
        for instruction in emit(line_no, &opcode, &args, &mut symbols)? {
            words.push(decode::encode(&instruction));
        }
    }

    Ok(words)
}

/// Assembles and pads the result into a fresh [`Rom`] image.
pub fn assemble_rom(source: &str) -> Result<Rom, AssemblerError> {
    let words = assemble(source)?;
    let program: Vec<i32> = words.into_iter().map(i32::from).collect();
    let image = hack_core::bits::create_image(&program);
    Ok(Rom::new(image).expect("create_image always pads to ROM_SIZE"))
}

/// The number of machine words one source line reserves, and the point at
/// which any `$symbol` it mentions is allocated a variable address (labels
/// are resolved separately, from their own definition line).
fn word_count(
    line_no: usize,
    opcode: &str,
    args: &[Arg],
    symbols: &mut SymbolTable,
) -> Result<i32, AssembleError> {
    for arg in args {
        if let Arg::Symbol(name) = arg {
            symbols.resolve_or_allocate(name);
        }
    }

    let has_symbol_or_label = args
        .iter()
        .any(|a| matches!(a, Arg::Symbol(_) | Arg::Label(_)));

    match opcode {
        "STR" => {
            if matches!(args.first(), Some(Arg::Register(r)) if r == "A") {
                Ok(1)
            } else {
                Ok(if has_symbol_or_label { 2 } else { 1 })
            }
        }
        "MOV" | "AND" | "OR" | "ADD" | "SUB" => Ok(1),
        "INC" | "DEC" | "NOT" | "NEG" => Ok(if has_symbol_or_label { 2 } else { 1 }),
        "JMP" | "JGT" | "JEQ" | "JGE" | "JLT" | "JNE" | "JLE" => Ok(2),
        other => Err(AssembleError::UnknownOpcode {
            line: line_no,
            opcode: other.to_string(),
        }),
    }
}

fn emit(
    line_no: usize,
    opcode: &str,
    args: &[Arg],
    symbols: &mut SymbolTable,
) -> Result<Vec<Instruction>, AssembleError> {
    match opcode {
        "STR" => store(line_no, args, symbols),
        "MOV" => mov(line_no, args),
        "INC" => unary(line_no, args, AluFlag::X_PLUS_1, AluFlag::Y_PLUS_1, symbols),
        "DEC" => unary(line_no, args, AluFlag::X_MINUS_1, AluFlag::Y_MINUS_1, symbols),
        "NOT" => unary(line_no, args, AluFlag::NOT_X, AluFlag::NOT_Y, symbols),
        "NEG" => unary(line_no, args, AluFlag::MINUS_X, AluFlag::MINUS_Y, symbols),
        "AND" => binary(line_no, args, AluFlag::X_AND_Y),
        "OR" => binary(line_no, args, AluFlag::X_OR_Y),
        "ADD" => binary(line_no, args, AluFlag::X_PLUS_Y),
        "SUB" => subtract(line_no, args),
        "JMP" => jump(line_no, args, symbols, None),
        "JGT" => jump(line_no, args, symbols, Some(JumpCondition::Gt)),
        "JEQ" => jump(line_no, args, symbols, Some(JumpCondition::Eq)),
        "JGE" => jump(line_no, args, symbols, Some(JumpCondition::Ge)),
        "JLT" => jump(line_no, args, symbols, Some(JumpCondition::Lt)),
        "JNE" => jump(line_no, args, symbols, Some(JumpCondition::Ne)),
        "JLE" => jump(line_no, args, symbols, Some(JumpCondition::Le)),
        other => Err(AssembleError::UnknownOpcode {
            line: line_no,
            opcode: other.to_string(),
        }),
    }
}

fn require_args<'a>(
    line_no: usize,
    opcode: &str,
    args: &'a [Arg],
    expected: &'static str,
    ok: impl Fn(usize) -> bool,
) -> Result<&'a [Arg], AssembleError> {
    if ok(args.len()) {
        Ok(args)
    } else {
        Err(AssembleError::WrongArgumentCount {
            line: line_no,
            opcode: opcode.to_string(),
            expected,
            got: args.len(),
        })
    }
}

/// `STR A, N` / `STR A, $v` / `STR $v, K`.
fn store(
    line_no: usize,
    args: &[Arg],
    symbols: &mut SymbolTable,
) -> Result<Vec<Instruction>, AssembleError> {
    let args = require_args(line_no, "STR", args, "2", |n| n == 2)?;

    if let Arg::Symbol(name) = &args[0] {
        let address = symbols.resolve_or_allocate(name);
        let constant = match &args[1] {
            Arg::Number(0) => AluFlag::ZERO,
            Arg::Number(1) => AluFlag::ONE,
            Arg::Number(-1) => AluFlag::MINUS_ONE,
            other => {
                return Err(AssembleError::InvalidConstant {
                    line: line_no,
                    token: describe(other),
                })
            }
        };
        return Ok(vec![
            Instruction::A(address as u16),
            Instruction::C {
                am: false,
                alu: constant,
                dest: (false, false, true),
                jump: JumpCondition::Never,
            },
        ]);
    }

    if !matches!(&args[0], Arg::Register(r) if r == "A") {
        return Err(AssembleError::InvalidDestination {
            line: line_no,
            token: describe(&args[0]),
        });
    }

    match &args[1] {
        Arg::Symbol(name) => {
            let address = symbols.resolve_or_allocate(name);
            Ok(vec![Instruction::A(address as u16)])
        }
        Arg::Number(n) if *n >= 0 => {
            if *n >= MAX_ADDRESS {
                return Err(AssembleError::LiteralTooLarge { line: line_no, value: *n });
            }
            Ok(vec![Instruction::A(*n as u16)])
        }
        other => Err(AssembleError::NotNonNegative {
            line: line_no,
            token: describe(other),
        }),
    }
}

/// `MOV X, Y`.
fn mov(line_no: usize, args: &[Arg]) -> Result<Vec<Instruction>, AssembleError> {
    let args = require_args(line_no, "MOV", args, "2", |n| n == 2)?;
    let dest = encode_destination(line_no, &args[0])?;
    let (am, alu) = select_register(line_no, &args[1], AluFlag::X, AluFlag::Y)?;
    Ok(vec![Instruction::C { am, alu, dest, jump: JumpCondition::Never }])
}

/// `INC`/`DEC`/`NOT`/`NEG`, each `Z, X` with `X` optionally a `$symbol`, or
/// the single-operand shorthand where the destination is also the source
/// (and, for a bare `$v`, the shorthand's destination is M, not the symbol
/// address itself, since a variable is a RAM cell, not a register).
fn unary(
    line_no: usize,
    args: &[Arg],
    op_x: AluFlag,
    op_y: AluFlag,
    symbols: &mut SymbolTable,
) -> Result<Vec<Instruction>, AssembleError> {
    let args = require_args(line_no, "unary op", args, "1 or 2", |n| n == 1 || n == 2)?;
    let (dest_arg, src_arg) = if args.len() == 2 {
        (&args[0], &args[1])
    } else {
        (&args[0], &args[0])
    };

    if let Arg::Symbol(name) = src_arg {
        let address = symbols.resolve_or_allocate(name);
        let dest = if dest_arg == src_arg {
            (false, false, true)
        } else {
            encode_destination(line_no, dest_arg)?
        };
        return Ok(vec![
            Instruction::A(address as u16),
            Instruction::C { am: true, alu: op_y, dest, jump: JumpCondition::Never },
        ]);
    }

    let dest = encode_destination(line_no, dest_arg)?;
    let (am, alu) = select_register(line_no, src_arg, op_x, op_y)?;
    Ok(vec![Instruction::C { am, alu, dest, jump: JumpCondition::Never }])
}

/// `AND`/`OR`/`ADD Z, D, Y`: the first source operand must be D.
fn binary(line_no: usize, args: &[Arg], alu: AluFlag) -> Result<Vec<Instruction>, AssembleError> {
    let args = require_args(line_no, "binary op", args, "3", |n| n == 3)?;
    let dest = encode_destination(line_no, &args[0])?;
    if !matches!(&args[1], Arg::Register(r) if r == "D") {
        return Err(AssembleError::BinaryOpFirstArgNotD { line: line_no });
    }
    let am = match &args[2] {
        Arg::Register(r) if r == "A" => false,
        Arg::Register(r) if r == "M" => true,
        other => {
            return Err(AssembleError::UnrecognisedRegister {
                line: line_no,
                token: describe(other),
            })
        }
    };
    Ok(vec![Instruction::C { am, alu, dest, jump: JumpCondition::Never }])
}

/// `SUB Z, X, Y`: exactly one of `X`/`Y` must be D; the flag set is chosen
/// so the result is always `X - Y`.
fn subtract(line_no: usize, args: &[Arg]) -> Result<Vec<Instruction>, AssembleError> {
    let args = require_args(line_no, "SUB", args, "3", |n| n == 3)?;
    let dest = encode_destination(line_no, &args[0])?;

    let is_d = |arg: &Arg| matches!(arg, Arg::Register(r) if r == "D");
    let (am, alu) = if is_d(&args[1]) && !is_d(&args[2]) {
        match &args[2] {
            Arg::Register(r) if r == "A" => (false, AluFlag::X_MINUS_Y),
            Arg::Register(r) if r == "M" => (true, AluFlag::X_MINUS_Y),
            other => {
                return Err(AssembleError::UnrecognisedRegister {
                    line: line_no,
                    token: describe(other),
                })
            }
        }
    } else if is_d(&args[2]) && !is_d(&args[1]) {
        match &args[1] {
            Arg::Register(r) if r == "A" => (false, AluFlag::Y_MINUS_X),
            Arg::Register(r) if r == "M" => (true, AluFlag::Y_MINUS_X),
            other => {
                return Err(AssembleError::UnrecognisedRegister {
                    line: line_no,
                    token: describe(other),
                })
            }
        }
    } else {
        return Err(AssembleError::BinaryOpFirstArgNotD { line: line_no });
    };

    Ok(vec![Instruction::C { am, alu, dest, jump: JumpCondition::Never }])
}

/// `JMP @L` and the six conditional `J?? X, @L` mnemonics.
fn jump(
    line_no: usize,
    args: &[Arg],
    symbols: &SymbolTable,
    condition: Option<JumpCondition>,
) -> Result<Vec<Instruction>, AssembleError> {
    let (label, am, alu, jump) = match condition {
        None => {
            if args.len() > 1 {
                return Err(AssembleError::JumpTooManyArguments { line: line_no });
            }
            let label = require_args(line_no, "JMP", args, "1", |n| n == 1)?;
            let name = label_name(line_no, &label[0])?;
            (name, false, AluFlag::ZERO, JumpCondition::Always)
        }
        Some(condition) => {
            let args = require_args(line_no, "conditional jump", args, "2", |n| n == 2)?;
            let name = label_name(line_no, &args[1])?;
            let (am, alu) = select_register(line_no, &args[0], AluFlag::X, AluFlag::Y)?;
            (name, am, alu, condition)
        }
    };

    let address = symbols
        .get(&label)
        .ok_or_else(|| AssembleError::UndefinedSymbol { line: line_no, name: label.clone() })?;

    Ok(vec![
        Instruction::A(address as u16),
        Instruction::C { am, alu, dest: (false, false, false), jump },
    ])
}

fn label_name(line_no: usize, arg: &Arg) -> Result<String, AssembleError> {
    match arg {
        Arg::Label(name) => Ok(name.clone()),
        other => Err(AssembleError::UnrecognisedRegister {
            line: line_no,
            token: describe(other),
        }),
    }
}

fn encode_destination(line_no: usize, arg: &Arg) -> Result<(bool, bool, bool), AssembleError> {
    let token = match arg {
        Arg::Register(token) => token,
        other => {
            return Err(AssembleError::InvalidDestination {
                line: line_no,
                token: describe(other),
            })
        }
    };

    let (mut a, mut d, mut m) = (false, false, false);
    for ch in token.chars() {
        match ch {
            'A' => a = true,
            'D' => d = true,
            'M' => m = true,
            _ => {
                return Err(AssembleError::InvalidDestination {
                    line: line_no,
                    token: token.clone(),
                })
            }
        }
    }
    Ok((a, d, m))
}

fn select_register(
    line_no: usize,
    arg: &Arg,
    x_flag: AluFlag,
    y_flag: AluFlag,
) -> Result<(bool, AluFlag), AssembleError> {
    match arg {
        Arg::Register(r) if r == "A" => Ok((false, y_flag)),
        Arg::Register(r) if r == "D" => Ok((false, x_flag)),
        Arg::Register(r) if r == "M" => Ok((true, y_flag)),
        other => Err(AssembleError::UnrecognisedRegister {
            line: line_no,
            token: describe(other),
        }),
    }
}

fn describe(arg: &Arg) -> String {
    match arg {
        Arg::Register(r) => r.clone(),
        Arg::Symbol(s) => format!("${}", s),
        Arg::Label(l) => format!("@{}", l),
        Arg::Number(n) => n.to_string(),
    }
}
