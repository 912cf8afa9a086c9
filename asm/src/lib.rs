//! A two-pass assembler for the Hack instruction set: turns mnemonic source
//! into the 16-bit machine words [`hack_core`] executes.
//!
//! Parsing a single line is grammar-driven ([pest]); turning a whole
//! program into machine code is a conventional two-pass assembly: the first
//! pass walks the source computing each line's word count (to fix label
//! addresses) and allocating variable slots, the second emits instructions
//! with every symbol now resolvable.
//!
//! [pest]: https://docs.rs/pest/

mod ast;
mod codegen;
mod error;
mod grammar;
mod symbols;


pub use ast::{Arg, Line};
pub use codegen::{assemble, assemble_rom};
pub use error::{AssembleError, AssemblerError, ParseError};
pub use symbols::SymbolTable;
