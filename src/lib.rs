//! A simulator of the Hack 16-bit computer: the ALU, the A/D/PC registers,
//! ROM/RAM, the instruction decoder, the control logic, and the CPU datapath
//! that wires them together into a machine that executes one instruction per
//! tick.
//!
//! The gate-level NAND/latch construction of the original machine is
//! collapsed into a functional model: each tick computes its outputs from the
//! previous state and then commits them atomically, which is observationally
//! identical to the structural simulation for every instruction this crate
//! accepts.
//!
//! [`computer::Computer`] is the entry point: construct one from a
//! [`memory::Rom`] image and call [`computer::Computer::tick`] to advance it.

extern crate num;
#[macro_use]
extern crate num_derive;

pub mod alu;
pub mod bits;
pub mod computer;
pub mod constants;
pub mod control;
pub mod cpu;
pub mod decode;
pub mod memory;
pub mod register;

pub type Word = u16;
pub type Address = u16;

#[cfg(test)]
mod test;
