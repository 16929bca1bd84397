//! LST Pool Interface
//!
//! Types shared between the LST pool program and anything that talks to it:
//! clients building transactions, other programs invoking it via CPI, and
//! tests.
//!
//! # Modules
//!
//! - [`instruction`]: Instruction discriminators and instruction data builders
//! - [`accounts`]: Account index tables for every instruction
//! - [`layout`]: Byte layout of the global state record
//! - [`authority`]: Two-step admin transfer helpers
//! - [`program_ids`]: Program ID, well-known program IDs and PDA seeds

#![no_std]

pub mod accounts;
pub mod authority;
mod instruction;
mod layout;
mod program_ids;

pub use instruction::*;
pub use layout::*;
pub use program_ids::*;
