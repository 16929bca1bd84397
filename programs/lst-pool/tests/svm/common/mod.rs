//! Shared helpers for the LiteSVM tests.

#![allow(dead_code)]

pub mod instructions;
pub mod pda;

pub use instructions::*;
pub use mock_accounts::*;
pub use pda::*;
pub use setup::*;
