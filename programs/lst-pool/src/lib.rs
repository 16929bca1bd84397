//! LST Pool Program
//!
//! Pooled-staking ledger. Users deposit SOL and receive a liquid staking token
//! (LST) representing a proportional claim on the pool; holders redeem LST for
//! SOL as the pool's stake grows through compounded validator rewards.
//!
//! # Architecture
//!
//! ```text
//! entrypoint ─▶ processor ─▶ instructions::process ─▶ handlers
//!                  │                                    │
//!                  │ AccountLedger (LedgerStorage)      ├─ authority
//!                  │ CpiEffects (PoolEffects)           ├─ exchange_rate
//!                  ▼                                    └─ state
//!             accounts / CPIs
//! ```
//!
//! The ledger core (`state`, `exchange_rate`, `authority`, `instructions`)
//! sees its environment only through the ports in [`ports`], so it runs the
//! same against real accounts and against in-memory test doubles.
//!
//! # Exchange Rate Model
//!
//! - Rate: `total_staked_sol / total_lst_supply`, 1:1 while the pool is empty
//! - Stake: `minted = floor(lamports * supply / staked)`
//! - Withdraw: `payout = floor(lst * staked / supply)`
//! - AutoCompound: `staked += rewards`, supply unchanged
//!
//! # Instructions
//!
//! | Opcode | Instruction | Signer |
//! |---|---|---|
//! | 0 | `Initialize` | future admin |
//! | 1 | `Stake` | depositor |
//! | 2 | `Withdraw` | token holder |
//! | 3 | `AutoCompound` | admin |
//! | 4 | `Redelegate` | admin |
//! | 5 | `ProposeAdmin` | admin |
//! | 6 | `AcceptAdmin` | pending admin |

#![cfg_attr(not(test), no_std)]

pub mod accounts;
pub mod authority;
pub mod cpi;
pub mod errors;
pub mod exchange_rate;
pub mod instructions;
pub mod pda;
pub mod ports;
pub mod processor;
pub mod stake;
pub mod state;

pub use errors::{LstPoolError, decode_error};
pub use instructions::{InstructionContext, LstPoolInstruction, process, process_instruction_data};
pub use state::GlobalState;

/// Program ID, selected at compile-time by network feature.
pub const ID: pinocchio::pubkey::Pubkey = pinocchio_pubkey::from_str(lst_program_ids::LST_POOL_ID);

/// Check whether `id` is this program's ID.
pub fn check_id(id: &pinocchio::pubkey::Pubkey) -> bool {
    *id == ID
}

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint {
    pinocchio::program_entrypoint!(crate::processor::process_instruction);
    pinocchio::default_allocator!();
    pinocchio::nostd_panic_handler!();
}
