//! Single source of truth for the LST pool program ID.
//!
//! The ID is a `&'static str` so it can be decoded at compile time by
//! `five8_const` in the interface crate and compared by off-chain tooling.
//!
//! # Feature Flags
//!
//! - `devnet` - Use the devnet program ID
//! - `mainnet` - Use the mainnet program ID (default)
//! - `localnet` - Use the localnet program ID (same as mainnet)

#![no_std]

// =============================================================================
// LST Pool Program ID
// =============================================================================

/// LST pool program ID (devnet).
///
/// Pooled-staking ledger that mints a liquid staking token against delegated SOL.
#[cfg(feature = "devnet")]
pub const LST_POOL_ID: &str = "DLstPoo3cw9KTAb8dLcukC7edhDQ7cn5d4gEYkbUrMW";

/// LST pool program ID (mainnet/localnet).
///
/// Pooled-staking ledger that mints a liquid staking token against delegated SOL.
#[cfg(not(feature = "devnet"))]
pub const LST_POOL_ID: &str = "LstPooMASi45ub7Qe4ZE36UT5G6cU4ud8Fhhe4deS4F";
