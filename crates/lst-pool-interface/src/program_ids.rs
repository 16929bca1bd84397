//! Program ID constants and PDA helpers.
//!
//! The pool program ID is imported from the `lst-program-ids` crate, which is
//! the single source of truth for the address. The correct address is selected
//! at compile-time based on the network feature.

use pinocchio::pubkey::Pubkey;

// =============================================================================
// Program IDs
// =============================================================================

/// LST pool program ID.
pub const LST_POOL_PROGRAM_ID: Pubkey = five8_const::decode_32_const(lst_program_ids::LST_POOL_ID);

/// SPL Token program ID.
pub const SPL_TOKEN_PROGRAM_ID: Pubkey =
    five8_const::decode_32_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// System program ID.
pub const SYSTEM_PROGRAM_ID: Pubkey = [0u8; 32];

/// Native stake program ID.
pub const STAKE_PROGRAM_ID: Pubkey =
    five8_const::decode_32_const("Stake11111111111111111111111111111111111111");

/// Native vote program ID. Validator identities are vote accounts it owns.
pub const VOTE_PROGRAM_ID: Pubkey =
    five8_const::decode_32_const("Vote111111111111111111111111111111111111111");

/// Stake config account consumed by `DelegateStake`.
pub const STAKE_CONFIG_ID: Pubkey =
    five8_const::decode_32_const("StakeConfig11111111111111111111111111111111");

/// Clock sysvar.
pub const CLOCK_SYSVAR_ID: Pubkey =
    five8_const::decode_32_const("SysvarC1ock11111111111111111111111111111111");

/// Stake history sysvar.
pub const STAKE_HISTORY_SYSVAR_ID: Pubkey =
    five8_const::decode_32_const("SysvarStakeHistory1111111111111111111111111");

/// Rent sysvar, consumed by the stake program's `Initialize`.
pub const RENT_SYSVAR_ID: Pubkey =
    five8_const::decode_32_const("SysvarRent111111111111111111111111111111111");

// =============================================================================
// PDA Seeds
// =============================================================================

/// Pool authority PDA seed.
///
/// Full seeds: `["pool_authority", global_state]`. The PDA is the LST mint
/// authority and the staker/withdrawer of the pool stake account.
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";

/// Derive the pool authority PDA for a global state account.
///
/// Returns (address, bump).
pub fn find_pool_authority_pda(global_state: &Pubkey) -> (Pubkey, u8) {
    pinocchio::pubkey::find_program_address(
        &[POOL_AUTHORITY_SEED, global_state.as_ref()],
        &LST_POOL_PROGRAM_ID,
    )
}

/// Pool stake account PDA seed.
///
/// Full seeds: `["pool_stake", global_state]`. `Initialize` creates the
/// account at this address; every later instruction only accepts this address
/// as the pool stake.
pub const POOL_STAKE_SEED: &[u8] = b"pool_stake";

/// Derive the pool stake account PDA for a global state account.
///
/// Returns (address, bump).
pub fn find_pool_stake_pda(global_state: &Pubkey) -> (Pubkey, u8) {
    pinocchio::pubkey::find_program_address(
        &[POOL_STAKE_SEED, global_state.as_ref()],
        &LST_POOL_PROGRAM_ID,
    )
}

// =============================================================================
// Pool Stake
// =============================================================================

/// Lamports the admin delegates when `Initialize` opens the pool stake
/// account, on top of its rent-exempt reserve.
///
/// The stake program refuses to delegate an account with nothing staked, so
/// the pool starts with this base delegation. It is never counted as user
/// stake or as rewards.
pub const POOL_STAKE_BASE_LAMPORTS: u64 = 1_000_000_000;

/// Check if a program ID is the LST pool program.
pub fn is_lst_pool_program(program_id: &Pubkey) -> bool {
    *program_id == LST_POOL_PROGRAM_ID
}
