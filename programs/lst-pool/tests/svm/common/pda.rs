//! PDA derivation and well-known program IDs for the LiteSVM tests.

use lst_pool_interface::{POOL_AUTHORITY_SEED, POOL_STAKE_SEED};
use solana_sdk::pubkey::Pubkey;

use super::setup::LST_POOL_PROGRAM_ID;

// ============================================================================
// LST Pool PDAs
// ============================================================================

/// Derive the pool authority PDA
pub fn find_pool_authority_pda(global_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_AUTHORITY_SEED, global_state.as_ref()],
        &LST_POOL_PROGRAM_ID,
    )
}

/// Derive the pool stake PDA
pub fn find_pool_stake_pda(global_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_STAKE_SEED, global_state.as_ref()], &LST_POOL_PROGRAM_ID)
}

// ============================================================================
// Common Constants
// ============================================================================

pub const SYSTEM_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(lst_pool_interface::SYSTEM_PROGRAM_ID);
pub const SPL_TOKEN_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(lst_pool_interface::SPL_TOKEN_PROGRAM_ID);
pub const STAKE_PROGRAM_ID: Pubkey = Pubkey::new_from_array(lst_pool_interface::STAKE_PROGRAM_ID);
pub const VOTE_PROGRAM_ID: Pubkey = Pubkey::new_from_array(lst_pool_interface::VOTE_PROGRAM_ID);
pub const STAKE_CONFIG_ID: Pubkey = Pubkey::new_from_array(lst_pool_interface::STAKE_CONFIG_ID);
pub const RENT_SYSVAR_ID: Pubkey = Pubkey::new_from_array(lst_pool_interface::RENT_SYSVAR_ID);
pub const CLOCK_SYSVAR_ID: Pubkey = Pubkey::new_from_array(lst_pool_interface::CLOCK_SYSVAR_ID);
pub const STAKE_HISTORY_SYSVAR_ID: Pubkey =
    Pubkey::new_from_array(lst_pool_interface::STAKE_HISTORY_SYSVAR_ID);
