//! PDA signer seeds.
//!
//! - Pool authority: `["pool_authority", global_state]`. It mints LST and
//!   controls the pool stake account, so every CPI that moves pool value is
//!   signed with these seeds.
//! - Pool stake: `["pool_stake", global_state]`. Signs only the account
//!   creation in `Initialize`.

use lst_pool_interface::{POOL_AUTHORITY_SEED, POOL_STAKE_SEED};
use pinocchio::{instruction::Seed, pubkey::Pubkey};

/// Generate signer seeds for the pool authority PDA.
pub fn gen_pool_authority_seeds<'a>(global_state: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(POOL_AUTHORITY_SEED),
        Seed::from(global_state.as_ref()),
        Seed::from(&bump[..]),
    ]
}

/// Generate signer seeds for the pool stake PDA.
pub fn gen_pool_stake_seeds<'a>(global_state: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(POOL_STAKE_SEED),
        Seed::from(global_state.as_ref()),
        Seed::from(&bump[..]),
    ]
}
