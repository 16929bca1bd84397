//! `AutoCompound` instruction handler.
//!
//! Folds rewards earned by the pool's stake into `total_staked_sol`. Nothing
//! is minted or burned, so every outstanding LST unit gains value.

use pinocchio::ProgramResult;
use pinocchio_log::log;

use super::{InstructionContext, commit, load_initialized};
use crate::{
    LstPoolError, authority,
    exchange_rate::apply_reward,
    ports::{LedgerStorage, RewardsOracle},
};

/// Process an auto-compound instruction.
///
/// # Errors
/// `Unauthorized` unless the admin signed, `InsufficientSupply` if no LST is
/// outstanding, `NoRewardsAvailable` if the oracle reports nothing new,
/// `ArithmeticOverflow`, or any oracle error.
pub fn process_auto_compound<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: RewardsOracle + ?Sized,
{
    let loaded = load_initialized(ledger)?;
    authority::require_admin(&loaded, ctx)?;

    // Rewards on an empty pool would create stake that no LST can claim
    if loaded.total_lst_supply == 0 {
        log!("auto_compound: no lst outstanding");
        return Err(LstPoolError::InsufficientSupply.into());
    }

    let rewards =
        effects.pending_rewards(&loaded.current_validator_pubkey, loaded.total_staked_sol)?;
    if rewards == 0 {
        log!("auto_compound: no rewards available");
        return Err(LstPoolError::NoRewardsAvailable.into());
    }

    let mut state = loaded;
    apply_reward(rewards, &mut state)?;

    commit(ledger, &loaded, &state)?;

    log!(
        "auto_compound: {} lamports compounded, total staked {}",
        rewards,
        state.total_staked_sol
    );
    Ok(())
}
