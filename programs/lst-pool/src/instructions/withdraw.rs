//! `Withdraw` instruction handler.
//!
//! Burns LST and pays out lamports at the current exchange rate.

use pinocchio::ProgramResult;
use pinocchio_log::log;

use super::{InstructionContext, commit, load_initialized, require_pool_mint};
use crate::{
    LstPoolError, authority,
    exchange_rate::lst_to_lamports,
    ports::{LamportVault, LedgerStorage, LstMint},
};

/// Process a withdraw instruction.
///
/// 1. Validates the holder signed and the mint is the pool's mint
/// 2. Converts `lst_amount` to lamports, flooring
/// 3. Burns the LST from the holder and pays the lamports out
/// 4. Commits the new totals
///
/// # Errors
/// `ZeroAmount`, `InsufficientSupply`, `PayoutWouldBeZero`,
/// `InsufficientStake`, `SupplyMismatch`, `DivisionByZero`, authority and
/// account errors, or any error of the external effects.
pub fn process_withdraw<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    lst_amount: u64,
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: LstMint + LamportVault + ?Sized,
{
    let loaded = load_initialized(ledger)?;
    authority::require_signer(ctx)?;
    require_pool_mint(&loaded, ctx)?;

    if lst_amount == 0 {
        log!("withdraw: amount must be greater than zero");
        return Err(LstPoolError::ZeroAmount.into());
    }

    if lst_amount > loaded.total_lst_supply {
        log!(
            "withdraw: {} lst exceeds supply {}",
            lst_amount,
            loaded.total_lst_supply
        );
        return Err(LstPoolError::InsufficientSupply.into());
    }

    if effects.supply()? != loaded.total_lst_supply {
        log!("withdraw: mint supply does not match ledger");
        return Err(LstPoolError::SupplyMismatch.into());
    }

    let payout = lst_to_lamports(lst_amount, &loaded)?;
    if payout == 0 {
        log!("withdraw: {} lst pays out zero lamports", lst_amount);
        return Err(LstPoolError::PayoutWouldBeZero.into());
    }

    if payout > loaded.total_staked_sol {
        log!("withdraw: payout exceeds tracked stake");
        return Err(LstPoolError::InsufficientStake.into());
    }

    let mut state = loaded;
    state.total_staked_sol = state
        .total_staked_sol
        .checked_sub(payout)
        .ok_or(LstPoolError::InsufficientStake)?;
    state.total_lst_supply = state
        .total_lst_supply
        .checked_sub(lst_amount)
        .ok_or(LstPoolError::InsufficientSupply)?;

    effects.burn_from(&ctx.caller, lst_amount)?;
    effects.pay_out(&ctx.caller, payout)?;

    commit(ledger, &loaded, &state)?;

    log!("withdraw: {} lst paid out {} lamports", lst_amount, payout);
    Ok(())
}
