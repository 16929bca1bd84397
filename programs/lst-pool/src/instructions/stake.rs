//! `Stake` instruction handler.
//!
//! Deposits lamports into the pool and mints LST at the current exchange rate.

use pinocchio::ProgramResult;
use pinocchio_log::log;

use super::{InstructionContext, commit, load_initialized, require_pool_mint};
use crate::{
    LstPoolError, authority,
    exchange_rate::lamports_to_lst,
    ports::{LamportVault, LedgerStorage, LstMint},
};

/// Process a stake instruction.
///
/// 1. Validates the depositor signed and the mint is the pool's mint
/// 2. Converts `lamports` to LST, flooring
/// 3. Moves the lamports into the pool and mints the LST to the depositor
/// 4. Commits the new totals
///
/// # Errors
/// `ZeroAmount`, `MintWouldBeZero`, `SupplyMismatch`, `ArithmeticOverflow`,
/// authority and account errors, or any error of the external effects.
pub fn process_stake<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    lamports: u64,
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: LstMint + LamportVault + ?Sized,
{
    let loaded = load_initialized(ledger)?;
    authority::require_signer(ctx)?;
    require_pool_mint(&loaded, ctx)?;

    if lamports == 0 {
        log!("stake: amount must be greater than zero");
        return Err(LstPoolError::ZeroAmount.into());
    }

    if effects.supply()? != loaded.total_lst_supply {
        log!("stake: mint supply does not match ledger");
        return Err(LstPoolError::SupplyMismatch.into());
    }

    let minted = lamports_to_lst(lamports, &loaded)?;
    if minted == 0 {
        log!("stake: deposit of {} lamports mints zero lst", lamports);
        return Err(LstPoolError::MintWouldBeZero.into());
    }

    let mut state = loaded;
    state.total_staked_sol = state
        .total_staked_sol
        .checked_add(lamports)
        .ok_or(LstPoolError::ArithmeticOverflow)?;
    state.total_lst_supply = state
        .total_lst_supply
        .checked_add(minted)
        .ok_or(LstPoolError::ArithmeticOverflow)?;

    effects.deposit(&ctx.caller, lamports)?;
    effects.mint_to(&ctx.caller, minted)?;

    commit(ledger, &loaded, &state)?;

    log!("stake: {} lamports minted {} lst", lamports, minted);
    Ok(())
}
