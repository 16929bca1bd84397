//! `Initialize` instruction handler.
//!
//! Creates the global state record and opens the pool stake account on the
//! first validator. The signer becomes the admin; the LST mint and first
//! validator come from the accounts passed with the instruction.

use pinocchio::{ProgramResult, pubkey::Pubkey};
use pinocchio_log::log;

use super::{InstructionContext, commit};
use crate::{
    LstPoolError, authority,
    ports::{LedgerStorage, LstMint, StakeDelegation},
    state::GlobalState,
};

const ZERO_KEY: Pubkey = [0u8; 32];

/// Process initialize instruction.
///
/// 1. Storage must hold the all-zero record
/// 2. Caller must sign and becomes admin
/// 3. Validator must be non-zero
/// 4. Mint must be supplied, non-zero and have zero supply
/// 5. Opens the pool stake account delegated to the validator
///
/// # Errors
/// `AlreadyInitialized`, `MalformedAccount`, `Unauthorized`,
/// `InvalidValidator`, `InvalidAccount`, `SupplyMismatch`, or any error of
/// opening the pool stake.
pub fn process_initialize<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: LstMint + StakeDelegation + ?Sized,
{
    let existing = GlobalState::decode(&ledger.read()?)?;
    if !existing.is_empty_record() {
        log!("initialize: global state already initialized");
        return Err(LstPoolError::AlreadyInitialized.into());
    }

    authority::require_signer(ctx)?;

    let validator = ctx.validator.unwrap_or(ZERO_KEY);
    if validator == ZERO_KEY {
        log!("initialize: validator must be non-zero");
        return Err(LstPoolError::InvalidValidator.into());
    }

    let lst_mint = match ctx.lst_mint {
        Some(mint) if mint != ZERO_KEY => mint,
        _ => {
            log!("initialize: missing lst mint");
            return Err(LstPoolError::InvalidAccount.into());
        }
    };

    // Supply must start at zero so the ledger mirrors the mint from the first stake
    let supply = effects.supply()?;
    if supply != 0 {
        log!("initialize: lst mint already has supply {}", supply);
        return Err(LstPoolError::SupplyMismatch.into());
    }

    let state = GlobalState::new(ctx.caller, validator, lst_mint);

    effects.open_pool_stake(&validator)?;

    commit(ledger, &existing, &state)?;

    log!("initialize: pool created");
    Ok(())
}
