//! `Redelegate` instruction handler.
//!
//! Moves the pool's entire stake to a new validator. The ledger field and the
//! stake move succeed or fail together.

use pinocchio::{ProgramResult, pubkey::Pubkey};
use pinocchio_log::log;

use super::{InstructionContext, commit, load_initialized};
use crate::{
    LstPoolError, authority,
    ports::{LedgerStorage, StakeDelegation},
};

const ZERO_KEY: Pubkey = [0u8; 32];

/// Process a redelegate instruction.
///
/// # Errors
/// `Unauthorized` unless the admin signed, `InvalidValidator` for a zero
/// validator or a vote account that does not match, `NoOpRedelegate` if the
/// validator is unchanged, or any error of the stake move.
pub fn process_redelegate<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    new_validator: &Pubkey,
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: StakeDelegation + ?Sized,
{
    let loaded = load_initialized(ledger)?;
    authority::require_admin(&loaded, ctx)?;

    if *new_validator == ZERO_KEY {
        log!("redelegate: validator must be non-zero");
        return Err(LstPoolError::InvalidValidator.into());
    }

    if *new_validator == loaded.current_validator_pubkey {
        log!("redelegate: already delegated to this validator");
        return Err(LstPoolError::NoOpRedelegate.into());
    }

    if let Some(passed) = ctx.validator {
        if passed != *new_validator {
            log!("redelegate: vote account does not match new validator");
            return Err(LstPoolError::InvalidValidator.into());
        }
    }

    let mut state = loaded;
    state.current_validator_pubkey = *new_validator;

    effects.redelegate(
        &loaded.current_validator_pubkey,
        new_validator,
        loaded.total_staked_sol,
    )?;

    commit(ledger, &loaded, &state)?;

    log!("redelegate: moved {} lamports", loaded.total_staked_sol);
    Ok(())
}
