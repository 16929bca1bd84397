//! `ProposeAdmin` instruction handler.
//!
//! Initiates a two-step admin transfer by setting the pending admin. Must be
//! called by the current admin. A repeated proposal overwrites the pending
//! admin.

use pinocchio::{ProgramResult, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{
    authority,
    instructions::{InstructionContext, commit, load_initialized},
    ports::LedgerStorage,
};

/// Process propose admin instruction.
///
/// # Errors
/// `Unauthorized` unless the admin signed, `SelfProposal` if `candidate` is
/// the admin.
pub fn process_propose_admin<L>(
    ledger: &mut L,
    ctx: &InstructionContext,
    candidate: &Pubkey,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
{
    let loaded = load_initialized(ledger)?;

    let mut state = loaded;
    authority::propose_admin(&mut state, ctx, candidate)?;

    commit(ledger, &loaded, &state)?;

    log!("propose_admin: admin transfer initiated");
    Ok(())
}
