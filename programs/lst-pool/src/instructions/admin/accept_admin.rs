//! `AcceptAdmin` instruction handler.
//!
//! Completes the two-step admin transfer. Must be called by the pending admin.

use pinocchio::ProgramResult;
use pinocchio_log::log;

use crate::{
    authority,
    instructions::{InstructionContext, commit, load_initialized},
    ports::LedgerStorage,
};

/// Process accept admin instruction.
///
/// # Errors
/// `NoPendingAdmin` if no transfer is in flight, `Unauthorized` unless the
/// pending admin signed.
pub fn process_accept_admin<L>(ledger: &mut L, ctx: &InstructionContext) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
{
    let loaded = load_initialized(ledger)?;

    let mut state = loaded;
    authority::accept_admin(&mut state, ctx)?;

    commit(ledger, &loaded, &state)?;

    log!("accept_admin: admin transferred");
    Ok(())
}
