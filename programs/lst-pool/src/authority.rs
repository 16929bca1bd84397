//! Authority checks.
//!
//! Every identity a handler acts for must appear in the instruction's signer
//! set. Administrative operations additionally require that identity to be
//! the recorded admin.

use lst_pool_interface::authority::{accept_admin_impl, propose_admin_impl};
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::{LstPoolError, instructions::InstructionContext, state::GlobalState};

/// Require the instruction's caller to have signed.
///
/// # Errors
/// `Unauthorized` if the caller is not in the signer set.
pub fn require_signer(ctx: &InstructionContext) -> Result<(), LstPoolError> {
    if !ctx.signers.has_signed(&ctx.caller) {
        log!("authority: caller did not sign");
        return Err(LstPoolError::Unauthorized);
    }
    Ok(())
}

/// Require the instruction's caller to be the signing admin.
///
/// # Errors
/// `Unauthorized` if the caller did not sign or is not the admin.
pub fn require_admin(state: &GlobalState, ctx: &InstructionContext) -> Result<(), LstPoolError> {
    require_signer(ctx)?;
    if ctx.caller != state.admin {
        log!("authority: caller is not the admin");
        return Err(LstPoolError::Unauthorized);
    }
    Ok(())
}

/// Start a two-phase admin transfer to `candidate`.
///
/// # Errors
/// `Unauthorized` unless the signing caller is the admin, `SelfProposal` if
/// `candidate` already is the admin.
pub fn propose_admin(
    state: &mut GlobalState,
    ctx: &InstructionContext,
    candidate: &Pubkey,
) -> Result<(), LstPoolError> {
    require_signer(ctx)?;
    propose_admin_impl(state, &ctx.caller, candidate)?;
    Ok(())
}

/// Complete a two-phase admin transfer.
///
/// # Errors
/// `NoPendingAdmin` if no transfer is in flight, `Unauthorized` unless the
/// signing caller is the pending admin.
pub fn accept_admin(state: &mut GlobalState, ctx: &InstructionContext) -> Result<(), LstPoolError> {
    if state.pending_admin.is_none() {
        return Err(LstPoolError::NoPendingAdmin);
    }
    require_signer(ctx)?;
    accept_admin_impl(state, &ctx.caller)?;
    Ok(())
}
