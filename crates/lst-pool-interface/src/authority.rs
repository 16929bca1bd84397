//! Two-step admin transfer helpers.
//!
//! The current admin proposes a candidate, and the candidate completes the
//! handoff by accepting. Until then the old admin keeps full authority, so a
//! mistyped or unreachable candidate can never lock the pool.
//!
//! # Usage
//!
//! 1. Implement `HasAdmin` for your state type
//! 2. Call `propose_admin_impl` or `accept_admin_impl` from your handler
//!
//! # Example
//!
//! ```ignore
//! impl HasAdmin for GlobalState {
//!     fn admin(&self) -> &Pubkey { &self.admin }
//!     fn admin_mut(&mut self) -> &mut Pubkey { &mut self.admin }
//!     fn pending_admin(&self) -> Option<&Pubkey> { self.pending_admin.as_ref() }
//!     fn set_pending_admin(&mut self, pending: Option<Pubkey>) { self.pending_admin = pending; }
//! }
//!
//! propose_admin_impl(&mut state, caller, &candidate)?;
//! ```

use pinocchio::pubkey::Pubkey;

/// Failure of a two-step admin transfer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTransferError {
    /// Signer is not the admin (propose) or not the pending admin (accept)
    Unauthorized,
    /// Candidate is already the admin
    SelfProposal,
    /// No transfer is in flight
    NoPendingAdmin,
}

/// Trait for state types that support two-step admin transfer.
pub trait HasAdmin {
    /// Get the current admin pubkey.
    fn admin(&self) -> &Pubkey;
    /// Get mutable reference to the admin pubkey.
    fn admin_mut(&mut self) -> &mut Pubkey;
    /// Get the pending admin, if a transfer is in flight.
    fn pending_admin(&self) -> Option<&Pubkey>;
    /// Replace the pending admin.
    fn set_pending_admin(&mut self, pending: Option<Pubkey>);
}

/// Implements the propose_admin logic for any state implementing `HasAdmin`.
///
/// Sets the pending admin to `candidate`. A second proposal overwrites the
/// first.
///
/// # Errors
/// * `Unauthorized` if `signer` is not the current admin
/// * `SelfProposal` if `candidate` is the current admin
#[inline]
pub fn propose_admin_impl<T: HasAdmin>(
    state: &mut T,
    signer: &Pubkey,
    candidate: &Pubkey,
) -> Result<(), AdminTransferError> {
    if state.admin() != signer {
        return Err(AdminTransferError::Unauthorized);
    }

    if state.admin() == candidate {
        return Err(AdminTransferError::SelfProposal);
    }

    state.set_pending_admin(Some(*candidate));

    Ok(())
}

/// Implements the accept_admin logic for any state implementing `HasAdmin`.
///
/// Completes the two-step transfer by moving the pending admin to admin.
///
/// # Errors
/// * `NoPendingAdmin` if no transfer is in flight
/// * `Unauthorized` if `signer` is not the pending admin
#[inline]
pub fn accept_admin_impl<T: HasAdmin>(
    state: &mut T,
    signer: &Pubkey,
) -> Result<(), AdminTransferError> {
    let pending = *state
        .pending_admin()
        .ok_or(AdminTransferError::NoPendingAdmin)?;

    if pending != *signer {
        return Err(AdminTransferError::Unauthorized);
    }

    *state.admin_mut() = pending;
    state.set_pending_admin(None);

    Ok(())
}
