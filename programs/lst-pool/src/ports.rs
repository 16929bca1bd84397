//! Capability ports between the ledger core and its environment.
//!
//! Handlers never touch accounts directly. They read and write the record
//! through [`LedgerStorage`], check signers through [`SignerSet`], and issue
//! every external effect through the capability traits below. The on-chain
//! adapter implements them with CPIs; tests implement them in memory.

use lst_pool_interface::GLOBAL_STATE_LEN;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};

/// Fixed image of the global state record.
pub type RecordBytes = [u8; GLOBAL_STATE_LEN];

/// Read/write access to the global state record.
///
/// Missing, foreign-owned, read-only or wrongly sized storage is reported as
/// `InvalidAccount`.
pub trait LedgerStorage {
    /// Copy of the current record.
    fn read(&self) -> Result<RecordBytes, ProgramError>;
    /// Replace the record.
    fn write(&mut self, bytes: &RecordBytes) -> ProgramResult;
}

/// Identities that authorized the current instruction.
pub trait SignerSet {
    /// True if `key` signed the instruction.
    fn has_signed(&self, key: &Pubkey) -> bool;
}

impl<const N: usize> SignerSet for [Pubkey; N] {
    fn has_signed(&self, key: &Pubkey) -> bool {
        self.contains(key)
    }
}

/// Signer set of an on-chain instruction: every passed account flagged as
/// signer.
pub struct AccountSigners<'a>(pub &'a [AccountInfo]);

impl SignerSet for AccountSigners<'_> {
    fn has_signed(&self, key: &Pubkey) -> bool {
        self.0
            .iter()
            .any(|account| account.is_signer() && account.key() == key)
    }
}

/// Mint and burn of the pool's LST.
pub trait LstMint {
    /// Real supply of the LST mint.
    fn supply(&self) -> Result<u64, ProgramError>;
    /// Mint `amount` LST to the owner `to`.
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> ProgramResult;
    /// Burn `amount` LST held by the owner `from`.
    fn burn_from(&mut self, from: &Pubkey, amount: u64) -> ProgramResult;
}

/// Lamport movements between users and the pool's stake.
pub trait LamportVault {
    /// Move `lamports` from `from` into the pool.
    fn deposit(&mut self, from: &Pubkey, lamports: u64) -> ProgramResult;
    /// Move `lamports` from the pool to `to`.
    fn pay_out(&mut self, to: &Pubkey, lamports: u64) -> ProgramResult;
}

/// Source of validator rewards.
pub trait RewardsOracle {
    /// Lamports earned by the pool's stake on `validator` beyond the
    /// `accounted_lamports` already tracked in the ledger.
    fn pending_rewards(
        &self,
        validator: &Pubkey,
        accounted_lamports: u64,
    ) -> Result<u64, ProgramError>;
}

/// Owner of the pool's stake delegation.
pub trait StakeDelegation {
    /// Open the pool's stake account delegated to `validator`.
    fn open_pool_stake(&mut self, validator: &Pubkey) -> ProgramResult;
    /// Move `lamports` of delegated stake from validator `from` to `to`.
    fn redelegate(&mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> ProgramResult;
}

/// Every external capability a handler may need.
pub trait PoolEffects: LstMint + LamportVault + RewardsOracle + StakeDelegation {}

impl<T: LstMint + LamportVault + RewardsOracle + StakeDelegation + ?Sized> PoolEffects for T {}
