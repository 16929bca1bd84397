//! Account-backed ledger storage and account lookup helpers.

use lst_pool_interface::GLOBAL_STATE_LEN;
use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};
use pinocchio_log::log;

use crate::{
    LstPoolError,
    ports::{LedgerStorage, RecordBytes},
};

/// Global state record stored in a program-owned account.
pub struct AccountLedger<'a> {
    account: &'a AccountInfo,
}

impl<'a> AccountLedger<'a> {
    /// Wrap the global state account.
    ///
    /// # Errors
    /// `InvalidAccount` if the account is not owned by `program_id`, is not
    /// writable, or does not have the record size.
    pub fn new(account: &'a AccountInfo, program_id: &Pubkey) -> Result<Self, ProgramError> {
        if account.owner() != program_id {
            log!("global state: wrong owner");
            return Err(LstPoolError::InvalidAccount.into());
        }
        if !account.is_writable() {
            log!("global state: not writable");
            return Err(LstPoolError::InvalidAccount.into());
        }
        if account.data_len() != GLOBAL_STATE_LEN {
            log!("global state: wrong size {}", account.data_len());
            return Err(LstPoolError::InvalidAccount.into());
        }
        Ok(Self { account })
    }

    /// Address of the global state account.
    pub fn key(&self) -> &'a Pubkey {
        self.account.key()
    }
}

impl LedgerStorage for AccountLedger<'_> {
    fn read(&self) -> Result<RecordBytes, ProgramError> {
        let data = self.account.try_borrow_data()?;
        (&*data)
            .try_into()
            .map_err(|_| LstPoolError::InvalidAccount.into())
    }

    fn write(&mut self, bytes: &RecordBytes) -> ProgramResult {
        let mut data = self.account.try_borrow_mut_data()?;
        if data.len() != bytes.len() {
            return Err(LstPoolError::InvalidAccount.into());
        }
        data.copy_from_slice(bytes);
        Ok(())
    }
}

/// Account at `index`.
///
/// # Errors
/// `InvalidAccount` if too few accounts were passed.
pub fn account_at(accounts: &[AccountInfo], index: usize) -> Result<&AccountInfo, ProgramError> {
    accounts.get(index).ok_or_else(|| {
        log!("missing account at index {}", index);
        LstPoolError::InvalidAccount.into()
    })
}

/// Check that `account` has the address `expected`.
///
/// # Errors
/// `InvalidAccount` on mismatch.
pub fn require_address(account: &AccountInfo, expected: &Pubkey) -> Result<(), ProgramError> {
    if account.key() != expected {
        log!("unexpected account address");
        return Err(LstPoolError::InvalidAccount.into());
    }
    Ok(())
}
