//! Native stake program glue.
//!
//! Reads the fields of a stake account the pool relies on and builds the stake
//! program instructions the pool issues: `Initialize` when the pool stake is
//! opened, `Withdraw` for payouts and `DelegateStake` for delegation.

use lst_pool_interface::{STAKE_PROGRAM_ID, VOTE_PROGRAM_ID};
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    program_error::ProgramError,
    pubkey::Pubkey,
};
use pinocchio_log::log;

use crate::LstPoolError;

// ============================================================================
// Stake Account Layout
// ============================================================================

/// Size of a stake account (`StakeStateV2`).
pub const STAKE_STATE_LEN: usize = 200;

/// `StakeStateV2::Initialized`
const STAKE_STATE_INITIALIZED: u32 = 1;
/// `StakeStateV2::Stake`
const STAKE_STATE_DELEGATED: u32 = 2;

const RENT_EXEMPT_RESERVE_OFFSET: usize = 4;
const STAKER_OFFSET: usize = 12;
const WITHDRAWER_OFFSET: usize = 44;
const VOTER_OFFSET: usize = 124;

/// The parts of a stake account the pool cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeAccountView {
    /// Lamports held back for rent exemption.
    pub rent_exempt_reserve: u64,
    /// Stake authority.
    pub staker: Pubkey,
    /// Withdraw authority.
    pub withdrawer: Pubkey,
    /// Vote account the stake is delegated to, if delegated.
    pub voter: Option<Pubkey>,
}

impl StakeAccountView {
    /// Parse stake account data.
    ///
    /// # Errors
    /// `InvalidAccount` if the data is too short or the account is neither
    /// initialized nor delegated.
    pub fn parse(data: &[u8]) -> Result<Self, LstPoolError> {
        if data.len() < STAKE_STATE_LEN {
            return Err(LstPoolError::InvalidAccount);
        }

        let tag = u32::from_le_bytes(read_array(data, 0)?);
        let voter = match tag {
            STAKE_STATE_INITIALIZED => None,
            STAKE_STATE_DELEGATED => Some(read_array(data, VOTER_OFFSET)?),
            _ => return Err(LstPoolError::InvalidAccount),
        };

        Ok(Self {
            rent_exempt_reserve: u64::from_le_bytes(read_array(data, RENT_EXEMPT_RESERVE_OFFSET)?),
            staker: read_array(data, STAKER_OFFSET)?,
            withdrawer: read_array(data, WITHDRAWER_OFFSET)?,
            voter,
        })
    }

    /// True if `authority` controls both staking and withdrawal.
    pub fn is_controlled_by(&self, authority: &Pubkey) -> bool {
        self.staker == *authority && self.withdrawer == *authority
    }
}

fn read_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], LstPoolError> {
    data.get(offset..offset + N)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(LstPoolError::InvalidAccount)
}

/// Load the pool stake account and check it is the pool's and the pool
/// authority controls it.
///
/// # Errors
/// `InvalidAccount` if the account is not at `pool_stake_key`, is not a stake
/// account, or is not controlled by `pool_authority`.
pub fn load_pool_stake(
    pool_stake: &AccountInfo,
    pool_stake_key: &Pubkey,
    pool_authority: &Pubkey,
) -> Result<StakeAccountView, ProgramError> {
    if pool_stake.key() != pool_stake_key {
        log!("pool stake is not the pool stake PDA");
        return Err(LstPoolError::InvalidAccount.into());
    }
    if *pool_stake.owner() != STAKE_PROGRAM_ID {
        log!("pool stake is not a stake account");
        return Err(LstPoolError::InvalidAccount.into());
    }
    let view = StakeAccountView::parse(&pool_stake.try_borrow_data()?)?;
    if !view.is_controlled_by(pool_authority) {
        log!("pool stake is not controlled by the pool authority");
        return Err(LstPoolError::InvalidAccount.into());
    }
    Ok(view)
}

/// Check that `vote` is a vote account and return its identity.
///
/// # Errors
/// `InvalidValidator` if the account is not owned by the vote program.
pub fn validator_identity(vote: &AccountInfo) -> Result<Pubkey, ProgramError> {
    if *vote.owner() != VOTE_PROGRAM_ID {
        log!("validator is not a vote account");
        return Err(LstPoolError::InvalidValidator.into());
    }
    Ok(*vote.key())
}

// ============================================================================
// Stake Program Instructions
// ============================================================================

/// `StakeInstruction::Initialize(Authorized, Lockup)`
const INITIALIZE_TAG: u32 = 0;
/// `StakeInstruction::DelegateStake`
const DELEGATE_STAKE_TAG: u32 = 2;
/// `StakeInstruction::Withdraw(u64)`
const WITHDRAW_TAG: u32 = 4;

/// Initialize a stake account with one authority as staker and withdrawer and
/// no lockup.
///
/// Accounts: stake (mut), rent sysvar.
pub struct InitializeStake<'a> {
    /// Stake account to initialize
    pub stake: &'a AccountInfo,
    /// Rent sysvar
    pub rent: &'a AccountInfo,
    /// Staker and withdrawer
    pub authority: &'a Pubkey,
}

impl InitializeStake<'_> {
    /// Invoke the stake program.
    pub fn invoke(&self) -> ProgramResult {
        let account_metas = [
            AccountMeta::writable(self.stake.key()),
            AccountMeta::readonly(self.rent.key()),
        ];

        // tag | staker | withdrawer | lockup (timestamp, epoch, custodian), all zero
        let mut data = [0u8; 116];
        data[0..4].copy_from_slice(&INITIALIZE_TAG.to_le_bytes());
        data[4..36].copy_from_slice(self.authority);
        data[36..68].copy_from_slice(self.authority);

        let instruction = Instruction {
            program_id: &STAKE_PROGRAM_ID,
            accounts: &account_metas,
            data: &data,
        };

        pinocchio::program::invoke(&instruction, &[self.stake, self.rent])
    }
}

/// Withdraw `lamports` from a stake account.
///
/// Accounts: stake (mut), recipient (mut), clock, stake_history,
/// withdraw_authority (signer).
pub struct Withdraw<'a> {
    /// Stake account to withdraw from
    pub stake: &'a AccountInfo,
    /// Recipient of the lamports
    pub recipient: &'a AccountInfo,
    /// Clock sysvar
    pub clock: &'a AccountInfo,
    /// Stake history sysvar
    pub stake_history: &'a AccountInfo,
    /// Withdraw authority
    pub withdraw_authority: &'a AccountInfo,
    /// Lamports to withdraw
    pub lamports: u64,
}

impl Withdraw<'_> {
    /// Invoke with PDA signer seeds.
    pub fn invoke_signed(&self, signers: &[Signer]) -> ProgramResult {
        let account_metas = [
            AccountMeta::writable(self.stake.key()),
            AccountMeta::writable(self.recipient.key()),
            AccountMeta::readonly(self.clock.key()),
            AccountMeta::readonly(self.stake_history.key()),
            AccountMeta::readonly_signer(self.withdraw_authority.key()),
        ];

        let mut data = [0u8; 12];
        data[0..4].copy_from_slice(&WITHDRAW_TAG.to_le_bytes());
        data[4..12].copy_from_slice(&self.lamports.to_le_bytes());

        let instruction = Instruction {
            program_id: &STAKE_PROGRAM_ID,
            accounts: &account_metas,
            data: &data,
        };

        pinocchio::program::invoke_signed(
            &instruction,
            &[
                self.stake,
                self.recipient,
                self.clock,
                self.stake_history,
                self.withdraw_authority,
            ],
            signers,
        )
    }
}

/// Delegate a stake account to a vote account.
///
/// Accounts: stake (mut), vote, clock, stake_history, stake_config,
/// stake_authority (signer).
pub struct DelegateStake<'a> {
    /// Stake account to delegate
    pub stake: &'a AccountInfo,
    /// Vote account to delegate to
    pub vote: &'a AccountInfo,
    /// Clock sysvar
    pub clock: &'a AccountInfo,
    /// Stake history sysvar
    pub stake_history: &'a AccountInfo,
    /// Stake config account
    pub stake_config: &'a AccountInfo,
    /// Stake authority
    pub stake_authority: &'a AccountInfo,
}

impl DelegateStake<'_> {
    /// Invoke with PDA signer seeds.
    pub fn invoke_signed(&self, signers: &[Signer]) -> ProgramResult {
        let account_metas = [
            AccountMeta::writable(self.stake.key()),
            AccountMeta::readonly(self.vote.key()),
            AccountMeta::readonly(self.clock.key()),
            AccountMeta::readonly(self.stake_history.key()),
            AccountMeta::readonly(self.stake_config.key()),
            AccountMeta::readonly_signer(self.stake_authority.key()),
        ];

        let data = DELEGATE_STAKE_TAG.to_le_bytes();

        let instruction = Instruction {
            program_id: &STAKE_PROGRAM_ID,
            accounts: &account_metas,
            data: &data,
        };

        pinocchio::program::invoke_signed(
            &instruction,
            &[
                self.stake,
                self.vote,
                self.clock,
                self.stake_history,
                self.stake_config,
                self.stake_authority,
            ],
            signers,
        )
    }
}
