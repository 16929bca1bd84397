//! CPI-backed implementations of the pool's effect ports.
//!
//! ```text
//! Initialize:    System CreateAccount admin     -> pool_stake          (pool stake PDA signs)
//!                Stake  Initialize  pool_stake  staker = withdrawer = pool authority
//!                Stake  Delegate    pool_stake  -> first vote account  (pool authority signs)
//! Stake:         System Transfer    depositor   -> pool_stake
//!                Token  MintTo      lst_mint    -> depositor_lst_token (pool authority signs)
//! Withdraw:      Token  Burn        holder_lst_token                   (holder signs)
//!                Stake  Withdraw    pool_stake  -> holder              (pool authority signs)
//! AutoCompound:  read   pool_stake  lamports - reserve - base - tracked stake
//! Redelegate:    Stake  Delegate    pool_stake  -> new vote account    (pool authority signs)
//! ```

use lst_pool_interface::{POOL_STAKE_BASE_LAMPORTS, STAKE_PROGRAM_ID};
use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{Sysvar, rent::Rent},
};
use pinocchio_log::log;
use pinocchio_system::instructions::{CreateAccount, Transfer};
use pinocchio_token::{
    instructions::{Burn, MintTo},
    state::{Mint, TokenAccount},
};

use crate::{
    LstPoolError,
    pda::{gen_pool_authority_seeds, gen_pool_stake_seeds},
    ports::{LamportVault, LstMint, RewardsOracle, StakeDelegation},
    stake::{DelegateStake, InitializeStake, STAKE_STATE_LEN, Withdraw, load_pool_stake},
};

/// A derived address and its bump.
pub type Pda = (Pubkey, u8);

/// Effect ports backed by the accounts of one instruction.
///
/// Each instruction fills in only the accounts it passes. Using a port whose
/// accounts are absent fails with `InvalidAccount`.
pub struct CpiEffects<'a> {
    pub(crate) global_state: &'a Pubkey,
    pub(crate) pool_authority_key: Pubkey,
    pub(crate) pool_authority_bump: [u8; 1],
    pub(crate) pool_stake_key: Pubkey,
    pub(crate) pool_stake_bump: [u8; 1],
    pub(crate) lst_mint: Option<&'a AccountInfo>,
    pub(crate) user: Option<&'a AccountInfo>,
    pub(crate) user_token: Option<&'a AccountInfo>,
    pub(crate) pool_stake: Option<&'a AccountInfo>,
    pub(crate) pool_authority: Option<&'a AccountInfo>,
    pub(crate) vote: Option<&'a AccountInfo>,
    pub(crate) rent: Option<&'a AccountInfo>,
    pub(crate) clock: Option<&'a AccountInfo>,
    pub(crate) stake_history: Option<&'a AccountInfo>,
    pub(crate) stake_config: Option<&'a AccountInfo>,
}

impl<'a> CpiEffects<'a> {
    /// Effects with no accounts attached.
    pub fn new(global_state: &'a Pubkey, pool_authority: Pda, pool_stake: Pda) -> Self {
        Self {
            global_state,
            pool_authority_key: pool_authority.0,
            pool_authority_bump: [pool_authority.1],
            pool_stake_key: pool_stake.0,
            pool_stake_bump: [pool_stake.1],
            lst_mint: None,
            user: None,
            user_token: None,
            pool_stake: None,
            pool_authority: None,
            vote: None,
            rent: None,
            clock: None,
            stake_history: None,
            stake_config: None,
        }
    }

    /// Check that `owner` owns the user's LST token account for the pool mint.
    fn check_user_token(&self, owner: &Pubkey) -> Result<(), ProgramError> {
        let user_token = required(self.user_token)?;
        let lst_mint = required(self.lst_mint)?;
        let token = TokenAccount::from_account_info(user_token)?;
        if token.owner() != owner || token.mint() != lst_mint.key() {
            log!("user lst token account does not match");
            return Err(LstPoolError::InvalidAccount.into());
        }
        Ok(())
    }

    /// Check that the acting user account is `key`.
    fn user_account(&self, key: &Pubkey) -> Result<&'a AccountInfo, ProgramError> {
        let user = required(self.user)?;
        if user.key() != key {
            return Err(LstPoolError::InvalidAccount.into());
        }
        Ok(user)
    }

    /// The vote account passed with the instruction, which must be `validator`.
    fn vote_account(&self, validator: &Pubkey) -> Result<&'a AccountInfo, ProgramError> {
        let vote = required(self.vote)?;
        if vote.key() != validator {
            log!("vote account does not match the validator");
            return Err(LstPoolError::InvalidValidator.into());
        }
        Ok(vote)
    }
}

fn required<'a>(account: Option<&'a AccountInfo>) -> Result<&'a AccountInfo, ProgramError> {
    account.ok_or_else(|| LstPoolError::InvalidAccount.into())
}

impl LstMint for CpiEffects<'_> {
    fn supply(&self) -> Result<u64, ProgramError> {
        let mint = Mint::from_account_info(required(self.lst_mint)?)?;
        Ok(mint.supply())
    }

    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> ProgramResult {
        self.check_user_token(to)?;

        let seeds = gen_pool_authority_seeds(self.global_state, &self.pool_authority_bump);
        let signer = [Signer::from(&seeds)];

        MintTo {
            mint: required(self.lst_mint)?,
            account: required(self.user_token)?,
            mint_authority: required(self.pool_authority)?,
            amount,
        }
        .invoke_signed(&signer)
    }

    fn burn_from(&mut self, from: &Pubkey, amount: u64) -> ProgramResult {
        self.check_user_token(from)?;

        Burn {
            account: required(self.user_token)?,
            mint: required(self.lst_mint)?,
            authority: self.user_account(from)?,
            amount,
        }
        .invoke()
    }
}

/// Deposits land in the pool stake account as undelegated lamports, and
/// payouts are stake program `Withdraw`s from that account.
///
/// The stake program only releases lamports above the rent reserve and the
/// delegated stake. Deposits stay undelegated and can be paid out. The base
/// delegation and compounded rewards are credited to the delegation, so once
/// undelegated lamports run out a payout fails until the stake is
/// deactivated. The last holders of a pool that compounded rewards cannot
/// fully exit through `Withdraw` alone.
impl LamportVault for CpiEffects<'_> {
    fn deposit(&mut self, from: &Pubkey, lamports: u64) -> ProgramResult {
        let pool_stake = required(self.pool_stake)?;
        load_pool_stake(pool_stake, &self.pool_stake_key, &self.pool_authority_key)?;

        Transfer {
            from: self.user_account(from)?,
            to: pool_stake,
            lamports,
        }
        .invoke()
    }

    fn pay_out(&mut self, to: &Pubkey, lamports: u64) -> ProgramResult {
        let pool_stake = required(self.pool_stake)?;
        load_pool_stake(pool_stake, &self.pool_stake_key, &self.pool_authority_key)?;

        let seeds = gen_pool_authority_seeds(self.global_state, &self.pool_authority_bump);
        let signer = [Signer::from(&seeds)];

        Withdraw {
            stake: pool_stake,
            recipient: self.user_account(to)?,
            clock: required(self.clock)?,
            stake_history: required(self.stake_history)?,
            withdraw_authority: required(self.pool_authority)?,
            lamports,
        }
        .invoke_signed(&signer)
    }
}

impl RewardsOracle for CpiEffects<'_> {
    fn pending_rewards(
        &self,
        validator: &Pubkey,
        accounted_lamports: u64,
    ) -> Result<u64, ProgramError> {
        let pool_stake = required(self.pool_stake)?;
        let view = load_pool_stake(pool_stake, &self.pool_stake_key, &self.pool_authority_key)?;

        if view.voter.as_ref() != Some(validator) {
            log!("auto_compound: pool stake is not delegated to the current validator");
            return Err(LstPoolError::InvalidValidator.into());
        }

        Ok(pool_stake
            .lamports()
            .saturating_sub(view.rent_exempt_reserve)
            .saturating_sub(POOL_STAKE_BASE_LAMPORTS)
            .saturating_sub(accounted_lamports))
    }
}

impl StakeDelegation for CpiEffects<'_> {
    fn open_pool_stake(&mut self, validator: &Pubkey) -> ProgramResult {
        let payer = required(self.user)?;
        let pool_stake = required(self.pool_stake)?;
        let vote = self.vote_account(validator)?;

        let lamports = Rent::get()?
            .minimum_balance(STAKE_STATE_LEN)
            .checked_add(POOL_STAKE_BASE_LAMPORTS)
            .ok_or(LstPoolError::ArithmeticOverflow)?;

        let stake_seeds = gen_pool_stake_seeds(self.global_state, &self.pool_stake_bump);
        CreateAccount {
            from: payer,
            to: pool_stake,
            lamports,
            space: STAKE_STATE_LEN as u64,
            owner: &STAKE_PROGRAM_ID,
        }
        .invoke_signed(&[Signer::from(&stake_seeds)])?;

        InitializeStake {
            stake: pool_stake,
            rent: required(self.rent)?,
            authority: &self.pool_authority_key,
        }
        .invoke()?;

        let authority_seeds = gen_pool_authority_seeds(self.global_state, &self.pool_authority_bump);
        DelegateStake {
            stake: pool_stake,
            vote,
            clock: required(self.clock)?,
            stake_history: required(self.stake_history)?,
            stake_config: required(self.stake_config)?,
            stake_authority: required(self.pool_authority)?,
        }
        .invoke_signed(&[Signer::from(&authority_seeds)])?;

        log!("initialize: pool stake opened with {} lamports", lamports);
        Ok(())
    }

    fn redelegate(&mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> ProgramResult {
        let pool_stake = required(self.pool_stake)?;
        let view = load_pool_stake(pool_stake, &self.pool_stake_key, &self.pool_authority_key)?;
        if let Some(voter) = view.voter {
            if voter != *from {
                log!("redelegate: pool stake is not delegated to the current validator");
                return Err(LstPoolError::InvalidValidator.into());
            }
        }

        let vote = self.vote_account(to)?;

        let seeds = gen_pool_authority_seeds(self.global_state, &self.pool_authority_bump);
        let signer = [Signer::from(&seeds)];

        DelegateStake {
            stake: pool_stake,
            vote,
            clock: required(self.clock)?,
            stake_history: required(self.stake_history)?,
            stake_config: required(self.stake_config)?,
            stake_authority: required(self.pool_authority)?,
        }
        .invoke_signed(&signer)?;

        log!("redelegate: delegated {} lamports", lamports);
        Ok(())
    }
}
