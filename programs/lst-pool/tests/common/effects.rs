//! Recording in-memory implementation of every effect port.

use lst_pool::ports::{LamportVault, LstMint, RewardsOracle, StakeDelegation};
use pinocchio::{ProgramResult, program_error::ProgramError, pubkey::Pubkey};
use std::collections::HashMap;

/// Effect port that can be told to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailPoint {
    Supply,
    MintTo,
    BurnFrom,
    Deposit,
    PayOut,
    PendingRewards,
    OpenStake,
    Redelegate,
}

/// One issued effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    MintTo { to: Pubkey, amount: u64 },
    BurnFrom { from: Pubkey, amount: u64 },
    Deposit { from: Pubkey, lamports: u64 },
    PayOut { to: Pubkey, lamports: u64 },
    OpenPoolStake { validator: Pubkey },
    Redelegate { from: Pubkey, to: Pubkey, lamports: u64 },
}

/// Error returned by a failing external collaborator.
pub const EXTERNAL_FAILURE: ProgramError = ProgramError::Custom(0xdead);

/// Token mint, user wallets and pool stake account held in memory.
///
/// `pool_lamports` models the pool stake account above its rent reserve:
/// deposits and rewards raise it, payouts lower it. Pending rewards are
/// whatever it holds beyond the ledger's tracked stake.
#[derive(Debug, Default)]
pub struct MockEffects {
    pub supply: u64,
    pub lst_balances: HashMap<Pubkey, u64>,
    pub wallets: HashMap<Pubkey, u64>,
    pub pool_lamports: u64,
    pub delegated_to: Pubkey,
    pub fail: Option<FailPoint>,
    pub log: Vec<Effect>,
}

impl MockEffects {
    pub fn new(validator: Pubkey) -> Self {
        Self {
            delegated_to: validator,
            ..Self::default()
        }
    }

    /// Give `user` lamports to stake with.
    pub fn fund(&mut self, user: Pubkey, lamports: u64) {
        *self.wallets.entry(user).or_default() += lamports;
    }

    /// Credit validator rewards to the pool stake account.
    pub fn accrue_rewards(&mut self, lamports: u64) {
        self.pool_lamports += lamports;
    }

    pub fn lst_balance(&self, user: &Pubkey) -> u64 {
        self.lst_balances.get(user).copied().unwrap_or(0)
    }

    pub fn wallet(&self, user: &Pubkey) -> u64 {
        self.wallets.get(user).copied().unwrap_or(0)
    }

    fn check(&self, point: FailPoint) -> ProgramResult {
        if self.fail == Some(point) {
            return Err(EXTERNAL_FAILURE);
        }
        Ok(())
    }
}

impl LstMint for MockEffects {
    fn supply(&self) -> Result<u64, ProgramError> {
        self.check(FailPoint::Supply)?;
        Ok(self.supply)
    }

    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> ProgramResult {
        self.check(FailPoint::MintTo)?;
        self.supply += amount;
        *self.lst_balances.entry(*to).or_default() += amount;
        self.log.push(Effect::MintTo { to: *to, amount });
        Ok(())
    }

    fn burn_from(&mut self, from: &Pubkey, amount: u64) -> ProgramResult {
        self.check(FailPoint::BurnFrom)?;
        let balance = self.lst_balances.entry(*from).or_default();
        *balance = balance
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        self.supply -= amount;
        self.log.push(Effect::BurnFrom {
            from: *from,
            amount,
        });
        Ok(())
    }
}

impl LamportVault for MockEffects {
    fn deposit(&mut self, from: &Pubkey, lamports: u64) -> ProgramResult {
        self.check(FailPoint::Deposit)?;
        let wallet = self.wallets.entry(*from).or_default();
        *wallet = wallet
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
        self.pool_lamports += lamports;
        self.log.push(Effect::Deposit {
            from: *from,
            lamports,
        });
        Ok(())
    }

    fn pay_out(&mut self, to: &Pubkey, lamports: u64) -> ProgramResult {
        self.check(FailPoint::PayOut)?;
        self.pool_lamports = self
            .pool_lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
        *self.wallets.entry(*to).or_default() += lamports;
        self.log.push(Effect::PayOut { to: *to, lamports });
        Ok(())
    }
}

impl RewardsOracle for MockEffects {
    fn pending_rewards(
        &self,
        validator: &Pubkey,
        accounted_lamports: u64,
    ) -> Result<u64, ProgramError> {
        self.check(FailPoint::PendingRewards)?;
        if *validator != self.delegated_to {
            return Err(ProgramError::InvalidArgument);
        }
        Ok(self.pool_lamports.saturating_sub(accounted_lamports))
    }
}

impl StakeDelegation for MockEffects {
    fn open_pool_stake(&mut self, validator: &Pubkey) -> ProgramResult {
        self.check(FailPoint::OpenStake)?;
        self.delegated_to = *validator;
        self.log.push(Effect::OpenPoolStake {
            validator: *validator,
        });
        Ok(())
    }

    fn redelegate(&mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> ProgramResult {
        self.check(FailPoint::Redelegate)?;
        if *from != self.delegated_to {
            return Err(ProgramError::InvalidArgument);
        }
        self.delegated_to = *to;
        self.log.push(Effect::Redelegate {
            from: *from,
            to: *to,
            lamports,
        });
        Ok(())
    }
}
