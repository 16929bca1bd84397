//! Account index tables for every LST pool instruction.
//!
//! Clients must pass accounts in exactly this order; the program reads them
//! by index.

/// Account indices for `Initialize`.
///
/// 0. global_state (mut) - Uninitialized, program-owned record account
/// 1. admin (signer, mut) - Becomes the pool admin, funds the pool stake account
/// 2. lst_mint - LST mint, supply 0, mint authority = pool authority PDA
/// 3. validator_vote - Vote account of the first validator
/// 4. pool_stake (mut) - Pool stake PDA, created here
/// 5. pool_authority - Pool authority PDA (staker and withdrawer)
/// 6. system_program
/// 7. stake_program
/// 8. rent_sysvar
/// 9. clock_sysvar
/// 10. stake_history_sysvar
/// 11. stake_config
pub mod initialize_accounts {
    /// Global state account (writable)
    pub const GLOBAL_STATE: usize = 0;
    /// Future admin (signer, writable)
    pub const ADMIN: usize = 1;
    /// LST mint
    pub const LST_MINT: usize = 2;
    /// Validator vote account
    pub const VALIDATOR_VOTE: usize = 3;
    /// Pool stake PDA (writable)
    pub const POOL_STAKE: usize = 4;
    /// Pool authority PDA
    pub const POOL_AUTHORITY: usize = 5;
    /// System program
    pub const SYSTEM_PROGRAM: usize = 6;
    /// Stake program
    pub const STAKE_PROGRAM: usize = 7;
    /// Rent sysvar
    pub const RENT_SYSVAR: usize = 8;
    /// Clock sysvar
    pub const CLOCK_SYSVAR: usize = 9;
    /// Stake history sysvar
    pub const STAKE_HISTORY_SYSVAR: usize = 10;
    /// Stake config account
    pub const STAKE_CONFIG: usize = 11;
    /// Total number of accounts
    pub const COUNT: usize = 12;
}

/// Account indices for `Stake`.
///
/// 0. global_state (mut)
/// 1. depositor (signer, mut) - Pays the lamports
/// 2. lst_mint (mut)
/// 3. depositor_lst_token (mut) - Receives the minted LST
/// 4. pool_stake (mut) - Pool stake PDA, receives the lamports
/// 5. pool_authority - Pool authority PDA (mint authority)
/// 6. token_program - SPL Token program
/// 7. system_program - System program
pub mod stake_accounts {
    /// Global state account (writable)
    pub const GLOBAL_STATE: usize = 0;
    /// Depositor (signer, writable)
    pub const DEPOSITOR: usize = 1;
    /// LST mint (writable)
    pub const LST_MINT: usize = 2;
    /// Depositor's LST token account (writable)
    pub const DEPOSITOR_LST_TOKEN: usize = 3;
    /// Pool stake account (writable)
    pub const POOL_STAKE: usize = 4;
    /// Pool authority PDA
    pub const POOL_AUTHORITY: usize = 5;
    /// SPL Token program
    pub const TOKEN_PROGRAM: usize = 6;
    /// System program
    pub const SYSTEM_PROGRAM: usize = 7;
    /// Total number of accounts
    pub const COUNT: usize = 8;
}

/// Account indices for `Withdraw`.
///
/// 0. global_state (mut)
/// 1. holder (signer, mut) - Burns LST, receives lamports
/// 2. lst_mint (mut)
/// 3. holder_lst_token (mut) - LST source for the burn
/// 4. pool_stake (mut) - Pool stake PDA, pays the lamports
/// 5. pool_authority - Pool authority PDA (stake withdrawer)
/// 6. token_program - SPL Token program
/// 7. clock_sysvar
/// 8. stake_history_sysvar
/// 9. stake_program
pub mod withdraw_accounts {
    /// Global state account (writable)
    pub const GLOBAL_STATE: usize = 0;
    /// Token holder (signer, writable)
    pub const HOLDER: usize = 1;
    /// LST mint (writable)
    pub const LST_MINT: usize = 2;
    /// Holder's LST token account (writable)
    pub const HOLDER_LST_TOKEN: usize = 3;
    /// Pool stake account (writable)
    pub const POOL_STAKE: usize = 4;
    /// Pool authority PDA
    pub const POOL_AUTHORITY: usize = 5;
    /// SPL Token program
    pub const TOKEN_PROGRAM: usize = 6;
    /// Clock sysvar
    pub const CLOCK_SYSVAR: usize = 7;
    /// Stake history sysvar
    pub const STAKE_HISTORY_SYSVAR: usize = 8;
    /// Stake program
    pub const STAKE_PROGRAM: usize = 9;
    /// Total number of accounts
    pub const COUNT: usize = 10;
}

/// Account indices for `AutoCompound`.
///
/// 0. global_state (mut)
/// 1. admin (signer)
/// 2. pool_stake - Pool stake PDA, read to measure accrued rewards
pub mod auto_compound_accounts {
    /// Global state account (writable)
    pub const GLOBAL_STATE: usize = 0;
    /// Admin (signer)
    pub const ADMIN: usize = 1;
    /// Pool stake account
    pub const POOL_STAKE: usize = 2;
    /// Total number of accounts
    pub const COUNT: usize = 3;
}

/// Account indices for `Redelegate`.
///
/// 0. global_state (mut)
/// 1. admin (signer)
/// 2. pool_stake (mut) - Pool stake PDA
/// 3. new_validator_vote - Must match the instruction's validator identity
/// 4. pool_authority - Pool authority PDA (staker)
/// 5. clock_sysvar
/// 6. stake_history_sysvar
/// 7. stake_config
/// 8. stake_program
pub mod redelegate_accounts {
    /// Global state account (writable)
    pub const GLOBAL_STATE: usize = 0;
    /// Admin (signer)
    pub const ADMIN: usize = 1;
    /// Pool stake account (writable)
    pub const POOL_STAKE: usize = 2;
    /// New validator vote account
    pub const NEW_VALIDATOR_VOTE: usize = 3;
    /// Pool authority PDA
    pub const POOL_AUTHORITY: usize = 4;
    /// Clock sysvar
    pub const CLOCK_SYSVAR: usize = 5;
    /// Stake history sysvar
    pub const STAKE_HISTORY_SYSVAR: usize = 6;
    /// Stake config account
    pub const STAKE_CONFIG: usize = 7;
    /// Stake program
    pub const STAKE_PROGRAM: usize = 8;
    /// Total number of accounts
    pub const COUNT: usize = 9;
}

/// Account indices for `ProposeAdmin` and `AcceptAdmin`.
///
/// 0. global_state (mut)
/// 1. signer - Current admin (propose) or pending admin (accept)
pub mod admin_accounts {
    /// Global state account (writable)
    pub const GLOBAL_STATE: usize = 0;
    /// Acting admin or candidate (signer)
    pub const SIGNER: usize = 1;
    /// Total number of accounts
    pub const COUNT: usize = 2;
}
