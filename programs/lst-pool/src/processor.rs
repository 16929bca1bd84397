//! On-chain instruction processor.
//!
//! Validates the program ID, decodes the instruction, resolves the accounts of
//! its layout into an [`InstructionContext`], an [`AccountLedger`] and
//! [`CpiEffects`], then runs the ledger core.

use lst_pool_interface::{
    CLOCK_SYSVAR_ID, RENT_SYSVAR_ID, SPL_TOKEN_PROGRAM_ID, STAKE_CONFIG_ID, STAKE_PROGRAM_ID,
    STAKE_HISTORY_SYSVAR_ID, SYSTEM_PROGRAM_ID, accounts::*, find_pool_authority_pda,
    find_pool_stake_pda,
};
use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};
use pinocchio_log::log;
use pinocchio_token::state::Mint;

use crate::{
    LstPoolError,
    accounts::{AccountLedger, account_at, require_address},
    cpi::CpiEffects,
    errors::decode_error,
    instructions::{InstructionContext, LstPoolInstruction, process},
    ports::AccountSigners,
    stake::validator_identity,
};

/// Program entrypoint handler.
///
/// # Errors
/// `IncorrectProgramId` for a foreign program ID, otherwise any
/// `LstPoolError` or CPI error.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if !crate::check_id(program_id) {
        log!("Error: incorrect program id");
        return Err(ProgramError::IncorrectProgramId);
    }

    let instruction = match LstPoolInstruction::unpack(instruction_data) {
        Ok(instruction) => instruction,
        Err(e) => {
            match instruction_data.first() {
                Some(opcode) => log!("Error: {} (opcode {})", e.name(), *opcode),
                None => log!("Error: {}", e.name()),
            }
            return Err(e.into());
        }
    };

    log!("Instruction: {}", instruction.tag().name());

    let result = dispatch(program_id, accounts, &instruction);
    if let Err(error) = &result {
        if let Some(e) = decode_error(error) {
            log!("Error: {}", e.name());
        }
    }
    result
}

fn dispatch(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction: &LstPoolInstruction,
) -> ProgramResult {
    // Every layout starts with (global_state, signer)
    let global_state = account_at(accounts, admin_accounts::GLOBAL_STATE)?;
    let caller = account_at(accounts, admin_accounts::SIGNER)?;

    let mut ledger = AccountLedger::new(global_state, program_id)?;
    let signers = AccountSigners(accounts);
    let mut ctx = InstructionContext {
        signers: &signers,
        caller: *caller.key(),
        lst_mint: None,
        validator: None,
    };

    let (pool_authority, authority_bump) = find_pool_authority_pda(ledger.key());
    let (pool_stake, stake_bump) = find_pool_stake_pda(ledger.key());
    let base = CpiEffects::new(
        ledger.key(),
        (pool_authority, authority_bump),
        (pool_stake, stake_bump),
    );

    let mut effects = match instruction {
        LstPoolInstruction::Initialize => {
            require_count(accounts, initialize_accounts::COUNT)?;
            require_address(&accounts[initialize_accounts::POOL_STAKE], &pool_stake)?;
            require_address(&accounts[initialize_accounts::POOL_AUTHORITY], &pool_authority)?;
            require_address(&accounts[initialize_accounts::SYSTEM_PROGRAM], &SYSTEM_PROGRAM_ID)?;
            require_address(&accounts[initialize_accounts::STAKE_PROGRAM], &STAKE_PROGRAM_ID)?;
            require_address(&accounts[initialize_accounts::RENT_SYSVAR], &RENT_SYSVAR_ID)?;
            require_address(&accounts[initialize_accounts::CLOCK_SYSVAR], &CLOCK_SYSVAR_ID)?;
            require_address(
                &accounts[initialize_accounts::STAKE_HISTORY_SYSVAR],
                &STAKE_HISTORY_SYSVAR_ID,
            )?;
            require_address(&accounts[initialize_accounts::STAKE_CONFIG], &STAKE_CONFIG_ID)?;

            let lst_mint = &accounts[initialize_accounts::LST_MINT];
            let vote = &accounts[initialize_accounts::VALIDATOR_VOTE];
            check_mint_authority(lst_mint, &pool_authority)?;

            ctx.lst_mint = Some(*lst_mint.key());
            ctx.validator = Some(validator_identity(vote)?);

            CpiEffects {
                lst_mint: Some(lst_mint),
                user: Some(&accounts[initialize_accounts::ADMIN]),
                pool_stake: Some(&accounts[initialize_accounts::POOL_STAKE]),
                pool_authority: Some(&accounts[initialize_accounts::POOL_AUTHORITY]),
                vote: Some(vote),
                rent: Some(&accounts[initialize_accounts::RENT_SYSVAR]),
                clock: Some(&accounts[initialize_accounts::CLOCK_SYSVAR]),
                stake_history: Some(&accounts[initialize_accounts::STAKE_HISTORY_SYSVAR]),
                stake_config: Some(&accounts[initialize_accounts::STAKE_CONFIG]),
                ..base
            }
        }
        LstPoolInstruction::Stake { .. } => {
            require_count(accounts, stake_accounts::COUNT)?;
            require_address(&accounts[stake_accounts::POOL_STAKE], &pool_stake)?;
            require_address(&accounts[stake_accounts::POOL_AUTHORITY], &pool_authority)?;
            require_address(&accounts[stake_accounts::TOKEN_PROGRAM], &SPL_TOKEN_PROGRAM_ID)?;
            require_address(&accounts[stake_accounts::SYSTEM_PROGRAM], &SYSTEM_PROGRAM_ID)?;

            let lst_mint = &accounts[stake_accounts::LST_MINT];
            ctx.lst_mint = Some(*lst_mint.key());

            CpiEffects {
                lst_mint: Some(lst_mint),
                user: Some(&accounts[stake_accounts::DEPOSITOR]),
                user_token: Some(&accounts[stake_accounts::DEPOSITOR_LST_TOKEN]),
                pool_stake: Some(&accounts[stake_accounts::POOL_STAKE]),
                pool_authority: Some(&accounts[stake_accounts::POOL_AUTHORITY]),
                ..base
            }
        }
        LstPoolInstruction::Withdraw { .. } => {
            require_count(accounts, withdraw_accounts::COUNT)?;
            require_address(&accounts[withdraw_accounts::POOL_STAKE], &pool_stake)?;
            require_address(&accounts[withdraw_accounts::POOL_AUTHORITY], &pool_authority)?;
            require_address(&accounts[withdraw_accounts::TOKEN_PROGRAM], &SPL_TOKEN_PROGRAM_ID)?;
            require_address(&accounts[withdraw_accounts::CLOCK_SYSVAR], &CLOCK_SYSVAR_ID)?;
            require_address(
                &accounts[withdraw_accounts::STAKE_HISTORY_SYSVAR],
                &STAKE_HISTORY_SYSVAR_ID,
            )?;
            require_address(&accounts[withdraw_accounts::STAKE_PROGRAM], &STAKE_PROGRAM_ID)?;

            let lst_mint = &accounts[withdraw_accounts::LST_MINT];
            ctx.lst_mint = Some(*lst_mint.key());

            CpiEffects {
                lst_mint: Some(lst_mint),
                user: Some(&accounts[withdraw_accounts::HOLDER]),
                user_token: Some(&accounts[withdraw_accounts::HOLDER_LST_TOKEN]),
                pool_stake: Some(&accounts[withdraw_accounts::POOL_STAKE]),
                pool_authority: Some(&accounts[withdraw_accounts::POOL_AUTHORITY]),
                clock: Some(&accounts[withdraw_accounts::CLOCK_SYSVAR]),
                stake_history: Some(&accounts[withdraw_accounts::STAKE_HISTORY_SYSVAR]),
                ..base
            }
        }
        LstPoolInstruction::AutoCompound => {
            require_count(accounts, auto_compound_accounts::COUNT)?;
            require_address(&accounts[auto_compound_accounts::POOL_STAKE], &pool_stake)?;

            CpiEffects {
                pool_stake: Some(&accounts[auto_compound_accounts::POOL_STAKE]),
                ..base
            }
        }
        LstPoolInstruction::Redelegate { .. } => {
            require_count(accounts, redelegate_accounts::COUNT)?;
            require_address(&accounts[redelegate_accounts::POOL_STAKE], &pool_stake)?;
            require_address(&accounts[redelegate_accounts::POOL_AUTHORITY], &pool_authority)?;
            require_address(&accounts[redelegate_accounts::CLOCK_SYSVAR], &CLOCK_SYSVAR_ID)?;
            require_address(
                &accounts[redelegate_accounts::STAKE_HISTORY_SYSVAR],
                &STAKE_HISTORY_SYSVAR_ID,
            )?;
            require_address(&accounts[redelegate_accounts::STAKE_CONFIG], &STAKE_CONFIG_ID)?;
            require_address(&accounts[redelegate_accounts::STAKE_PROGRAM], &STAKE_PROGRAM_ID)?;

            let vote = &accounts[redelegate_accounts::NEW_VALIDATOR_VOTE];
            ctx.validator = Some(validator_identity(vote)?);

            CpiEffects {
                pool_stake: Some(&accounts[redelegate_accounts::POOL_STAKE]),
                pool_authority: Some(&accounts[redelegate_accounts::POOL_AUTHORITY]),
                vote: Some(vote),
                clock: Some(&accounts[redelegate_accounts::CLOCK_SYSVAR]),
                stake_history: Some(&accounts[redelegate_accounts::STAKE_HISTORY_SYSVAR]),
                stake_config: Some(&accounts[redelegate_accounts::STAKE_CONFIG]),
                ..base
            }
        }
        LstPoolInstruction::ProposeAdmin { .. } | LstPoolInstruction::AcceptAdmin => base,
    };

    process(&mut ledger, &ctx, instruction, &mut effects)
}

fn require_count(accounts: &[AccountInfo], count: usize) -> ProgramResult {
    if accounts.len() < count {
        log!("expected {} accounts, got {}", count, accounts.len());
        return Err(LstPoolError::InvalidAccount.into());
    }
    Ok(())
}

/// Check the LST mint is an SPL Token mint controlled by the pool authority.
fn check_mint_authority(lst_mint: &AccountInfo, pool_authority: &Pubkey) -> ProgramResult {
    let mint = Mint::from_account_info(lst_mint).map_err(|_| {
        log!("initialize: lst mint is not a token mint");
        ProgramError::from(LstPoolError::InvalidAccount)
    })?;
    if mint.mint_authority() != Some(pool_authority) {
        log!("initialize: lst mint authority must be the pool authority");
        return Err(LstPoolError::InvalidAccount.into());
    }
    Ok(())
}
