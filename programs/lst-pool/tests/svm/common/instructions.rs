//! LST pool instruction builders and transaction helpers.

use litesvm::LiteSVM;
use litesvm::types::TransactionResult;
use lst_pool::LstPoolError;
use lst_pool_interface::{
    build_auto_compound_instruction_data, build_initialize_instruction_data,
    build_redelegate_instruction_data, build_stake_instruction_data,
    build_withdraw_instruction_data,
};
use solana_sdk::instruction::{AccountMeta, Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};

use super::pda::*;
use super::setup::{LST_POOL_PROGRAM_ID, PoolFixture};

/// Sign and send one instruction with `payer` paying and signing.
pub fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    result
}

/// Assert that the transaction failed in its first instruction with `error`.
#[track_caller]
pub fn assert_pool_error(result: TransactionResult, error: LstPoolError) {
    let failed = result.expect_err("transaction should fail");
    assert_eq!(
        failed.err,
        TransactionError::InstructionError(0, InstructionError::Custom(error as u32)),
        "logs: {:#?}",
        failed.meta.logs
    );
}

// ============================================================================
// Initialize
// ============================================================================

/// Initialize the pool record at `global_state`.
pub fn initialize_ix(
    global_state: &Pubkey,
    admin: &Pubkey,
    lst_mint: &Pubkey,
    vote: &Pubkey,
) -> Instruction {
    let (pool_stake, _) = find_pool_stake_pda(global_state);
    let (pool_authority, _) = find_pool_authority_pda(global_state);

    Instruction {
        program_id: LST_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*global_state, false),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(*lst_mint, false),
            AccountMeta::new_readonly(*vote, false),
            AccountMeta::new(pool_stake, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(STAKE_PROGRAM_ID, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
            AccountMeta::new_readonly(CLOCK_SYSVAR_ID, false),
            AccountMeta::new_readonly(STAKE_HISTORY_SYSVAR_ID, false),
            AccountMeta::new_readonly(STAKE_CONFIG_ID, false),
        ],
        data: build_initialize_instruction_data().to_vec(),
    }
}

// ============================================================================
// Stake / Withdraw
// ============================================================================

/// Stake `lamports` from `depositor` into the pool, passing `pool_stake` as
/// the pool stake account.
pub fn stake_ix(
    pool: &PoolFixture,
    depositor: &Pubkey,
    depositor_token: &Pubkey,
    pool_stake: &Pubkey,
    lamports: u64,
) -> Instruction {
    Instruction {
        program_id: LST_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(pool.global_state, false),
            AccountMeta::new(*depositor, true),
            AccountMeta::new(pool.lst_mint, false),
            AccountMeta::new(*depositor_token, false),
            AccountMeta::new(*pool_stake, false),
            AccountMeta::new_readonly(pool.pool_authority, false),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data: build_stake_instruction_data(lamports).to_vec(),
    }
}

/// Redeem `lst_amount` of `holder`'s LST for lamports.
pub fn withdraw_ix(
    pool: &PoolFixture,
    holder: &Pubkey,
    holder_token: &Pubkey,
    lst_amount: u64,
) -> Instruction {
    Instruction {
        program_id: LST_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(pool.global_state, false),
            AccountMeta::new(*holder, true),
            AccountMeta::new(pool.lst_mint, false),
            AccountMeta::new(*holder_token, false),
            AccountMeta::new(pool.pool_stake, false),
            AccountMeta::new_readonly(pool.pool_authority, false),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(CLOCK_SYSVAR_ID, false),
            AccountMeta::new_readonly(STAKE_HISTORY_SYSVAR_ID, false),
            AccountMeta::new_readonly(STAKE_PROGRAM_ID, false),
        ],
        data: build_withdraw_instruction_data(lst_amount).to_vec(),
    }
}

// ============================================================================
// Admin Operations
// ============================================================================

/// Compound rewards held by `pool_stake`.
pub fn auto_compound_ix(pool: &PoolFixture, pool_stake: &Pubkey) -> Instruction {
    Instruction {
        program_id: LST_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(pool.global_state, false),
            AccountMeta::new_readonly(pool.admin.pubkey(), true),
            AccountMeta::new_readonly(*pool_stake, false),
        ],
        data: build_auto_compound_instruction_data().to_vec(),
    }
}

/// Redelegate to `new_validator`, passing `vote` as its vote account.
pub fn redelegate_ix(pool: &PoolFixture, new_validator: &Pubkey, vote: &Pubkey) -> Instruction {
    Instruction {
        program_id: LST_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(pool.global_state, false),
            AccountMeta::new_readonly(pool.admin.pubkey(), true),
            AccountMeta::new(pool.pool_stake, false),
            AccountMeta::new_readonly(*vote, false),
            AccountMeta::new_readonly(pool.pool_authority, false),
            AccountMeta::new_readonly(CLOCK_SYSVAR_ID, false),
            AccountMeta::new_readonly(STAKE_HISTORY_SYSVAR_ID, false),
            AccountMeta::new_readonly(STAKE_CONFIG_ID, false),
            AccountMeta::new_readonly(STAKE_PROGRAM_ID, false),
        ],
        data: build_redelegate_instruction_data(&new_validator.to_bytes()).to_vec(),
    }
}
