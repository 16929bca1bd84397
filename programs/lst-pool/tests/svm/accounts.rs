//! Account validation: global state ownership and size, account list shape,
//! and the pinned pool stake address.

use lst_pool::LstPoolError;
use lst_pool_interface::GLOBAL_STATE_LEN;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

use crate::common::*;

#[test]
fn test_global_state_with_wrong_owner_is_rejected() {
    let mut pool = PoolFixture::new();
    let record = pool.state().encode().to_vec();
    let foreign = create_raw_global_state(&mut pool.svm, record, SYSTEM_PROGRAM_ID);
    let (user, token) = pool.user(5 * ONE_SOL);

    let mut ix = stake_ix(&pool, &user.pubkey(), &token, &pool.pool_stake, ONE_SOL);
    ix.accounts[0].pubkey = foreign;

    assert_pool_error(
        send(&mut pool.svm, ix, &user),
        LstPoolError::InvalidAccount,
    );
}

#[test]
fn test_global_state_with_short_record_is_rejected() {
    let mut pool = PoolFixture::new();
    let short = create_raw_global_state(
        &mut pool.svm,
        vec![0u8; GLOBAL_STATE_LEN - 1],
        LST_POOL_PROGRAM_ID,
    );
    let admin = pool.admin.insecure_clone();

    let ix = initialize_ix(&short, &admin.pubkey(), &pool.lst_mint, &pool.validator);

    assert_pool_error(
        send(&mut pool.svm, ix, &admin),
        LstPoolError::InvalidAccount,
    );
}

#[test]
fn test_short_account_list_is_rejected() {
    let mut pool = PoolFixture::new();
    let (user, token) = pool.user(5 * ONE_SOL);

    let mut ix = stake_ix(&pool, &user.pubkey(), &token, &pool.pool_stake, ONE_SOL);
    ix.accounts.truncate(5);

    assert_pool_error(
        send(&mut pool.svm, ix, &user),
        LstPoolError::InvalidAccount,
    );
    assert_eq!(token_balance(&pool.svm, &token), 0);
}

#[test]
fn test_out_of_order_accounts_are_rejected() {
    let mut pool = PoolFixture::new();
    let (user, token) = pool.user(5 * ONE_SOL);

    // Swap pool stake and pool authority
    let mut ix = stake_ix(&pool, &user.pubkey(), &token, &pool.pool_stake, ONE_SOL);
    ix.accounts.swap(4, 5);

    assert_pool_error(
        send(&mut pool.svm, ix, &user),
        LstPoolError::InvalidAccount,
    );
    assert_eq!(pool.state().total_staked_sol, 0);
}

#[test]
fn test_stake_into_foreign_stake_account_is_rejected() {
    let mut pool = PoolFixture::new();
    let (user, token) = pool.user(5 * ONE_SOL);

    // Shaped like the pool stake and controlled by the pool authority, but
    // delegated elsewhere and not at the pool stake PDA
    let foreign = Pubkey::new_unique();
    let other_validator = create_vote_account(&mut pool.svm);
    create_stake_account(
        &mut pool.svm,
        &foreign,
        &pool.pool_authority,
        Some(&other_validator),
        0,
    );
    let foreign_before = pool.lamports(&foreign);

    let ix = stake_ix(&pool, &user.pubkey(), &token, &foreign, ONE_SOL);

    assert_pool_error(
        send(&mut pool.svm, ix, &user),
        LstPoolError::InvalidAccount,
    );
    assert_eq!(pool.lamports(&foreign), foreign_before);
    assert_eq!(token_balance(&pool.svm, &token), 0);
    assert_eq!(pool.state().total_staked_sol, 0);
}

#[test]
fn test_compound_from_foreign_stake_account_is_rejected() {
    let mut pool = PoolFixture::new();
    let (user, token) = pool.user(5 * ONE_SOL);
    let ix = stake_ix(&pool, &user.pubkey(), &token, &pool.pool_stake, ONE_SOL);
    send(&mut pool.svm, ix, &user).expect("stake should succeed");

    // Holds plenty of lamports that would read as rewards
    let foreign = Pubkey::new_unique();
    create_stake_account(
        &mut pool.svm,
        &foreign,
        &pool.pool_authority,
        Some(&pool.validator),
        50 * ONE_SOL,
    );
    let admin = pool.admin.insecure_clone();

    let ix = auto_compound_ix(&pool, &foreign);

    assert_pool_error(
        send(&mut pool.svm, ix, &admin),
        LstPoolError::InvalidAccount,
    );
    assert_eq!(pool.state().total_staked_sol, ONE_SOL);
}
