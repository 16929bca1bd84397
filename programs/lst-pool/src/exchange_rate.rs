//! Exchange-rate engine.
//!
//! Converts between lamports and LST base units at the pool's current ratio
//! `total_staked_sol / total_lst_supply`, and grows the ratio when rewards are
//! compounded.
//!
//! # Rounding
//!
//! Both conversions floor. A depositor never receives more LST than their
//! lamports justify, and a holder never receives more lamports than their LST
//! is worth, so rounding dust always stays in the pool.
//!
//! Products are computed in u128, which holds any `u64 * u64` exactly. Only a
//! quotient that does not fit back into u64 fails.

use crate::{LstPoolError, state::GlobalState};

/// Convert a lamport deposit into LST base units.
///
/// An empty pool mints 1:1. Otherwise
/// `floor(lamports * total_lst_supply / total_staked_sol)`.
///
/// # Errors
/// * `DivisionByZero` if supply is positive but no stake backs it
/// * `ArithmeticOverflow` if the result exceeds u64
pub fn lamports_to_lst(lamports: u64, state: &GlobalState) -> Result<u64, LstPoolError> {
    if state.total_lst_supply == 0 {
        return Ok(lamports);
    }
    mul_div_floor(lamports, state.total_lst_supply, state.total_staked_sol)
}

/// Convert LST base units into lamports.
///
/// `floor(lst * total_staked_sol / total_lst_supply)`.
///
/// # Errors
/// * `DivisionByZero` if no LST is outstanding
/// * `ArithmeticOverflow` if the result exceeds u64
pub fn lst_to_lamports(lst: u64, state: &GlobalState) -> Result<u64, LstPoolError> {
    mul_div_floor(lst, state.total_staked_sol, state.total_lst_supply)
}

/// Fold a reward into the pool.
///
/// Raises `total_staked_sol` only, which raises the value of every
/// outstanding LST unit without minting any.
///
/// # Errors
/// `ArithmeticOverflow` if the stake total would exceed u64.
pub fn apply_reward(delta_lamports: u64, state: &mut GlobalState) -> Result<(), LstPoolError> {
    state.total_staked_sol = state
        .total_staked_sol
        .checked_add(delta_lamports)
        .ok_or(LstPoolError::ArithmeticOverflow)?;
    Ok(())
}

/// `floor(amount * numerator / denominator)` with a u128 intermediate.
fn mul_div_floor(amount: u64, numerator: u64, denominator: u64) -> Result<u64, LstPoolError> {
    if denominator == 0 {
        return Err(LstPoolError::DivisionByZero);
    }
    let result = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(LstPoolError::ArithmeticOverflow)?
        / denominator as u128;
    u64::try_from(result).map_err(|_| LstPoolError::ArithmeticOverflow)
}
