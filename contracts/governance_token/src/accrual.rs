use soroban_sdk::{Env, U256};

use crate::storage::UNIT;

/// Governance units earned by holding `primary_balance` for `ledgers` ledgers
///
/// Formula: accrued = block_reward × primary_balance × ledgers / UNIT
///
/// The product is taken in 256 bits, so only the final quotient has to fit
/// in i128.
pub fn accrued_amount(
    env: &Env,
    block_reward: i128,
    primary_balance: i128,
    ledgers: u32,
) -> Option<i128> {
    if block_reward <= 0 || primary_balance <= 0 || ledgers == 0 {
        return Some(0);
    }

    let product = U256::from_u128(env, block_reward as u128)
        .mul(&U256::from_u128(env, primary_balance as u128))
        .mul(&U256::from_u32(env, ledgers));
    let quotient = product.div(&U256::from_u128(env, UNIT as u128));

    quotient.to_u128().and_then(|q| i128::try_from(q).ok())
}
