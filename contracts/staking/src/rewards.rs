use soroban_sdk::{Env, U256};

use crate::storage::{
    GlobalStake, StakeInfo, StakingConfig, ACC_PRECISION, BASIS_POINTS, EARLY_STAKE_MULTIPLIER_BPS,
    EARLY_STAKE_WINDOW, SECONDS_PER_YEAR,
};

/// a × b / denominator, rounded down, with a 256-bit intermediate
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Option<i128> {
    if a < 0 || b < 0 || denominator <= 0 {
        return None;
    }

    let product = U256::from_u128(env, a as u128).mul(&U256::from_u128(env, b as u128));
    let quotient = product.div(&U256::from_u128(env, denominator as u128));

    quotient.to_u128().and_then(|q| i128::try_from(q).ok())
}

/// (a × b + carry) / denominator and its remainder, with a 256-bit intermediate
fn mul_add_div_rem(
    env: &Env,
    a: i128,
    b: i128,
    carry: i128,
    denominator: i128,
) -> Option<(i128, i128)> {
    if a < 0 || b < 0 || carry < 0 || denominator <= 0 {
        return None;
    }

    let numerator = U256::from_u128(env, a as u128)
        .mul(&U256::from_u128(env, b as u128))
        .add(&U256::from_u128(env, carry as u128));
    let denominator = U256::from_u128(env, denominator as u128);

    let quotient = numerator
        .div(&denominator)
        .to_u128()
        .and_then(|q| i128::try_from(q).ok())?;
    let remainder = numerator
        .rem_euclid(&denominator)
        .to_u128()
        .and_then(|r| i128::try_from(r).ok())?;

    Some((quotient, remainder))
}

/// Number of active seconds the reward budget pays for
pub fn emission_seconds(config: &StakingConfig) -> u64 {
    let seconds = config.reward_budget / config.rewards_per_second;
    u64::try_from(seconds).unwrap_or(u64::MAX)
}

/// Rewards accrue only after activation and while the pool is at or above the threshold
pub fn is_accruing(global: &GlobalStake, config: &StakingConfig) -> bool {
    global.activated
        && global.total_staked > 0
        && global.total_staked >= config.activation_threshold
}

/// Advance the global accumulator to `now`
///
/// Formula: reward_per_token += (rps × active_seconds × ACC_PRECISION + remainder) / total_staked
///
/// The division remainder is carried into the next update so truncation never compounds.
/// Returns the number of seconds that were converted into rewards.
pub fn update_global(
    env: &Env,
    global: &mut GlobalStake,
    config: &StakingConfig,
    now: u64,
) -> Option<u64> {
    if now <= global.last_update {
        return Some(0);
    }

    let elapsed = now - global.last_update;
    global.last_update = now;

    if !is_accruing(global, config) {
        return Some(0);
    }

    let remaining = emission_seconds(config).saturating_sub(global.emitted_seconds);
    let active = elapsed.min(remaining);
    if active == 0 {
        return Some(0);
    }

    // Bounded by the reward budget
    let emitted = config.rewards_per_second.checked_mul(active as i128)?;
    let (increment, remainder) = mul_add_div_rem(
        env,
        emitted,
        ACC_PRECISION,
        global.reward_remainder,
        global.total_staked,
    )?;

    global.reward_remainder = remainder;
    global.reward_per_token = global.reward_per_token.checked_add(increment)?;
    global.emitted_seconds = global.emitted_seconds.checked_add(active)?;

    Some(active)
}

/// 90% inside the early window measured from the first deposit, 100% after
pub fn penalty_multiplier_bps(info: &StakeInfo, now: u64) -> i128 {
    if now.saturating_sub(info.start_staking) < EARLY_STAKE_WINDOW {
        EARLY_STAKE_MULTIPLIER_BPS
    } else {
        BASIS_POINTS
    }
}

/// Move everything `info` earned since its last checkpoint into `unclaimed_rewards`
///
/// Formula: earned = deposited × Δreward_per_token / ACC_PRECISION × penalty
///
/// Returns the amount credited by this checkpoint.
pub fn checkpoint(env: &Env, info: &mut StakeInfo, global: &GlobalStake, now: u64) -> Option<i128> {
    let delta = global
        .reward_per_token
        .checked_sub(info.reward_per_token_paid)?;
    let raw = mul_div(env, info.deposited, delta, ACC_PRECISION)?;
    let earned = mul_div(env, raw, penalty_multiplier_bps(info, now), BASIS_POINTS)?;

    info.unclaimed_rewards = info.unclaimed_rewards.checked_add(earned)?;
    info.reward_per_token_paid = global.reward_per_token;
    info.time_of_last_update = now;

    Some(earned)
}

/// Annualised reward rate of the pool in basis points with the user's penalty applied
pub fn apy_bps(
    env: &Env,
    config: &StakingConfig,
    global: &GlobalStake,
    info: &StakeInfo,
    now: u64,
) -> Option<i128> {
    if info.deposited == 0 || !is_accruing(global, config) {
        return Some(0);
    }

    let yearly = config
        .rewards_per_second
        .checked_mul(SECONDS_PER_YEAR as i128)?;
    let pool_bps = mul_div(env, yearly, BASIS_POINTS, global.total_staked)?;

    mul_div(env, pool_bps, penalty_multiplier_bps(info, now), BASIS_POINTS)
}
