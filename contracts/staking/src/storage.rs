use soroban_sdk::{contracttype, Address};

// Constants
pub const UNIT: i128 = 1_000_000_000_000_000_000; // 1e18
/// Accumulator scale, at least as large as any possible stake
pub const ACC_PRECISION: i128 = 1_000_000_000_000_000_000_000_000_000; // 1e27
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points

/// Total stake at which rewards start accruing
pub const ACTIVATION_THRESHOLD: i128 = 21_000_000 * UNIT;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Rewards earned within this window of the first deposit are cut
pub const EARLY_STAKE_WINDOW: u64 = 30 * SECONDS_PER_DAY;
pub const EARLY_STAKE_MULTIPLIER_BPS: i128 = 9_000; // 90%

/// 195e9 base units per staked token per second at the activation threshold
pub const DEFAULT_REWARDS_PER_SECOND: i128 = 4_095_000_000_000_000_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeInfo {
    pub deposited: i128,
    pub unclaimed_rewards: i128,
    pub time_of_last_update: u64,
    /// First-ever deposit, never reset
    pub start_staking: u64,
    /// Global accumulator value at the last checkpoint
    pub reward_per_token_paid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalStake {
    pub total_staked: i128,
    /// Rewards per staked unit, scaled by ACC_PRECISION
    pub reward_per_token: i128,
    /// Numerator left over from the last accumulator division
    pub reward_remainder: i128,
    pub last_update: u64,
    pub activated: bool,
    /// Time the total stake first reached the threshold, 0 before
    pub staking_start_time: u64,
    /// Active seconds already converted into rewards
    pub emitted_seconds: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    pub token: Address,
    pub rewards_per_second: i128,
    /// Total rewards this contract will ever emit
    pub reward_budget: i128,
    pub activation_threshold: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    Config,
    Global,
    Paused,
    Stake(Address),
}
