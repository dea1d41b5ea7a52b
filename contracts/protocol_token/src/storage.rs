use soroban_sdk::{contracttype, Address, Env, String};

// Constants
pub const DECIMALS: u32 = 18;
pub const UNIT: i128 = 1_000_000_000_000_000_000; // 1e18
pub const MAX_SUPPLY: i128 = 1_618_000_000 * UNIT;

/// Each allocation is a fifth of MAX_SUPPLY
pub const LIQUIDITY_SUPPLY: i128 = MAX_SUPPLY / 5;
pub const STAKING_SUPPLY: i128 = MAX_SUPPLY / 5;
pub const VESTING_POOL_SUPPLY: i128 = MAX_SUPPLY / 5;
/// Share of each vesting pool released at initialization (4% of supply)
pub const VESTING_INITIAL_UNLOCK: i128 = VESTING_POOL_SUPPLY / 5;
/// Presale supply in whole tokens (323,600,000)
pub const PRESALE_SUPPLY: i128 = MAX_SUPPLY / 5 / UNIT;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const VESTING_DURATION_DAYS: u64 = 720;

pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points

/// Presale bands: (sold share at which the band starts, price multiplier).
/// The band in effect is picked from the share sold before the purchase.
pub const PRICE_BANDS: [(i128, i128); 4] = [
    (0, 1),
    (2_000, 3),
    (4_000, 3 * 21),
    (8_000, 3 * 21),
];

/// 0.001 of a 6-decimal stable coin per whole token
pub const DEFAULT_STABLE_UNIT_PRICE: i128 = 1_000;
/// 5e-7 of an 18-decimal native asset per whole token
pub const DEFAULT_NATIVE_UNIT_PRICE: i128 = 500_000_000_000;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentAsset {
    /// Stable-coin token contract
    Stable,
    /// Native asset contract of the network
    Native,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VestingPoolKind {
    Ecosystem,
    Marketing,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingPool {
    /// Amount that unlocks linearly (initial unlock excluded)
    pub total_allocated: i128,
    /// Length of the linear unlock
    pub duration_seconds: u64,
    /// Unix timestamp the unlock starts from
    pub genesis_time: u64,
    /// Amount already minted to the treasury
    pub claimed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleState {
    /// Whole tokens available for sale
    pub total_sale_supply: i128,
    /// Whole tokens sold so far
    pub total_sold: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleConfig {
    pub stable_token: Address,
    /// Stable-coin units charged per whole token in the first band
    pub stable_unit_price: i128,
    pub native_token: Address,
    /// Native-asset units charged per whole token in the first band
    pub native_unit_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    Treasury,
    Metadata,
    TotalSupply,
    PresaleConfig,
    PresaleState,
    Vesting(VestingPoolKind),
    StakingContract,
    GovernanceToken,
    Balance(Address),
    Allowance(Address, Address), // (from, spender)
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

/// Expired allowances read as zero
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let allowance: Option<AllowanceValue> = env
        .storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()));

    match allowance {
        Some(value) if value.expiration_ledger >= env.ledger().sequence() => value,
        Some(value) => AllowanceValue {
            amount: 0,
            expiration_ledger: value.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    if value.amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, value);
    }
}
