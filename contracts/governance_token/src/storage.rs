use soroban_sdk::{contracttype, Address, String};

pub const DECIMALS: u32 = 18;
pub const UNIT: i128 = 1_000_000_000_000_000_000; // 1e18

/// Governance base units accrued per whole primary token per ledger
pub const DEFAULT_BLOCK_REWARD: i128 = 1_000_000_000; // 1e-9 token

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccrualState {
    /// Checkpointed governance balance
    pub balance: i128,
    /// Ledger sequence of the last checkpoint
    pub last_accrual_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    PrimaryToken,
    BlockReward,
    Metadata,
    TotalSupply,
    Account(Address),
}
