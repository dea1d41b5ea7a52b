use soroban_sdk::{contracttype, Address};

pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockEntry {
    /// Total locked, only grows until withdrawal
    pub amount: i128,
    /// Fixed by the first deposit
    pub unlock_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Lock(Address, Address), // (depositor, asset)
}
