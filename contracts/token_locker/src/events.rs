use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct LockedEvent {
    pub depositor: Address,
    pub asset: Address,
    pub amount: i128,
    pub total_locked: i128,
    pub unlock_time: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct UnlockedEvent {
    pub depositor: Address,
    pub asset: Address,
    pub amount: i128,
}
