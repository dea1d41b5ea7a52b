use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct AccruedEvent {
    pub account: Address,
    pub amount: i128,
    pub balance: i128,
    pub ledgers: u32,
}
