use soroban_sdk::{contracttype, Address};

use crate::storage::{PaymentAsset, VestingPoolKind};

#[contracttype]
#[derive(Clone, Debug)]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BurnEvent {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PresaleMintEvent {
    pub user: Address,
    pub asset: PaymentAsset,
    /// Whole tokens bought
    pub amount: i128,
    /// Amount of the payment asset charged
    pub cost: i128,
    pub total_sold: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct VestingMintEvent {
    pub pool: VestingPoolKind,
    pub recipient: Address,
    pub amount: i128,
    pub total_claimed: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContractRegisteredEvent {
    pub contract: Address,
}
