use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AMOUNT/BALANCE ERRORS (20-29)
    // ============================================
    /// Amount must be positive (or non-negative for transfers)
    InvalidAmount = 20,
    /// Account balance does not cover the debit
    InsufficientBalance = 21,
    /// Spender allowance does not cover the debit
    InsufficientAllowance = 22,
    /// Allowance expiration ledger is already in the past
    InvalidExpirationLedger = 23,

    // ============================================
    // PRESALE ERRORS (40-49)
    // ============================================
    /// Purchase would sell past the presale supply
    PresaleLimitReached = 40,

    // ============================================
    // SUPPLY ERRORS (50-59)
    // ============================================
    /// Mint would exceed MAX_SUPPLY
    MaxSupplyExceeded = 50,
    /// Staking allocation was already minted
    StakingAlreadySet = 51,

    // ============================================
    // ARITHMETIC ERRORS (60-69)
    // ============================================
    /// Intermediate value does not fit in i128
    ArithmeticOverflow = 60,
}
