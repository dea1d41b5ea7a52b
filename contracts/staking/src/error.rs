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
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Deposits are paused
    StakingIsPaused = 11,

    // ============================================
    // VALIDATION ERRORS (20-39)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 20,
    /// Token balance does not cover the deposit
    InsufficientBalance = 21,
    /// Allowance granted to the staking contract does not cover the deposit
    InsufficientAllowance = 22,
    /// Withdrawal larger than the staked amount
    WithdrawAmountExceedsBalance = 23,

    // ============================================
    // STATE ERRORS (50-59)
    // ============================================
    /// Reward reserve held above the staked principal is too small
    RewardPoolExhausted = 52,

    // ============================================
    // ARITHMETIC ERRORS (60-69)
    // ============================================
    /// Intermediate value does not fit in i128
    ArithmeticOverflow = 60,
}
