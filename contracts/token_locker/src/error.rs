use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // VALIDATION ERRORS (20-39)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 20,
    /// Depositor balance does not cover the deposit
    InsufficientBalance = 21,
    /// First deposit needs a lock of at least one year
    InvalidLockPeriod = 24,

    // ============================================
    // TEMPORAL ERRORS (40-49)
    // ============================================
    /// Unlock time not reached yet
    LockPeriodNotEnded = 41,

    // ============================================
    // STATE ERRORS (50-59)
    // ============================================
    /// Nothing locked for this asset
    NoDepositForToken = 53,

    // ============================================
    // ARITHMETIC ERRORS (60-69)
    // ============================================
    /// Unlock time or locked amount does not fit
    ArithmeticOverflow = 60,
}
