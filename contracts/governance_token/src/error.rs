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
    /// Only the registered primary token may report balances
    UnauthorizedAccrualCaller = 10,

    // ============================================
    // VALIDATION ERRORS (20-39)
    // ============================================
    /// Amount or rate must be non-negative / positive
    InvalidAmount = 20,

    // ============================================
    // STATE ERRORS (50-59)
    // ============================================
    /// Governance balances cannot be moved
    NotTransferable = 50,

    // ============================================
    // ARITHMETIC ERRORS (60-69)
    // ============================================
    /// Accrued amount does not fit in i128
    ArithmeticOverflow = 60,
}
