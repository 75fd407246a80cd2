use soroban_sdk::contracterror;

/// Errors surfaced by the stake bar and its conversion math
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BarError {
    /// `initialize` was already called
    AlreadyInitialized = 1,
    /// Pool has not been initialized
    NotInitialized = 2,
    /// Zero, negative or otherwise out-of-range amount
    InvalidAmount = 3,
    /// Caller lacks the shares (leave, transfer) or the asset (enter)
    InsufficientBalance = 4,
    /// Spender is not approved for the requested amount
    InsufficientAllowance = 5,
    /// A nonzero deposit would mint zero shares at the current ratio
    ZeroSharesMinted = 6,
    /// Intermediate product or result does not fit
    ArithmeticOverflow = 7,
    /// Approval expires before the current ledger
    InvalidExpiration = 8,
    /// enter/leave re-entered while another one is in progress
    Reentrant = 9,
}
