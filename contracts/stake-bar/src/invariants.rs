// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over pool snapshots that must hold across every enter, leave,
// share transfer and external asset injection. The engine checks them with
// debug assertions and the formal verification rules assert them.
//
// INVARIANT CATEGORIES:
//
// 1. MINT INVARIANTS
//    - A nonzero deposit never mints zero shares
//    - An empty pool mints 1:1
//
// 2. REDEEM INVARIANTS
//    - A redemption never pays out more than the pool holds
//    - Rounding never creates value across enter + leave
//
// 3. SUPPLY INVARIANTS
//    - Total shares equal the sum of holder balances
//    - Supply stays representable at the token boundary
//
// 4. VALUE INVARIANTS
//    - Injected assets never lower the value of a share
//
// ============================================================================

use bar_types::{EnterComputation, MAX_AMOUNT};

// ============================================================================
// MINT INVARIANTS
// ============================================================================

/// Invariant: a deposit of a positive amount mints a positive number of shares
///
/// Property:
///   amount > 0 => shares > 0
pub fn mint_is_nonzero(amount: u128, shares: u128) -> bool {
    amount == 0 || shares > 0
}

/// Invariant: deposits into an empty pool mint exactly the deposit
///
/// Property:
///   bootstrap => shares == amount
pub fn bootstrap_is_one_to_one(computation: &EnterComputation) -> bool {
    !computation.bootstrap || computation.shares == computation.amount
}

// ============================================================================
// REDEEM INVARIANTS
// ============================================================================

/// Invariant: a redemption is covered by the pool balance
///
/// Property:
///   amount_out <= total_assets
pub fn redeem_within_pool(amount_out: u128, total_assets: u128) -> bool {
    amount_out <= total_assets
}

/// Invariant: entering and immediately leaving never profits
///
/// Property:
///   returned <= deposited
pub fn round_trip_not_profitable(deposited: u128, returned: u128) -> bool {
    returned <= deposited
}

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Invariant: the supply counter matches the ledger of balances
///
/// Property:
///   total_shares == sum(balance(holder) for all holders)
///
/// Note: This is a global property; callers supply the sum.
pub fn supply_matches_balances(total_shares: u128, sum_of_balances: u128) -> bool {
    total_shares == sum_of_balances
}

/// Invariant: supply fits the i128 token interface
pub fn supply_within_bounds(total_shares: u128) -> bool {
    total_shares <= MAX_AMOUNT
}

// ============================================================================
// VALUE INVARIANTS
// ============================================================================

/// Invariant: the payout of a fixed share amount never decreases when
/// assets are injected without minting
///
/// Property:
///   value_after >= value_before
pub fn share_value_not_decreased(value_before: u128, value_after: u128) -> bool {
    value_after >= value_before
}

// ============================================================================
// TESTS
// ============================================================================
