// ============================================================================
// SHARE MATH SPECIFICATIONS
// ============================================================================
//
// These specifications verify the share/asset conversions used by the bar.
//
// KEY INVARIANTS:
// 1. A successful enter never mints zero shares
// 2. Enter rounds in favor of the pool
// 3. Leave never pays out more than the pool holds
// 4. An enter followed by a leave is never profitable
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity check - a non-bootstrap enter is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_enter_proportional(env: Env, amount: u128, total_shares: u128, total_assets: u128) {
    cvlr_assume!(total_shares > 0 && total_assets > 0);
    let result = bar_math::compute_enter(&env, amount, total_shares, total_assets);
    cvlr_satisfy!(result.is_ok());
}

/// RULE: Successful enter mints a positive number of shares
#[cfg(feature = "certora")]
#[rule]
pub fn enter_mints_nonzero(env: Env, amount: u128, total_shares: u128, total_assets: u128) {
    if let Ok(c) = bar_math::compute_enter(&env, amount, total_shares, total_assets) {
        cvlr_assert!(crate::invariants::mint_is_nonzero(c.amount, c.shares));
    }
}

/// RULE: Bootstrap enter mints exactly the deposited amount
#[cfg(feature = "certora")]
#[rule]
pub fn bootstrap_enter_is_one_to_one(env: Env, amount: u128, total_assets: u128) {
    cvlr_assume!(amount > 0 && amount <= bar_types::MAX_AMOUNT);
    let result = bar_math::compute_enter(&env, amount, 0, total_assets);
    cvlr_assert!(result.is_ok());
    if let Ok(c) = result {
        cvlr_assert!(crate::invariants::bootstrap_is_one_to_one(&c));
    }
}

/// RULE: Enter rounds down, shares * assets <= amount * supply
#[cfg(feature = "certora")]
#[rule]
pub fn enter_rounds_toward_pool(env: Env, amount: u64, total_shares: u64, total_assets: u64) {
    cvlr_assume!(total_shares > 0 && total_assets > 0);
    if let Ok(c) = bar_math::compute_enter(
        &env,
        amount as u128,
        total_shares as u128,
        total_assets as u128,
    ) {
        cvlr_assert!(c.shares * total_assets as u128 <= amount as u128 * total_shares as u128);
    }
}

/// RULE: Leave never pays out more than the pool holds
#[cfg(feature = "certora")]
#[rule]
pub fn leave_within_pool(env: Env, shares: u128, total_shares: u128, total_assets: u128) {
    if let Ok(c) = bar_math::compute_leave(&env, shares, total_shares, total_assets) {
        cvlr_assert!(crate::invariants::redeem_within_pool(c.amount, total_assets));
    }
}

/// RULE: Leaving the whole supply pays out the whole pool
#[cfg(feature = "certora")]
#[rule]
pub fn full_leave_drains_pool(env: Env, total_shares: u128, total_assets: u128) {
    cvlr_assume!(total_shares > 0);
    let result = bar_math::compute_leave(&env, total_shares, total_shares, total_assets);
    cvlr_assert!(result.is_ok());
    if let Ok(c) = result {
        cvlr_assert!(c.amount == total_assets);
        cvlr_assert!(c.empties_pool());
    }
}

/// RULE: Enter followed by an immediate leave returns at most the deposit
#[cfg(feature = "certora")]
#[rule]
pub fn round_trip_not_profitable(env: Env, amount: u64, total_shares: u64, total_assets: u64) {
    let total_shares = total_shares as u128;
    let total_assets = total_assets as u128;
    let amount = amount as u128;

    if let Ok(entered) = bar_math::compute_enter(&env, amount, total_shares, total_assets) {
        let shares_after = total_shares + entered.shares;
        let assets_after = total_assets + amount;
        if let Ok(left) = bar_math::compute_leave(&env, entered.shares, shares_after, assets_after) {
            cvlr_assert!(crate::invariants::round_trip_not_profitable(amount, left.amount));
        }
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
