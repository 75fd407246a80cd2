use crate::full_math::mul_div;
use bar_types::{BarError, EnterComputation, LeaveComputation, MAX_AMOUNT};
use soroban_sdk::Env;

/// Price a deposit of `amount` assets against the pool snapshot.
///
/// An empty pool (no shares, or shares backed by no assets) mints 1:1.
/// Otherwise `shares = floor(amount * total_shares / total_assets)`, rounding
/// in favour of existing holders. A deposit that would mint nothing is
/// rejected with `ZeroSharesMinted`.
pub fn compute_enter(
    env: &Env,
    amount: u128,
    total_shares: u128,
    total_assets: u128,
) -> Result<EnterComputation, BarError> {
    if amount == 0 {
        return Err(BarError::InvalidAmount);
    }

    let bootstrap = total_shares == 0 || total_assets == 0;
    let shares = if bootstrap {
        amount
    } else {
        shares_for_deposit(env, amount, total_shares, total_assets)?
    };

    if shares == 0 {
        return Err(BarError::ZeroSharesMinted);
    }
    if shares > MAX_AMOUNT {
        return Err(BarError::ArithmeticOverflow);
    }

    Ok(EnterComputation {
        amount,
        shares,
        total_shares_before: total_shares,
        total_assets_before: total_assets,
        bootstrap,
    })
}

/// Price a redemption of `shares` against the pool snapshot.
///
/// `amount = floor(shares * total_assets / total_shares)`, rounding in
/// favour of the holders that stay.
pub fn compute_leave(
    env: &Env,
    shares: u128,
    total_shares: u128,
    total_assets: u128,
) -> Result<LeaveComputation, BarError> {
    if shares == 0 {
        return Err(BarError::InvalidAmount);
    }
    if shares > total_shares {
        return Err(BarError::InsufficientBalance);
    }

    let amount = assets_for_shares(env, shares, total_shares, total_assets)?;

    Ok(LeaveComputation {
        shares,
        amount,
        total_shares_before: total_shares,
        total_assets_before: total_assets,
    })
}

/// floor(amount * total_shares / total_assets)
pub fn shares_for_deposit(
    env: &Env,
    amount: u128,
    total_shares: u128,
    total_assets: u128,
) -> Result<u128, BarError> {
    mul_div(env, amount, total_shares, total_assets).ok_or(BarError::ArithmeticOverflow)
}

/// floor(shares * total_assets / total_shares)
pub fn assets_for_shares(
    env: &Env,
    shares: u128,
    total_shares: u128,
    total_assets: u128,
) -> Result<u128, BarError> {
    mul_div(env, shares, total_assets, total_shares).ok_or(BarError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === compute_enter tests ===

    #[test]
    fn test_enter_bootstrap_mints_one_to_one() {
        let env = Env::default();
        let result = compute_enter(&env, 20, 0, 0).unwrap();
        assert_eq!(result.shares, 20);
        assert!(result.bootstrap);
    }

    #[test]
    fn test_enter_bootstrap_ignores_dust() {
        let env = Env::default();
        // No shares outstanding but assets left behind
        let result = compute_enter(&env, 10, 0, 7).unwrap();
        assert_eq!(result.shares, 10);
        assert!(result.bootstrap);
        assert_eq!(result.total_assets_before, 7);
    }

    #[test]
    fn test_enter_bootstrap_when_assets_drained() {
        let env = Env::default();
        // Shares outstanding but no assets backing them
        let result = compute_enter(&env, 10, 30, 0).unwrap();
        assert_eq!(result.shares, 10);
        assert!(result.bootstrap);
    }

    #[test]
    fn test_enter_after_injection() {
        let env = Env::default();
        // 30 shares backed by 50 assets: 10 * 30 / 50 = 6
        let result = compute_enter(&env, 10, 30, 50).unwrap();
        assert_eq!(result.shares, 6);
        assert!(!result.bootstrap);
        assert_eq!(result.total_shares_before, 30);
        assert_eq!(result.total_assets_before, 50);
    }

    #[test]
    fn test_enter_rounds_down() {
        let env = Env::default();
        // 7 * 3 / 4 = 5.25
        assert_eq!(compute_enter(&env, 7, 3, 4).unwrap().shares, 5);
    }

    #[test]
    fn test_enter_zero_amount() {
        let env = Env::default();
        assert_eq!(compute_enter(&env, 0, 30, 50), Err(BarError::InvalidAmount));
        assert_eq!(compute_enter(&env, 0, 0, 0), Err(BarError::InvalidAmount));
    }

    #[test]
    fn test_enter_zero_shares_rejected() {
        let env = Env::default();
        // 1 share backed by 1000 assets: a deposit of 999 buys nothing
        assert_eq!(
            compute_enter(&env, 999, 1, 1000),
            Err(BarError::ZeroSharesMinted)
        );
        assert_eq!(compute_enter(&env, 1000, 1, 1000).unwrap().shares, 1);
    }

    #[test]
    fn test_enter_large_values_do_not_wrap() {
        let env = Env::default();
        // amount * total_shares overflows u128, the quotient does not
        let big = 1u128 << 100;
        let result = compute_enter(&env, big, big, big).unwrap();
        assert_eq!(result.shares, big);
    }

    #[test]
    fn test_enter_result_overflow() {
        let env = Env::default();
        // Shares heavily diluted relative to assets: the mint exceeds MAX_AMOUNT
        assert_eq!(
            compute_enter(&env, MAX_AMOUNT, MAX_AMOUNT, 1),
            Err(BarError::ArithmeticOverflow)
        );
    }

    // === compute_leave tests ===

    #[test]
    fn test_leave_proportional() {
        let env = Env::default();
        // 5 * 60 / 36 = 8.33 -> 8
        let result = compute_leave(&env, 5, 36, 60).unwrap();
        assert_eq!(result.amount, 8);
        assert_eq!(result.shares, 5);
        assert!(!result.empties_pool());
    }

    #[test]
    fn test_leave_all_shares_takes_everything() {
        let env = Env::default();
        let result = compute_leave(&env, 31, 31, 52).unwrap();
        assert_eq!(result.amount, 52);
        assert!(result.empties_pool());
    }

    #[test]
    fn test_leave_worthless_shares() {
        let env = Env::default();
        let result = compute_leave(&env, 10, 30, 0).unwrap();
        assert_eq!(result.amount, 0);
    }

    #[test]
    fn test_leave_zero_shares() {
        let env = Env::default();
        assert_eq!(compute_leave(&env, 0, 30, 50), Err(BarError::InvalidAmount));
    }

    #[test]
    fn test_leave_more_than_supply() {
        let env = Env::default();
        assert_eq!(
            compute_leave(&env, 31, 30, 50),
            Err(BarError::InsufficientBalance)
        );
        assert_eq!(
            compute_leave(&env, 1, 0, 50),
            Err(BarError::InsufficientBalance)
        );
    }

    #[test]
    fn test_leave_large_values_do_not_wrap() {
        let env = Env::default();
        let big = 1u128 << 100;
        let result = compute_leave(&env, big / 2, big, big * 4).unwrap();
        assert_eq!(result.amount, big * 2);
    }

    // === Properties ===

    #[test]
    fn test_round_trip_never_profits() {
        let env = Env::default();
        let pools: [(u128, u128); 6] = [
            (0, 0),
            (30, 50),
            (36, 60),
            (1, 1000),
            (997, 1009),
            (1_000_000_007, 3),
        ];

        for (total_shares, total_assets) in pools {
            for amount in [1u128, 2, 3, 10, 999, 1_000_003] {
                let Ok(enter) = compute_enter(&env, amount, total_shares, total_assets) else {
                    continue;
                };
                let leave = compute_leave(
                    &env,
                    enter.shares,
                    total_shares + enter.shares,
                    total_assets + amount,
                )
                .unwrap();
                assert!(
                    leave.amount <= amount,
                    "round trip of {} into ({}, {}) returned {}",
                    amount,
                    total_shares,
                    total_assets,
                    leave.amount
                );
            }
        }
    }

    #[test]
    fn test_injection_never_lowers_share_value() {
        let env = Env::default();
        let total_shares = 36u128;
        let mut previous = 0u128;

        for total_assets in [36u128, 37, 50, 60, 71, 1000] {
            let value = compute_leave(&env, 1, total_shares, total_assets)
                .unwrap()
                .amount;
            assert!(value >= previous);
            previous = value;
        }
    }
}
