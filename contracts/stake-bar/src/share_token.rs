use crate::storage::{get_allowance, get_balance, set_allowance, set_balance};
use bar_types::{AllowanceValue, BarError, BarState, MAX_AMOUNT};
use soroban_sdk::{Address, Env};

/// Credit `shares` to `to` and grow the supply
pub fn mint(env: &Env, state: &mut BarState, to: &Address, shares: u128) -> Result<(), BarError> {
    let total_shares = state
        .total_shares
        .checked_add(shares)
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or(BarError::ArithmeticOverflow)?;

    // A balance never exceeds the supply, so this cannot overflow
    let balance = get_balance(env, to) + shares;

    set_balance(env, to, balance);
    state.total_shares = total_shares;
    Ok(())
}

/// Debit `shares` from `from` and shrink the supply
pub fn burn(env: &Env, state: &mut BarState, from: &Address, shares: u128) -> Result<(), BarError> {
    let balance = get_balance(env, from)
        .checked_sub(shares)
        .ok_or(BarError::InsufficientBalance)?;
    let total_shares = state
        .total_shares
        .checked_sub(shares)
        .ok_or(BarError::InsufficientBalance)?;

    set_balance(env, from, balance);
    state.total_shares = total_shares;
    Ok(())
}

/// Move shares between holders. The supply is unchanged.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), BarError> {
    let from_balance = get_balance(env, from)
        .checked_sub(amount)
        .ok_or(BarError::InsufficientBalance)?;
    set_balance(env, from, from_balance);

    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(BarError::ArithmeticOverflow)?;
    set_balance(env, to, to_balance);
    Ok(())
}

/// Set the allowance of `spender` over `from`'s shares
pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: u128,
    expiration_ledger: u32,
) -> Result<(), BarError> {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(BarError::InvalidExpiration);
    }
    // Temporary entries cannot outlive max_ttl
    if expiration_ledger > sequence.saturating_add(env.storage().max_ttl()) {
        return Err(BarError::InvalidExpiration);
    }

    set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    Ok(())
}

/// Allowance of `spender` over `from`'s shares at the current ledger
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> u128 {
    get_allowance(env, from, spender).available_at(env.ledger().sequence())
}

/// Consume `amount` of `spender`'s allowance over `from`'s shares
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: u128,
) -> Result<(), BarError> {
    let current = get_allowance(env, from, spender);
    let remaining = current
        .available_at(env.ledger().sequence())
        .checked_sub(amount)
        .ok_or(BarError::InsufficientAllowance)?;

    set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount: remaining,
            expiration_ledger: current.expiration_ledger,
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StakeBar;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::Env;

    #[test]
    fn test_mint_and_burn_track_supply() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut state = BarState::new();
            mint(&env, &mut state, &alice, 20).unwrap();
            mint(&env, &mut state, &bob, 10).unwrap();
            assert_eq!(state.total_shares, 30);
            assert_eq!(get_balance(&env, &alice) + get_balance(&env, &bob), 30);

            burn(&env, &mut state, &bob, 5).unwrap();
            assert_eq!(state.total_shares, 25);
            assert_eq!(get_balance(&env, &bob), 5);
        });
    }

    #[test]
    fn test_burn_more_than_balance() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut state = BarState::new();
            mint(&env, &mut state, &alice, 100).unwrap();
            assert_eq!(
                burn(&env, &mut state, &alice, 200),
                Err(BarError::InsufficientBalance)
            );
            assert_eq!(state.total_shares, 100);
            assert_eq!(get_balance(&env, &alice), 100);
        });
    }

    #[test]
    fn test_mint_supply_overflow() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut state = BarState::new();
            mint(&env, &mut state, &alice, MAX_AMOUNT).unwrap();
            assert_eq!(
                mint(&env, &mut state, &alice, 1),
                Err(BarError::ArithmeticOverflow)
            );
            assert_eq!(state.total_shares, MAX_AMOUNT);
        });
    }

    #[test]
    fn test_move_balance_to_self() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut state = BarState::new();
            mint(&env, &mut state, &alice, 10).unwrap();
            move_balance(&env, &alice, &alice, 10).unwrap();
            assert_eq!(get_balance(&env, &alice), 10);
        });
    }

    #[test]
    fn test_spend_allowance() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            approve(&env, &alice, &bob, 50, 100).unwrap();
            spend_allowance(&env, &alice, &bob, 20).unwrap();
            assert_eq!(allowance(&env, &alice, &bob), 30);
            assert_eq!(
                spend_allowance(&env, &alice, &bob, 31),
                Err(BarError::InsufficientAllowance)
            );
        });
    }

    #[test]
    fn test_approve_beyond_max_ttl_rejected() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let furthest = env.ledger().sequence() + env.storage().max_ttl();
            assert_eq!(
                approve(&env, &alice, &bob, 50, furthest + 1),
                Err(BarError::InvalidExpiration)
            );
            assert_eq!(allowance(&env, &alice, &bob), 0);

            approve(&env, &alice, &bob, 50, furthest).unwrap();
            assert_eq!(allowance(&env, &alice, &bob), 50);
        });
    }

    #[test]
    fn test_allowance_expires() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&contract_id, || {
            approve(&env, &alice, &bob, 50, 10).unwrap();
        });

        env.ledger().with_mut(|li| li.sequence_number = 11);

        env.as_contract(&contract_id, || {
            assert_eq!(allowance(&env, &alice, &bob), 0);
            assert_eq!(
                spend_allowance(&env, &alice, &bob, 1),
                Err(BarError::InsufficientAllowance)
            );
        });
    }

    #[test]
    fn test_approve_in_the_past() {
        let env = Env::default();
        let contract_id = env.register(StakeBar, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.ledger().with_mut(|li| li.sequence_number = 100);

        env.as_contract(&contract_id, || {
            assert_eq!(
                approve(&env, &alice, &bob, 50, 99),
                Err(BarError::InvalidExpiration)
            );
            // Revoking with a past expiration is allowed
            assert_eq!(approve(&env, &alice, &bob, 0, 0), Ok(()));
        });
    }
}
