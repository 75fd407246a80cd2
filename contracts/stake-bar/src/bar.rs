use crate::asset;
use crate::events;
use crate::guard::non_reentrant;
use crate::invariants;
use crate::share_token;
use crate::storage::{get_config, get_state, set_state};
use bar_math::{compute_enter, compute_leave};
use bar_types::{BarError, EnterComputation, LeaveComputation};
use soroban_sdk::{log, Address, Env};

/// Price a deposit against the current pool without touching it
pub fn preview_enter(env: &Env, amount: u128) -> Result<EnterComputation, BarError> {
    let config = get_config(env)?;
    let state = get_state(env)?;
    let total_assets = asset::total_assets(env, &config.asset)?;

    compute_enter(env, amount, state.total_shares, total_assets)
}

/// Price a redemption against the current pool without touching it
pub fn preview_leave(env: &Env, shares: u128) -> Result<LeaveComputation, BarError> {
    let config = get_config(env)?;
    let state = get_state(env)?;
    let total_assets = asset::total_assets(env, &config.asset)?;

    compute_leave(env, shares, state.total_shares, total_assets)
}

/// Deposit `amount` assets from `from` and mint shares for them.
///
/// The ratio is read before the deposit lands. The transfer in and the mint
/// happen under the pool lock within one invocation.
pub fn enter(env: &Env, from: &Address, amount: u128) -> Result<u128, BarError> {
    non_reentrant(env, || {
        let config = get_config(env)?;
        let mut state = get_state(env)?;
        let total_assets_before = asset::total_assets(env, &config.asset)?;

        let computation = compute_enter(env, amount, state.total_shares, total_assets_before)?;
        debug_assert!(invariants::mint_is_nonzero(computation.amount, computation.shares));
        debug_assert!(invariants::bootstrap_is_one_to_one(&computation));

        asset::pull_from(env, &config.asset, from, computation.amount)?;
        share_token::mint(env, &mut state, from, computation.shares)?;
        debug_assert!(invariants::supply_within_bounds(state.total_shares));
        set_state(env, &state);

        log!(
            env,
            "enter",
            from.clone(),
            computation.amount,
            computation.shares,
            computation.bootstrap
        );
        events::enter(env, from, computation.amount, computation.shares);

        Ok(computation.shares)
    })
}

/// Burn `shares` from `from` and pay out their slice of the pool.
///
/// The burn is committed before the asset ledger is called.
pub fn leave(env: &Env, from: &Address, shares: u128) -> Result<u128, BarError> {
    non_reentrant(env, || {
        let config = get_config(env)?;
        let mut state = get_state(env)?;
        let total_assets_before = asset::total_assets(env, &config.asset)?;

        let computation = compute_leave(env, shares, state.total_shares, total_assets_before)?;
        debug_assert!(invariants::redeem_within_pool(
            computation.amount,
            computation.total_assets_before
        ));

        share_token::burn(env, &mut state, from, computation.shares)?;
        set_state(env, &state);

        asset::push_to(env, &config.asset, from, computation.amount)?;

        if computation.empties_pool() {
            log!(
                env,
                "pool emptied",
                total_assets_before - computation.amount
            );
        }
        log!(env, "leave", from.clone(), computation.shares, computation.amount);
        events::leave(env, from, computation.shares, computation.amount);

        Ok(computation.amount)
    })
}
