#![no_std]

mod asset;
mod bar;
mod events;
mod guard;
pub mod invariants;
mod share_token;
mod storage;

pub mod certora_specs;

use bar_types::{positive_amount, to_boundary_amount, BarConfig, BarError, BarState};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage::{get_balance, get_config, get_state, has_config, set_config, set_state};

#[contract]
pub struct StakeBar;

#[contractimpl]
impl StakeBar {
    /// Initialize the pool over `asset`
    pub fn initialize(
        env: Env,
        asset: Address,
        name: String,
        symbol: String,
    ) -> Result<(), BarError> {
        if has_config(&env) {
            return Err(BarError::AlreadyInitialized);
        }

        let config = BarConfig {
            decimals: asset::decimals(&env, &asset),
            asset: asset.clone(),
            name,
            symbol,
        };
        set_config(&env, &config);
        set_state(&env, &BarState::new());

        events::initialized(&env, &asset);
        Ok(())
    }

    /// Deposit assets and receive shares
    ///
    /// `from` must have approved this contract to spend at least `amount`
    /// of the asset.
    ///
    /// # Returns
    /// Shares minted to `from`
    pub fn enter(env: Env, from: Address, amount: i128) -> Result<i128, BarError> {
        from.require_auth();
        let amount = positive_amount(amount)?;
        let shares = bar::enter(&env, &from, amount)?;
        to_boundary_amount(shares)
    }

    /// Redeem shares for a proportional slice of the pool
    ///
    /// # Returns
    /// Assets paid to `from`
    pub fn leave(env: Env, from: Address, shares: i128) -> Result<i128, BarError> {
        from.require_auth();
        let shares = positive_amount(shares)?;
        let amount = bar::leave(&env, &from, shares)?;
        to_boundary_amount(amount)
    }

    // === Quotes ===

    /// Shares `enter(amount)` would mint right now
    pub fn preview_enter(env: Env, amount: i128) -> Result<i128, BarError> {
        let computation = bar::preview_enter(&env, positive_amount(amount)?)?;
        to_boundary_amount(computation.shares)
    }

    /// Assets `leave(shares)` would pay right now
    pub fn preview_leave(env: Env, shares: i128) -> Result<i128, BarError> {
        let computation = bar::preview_leave(&env, positive_amount(shares)?)?;
        to_boundary_amount(computation.amount)
    }

    // === Share Token ===

    pub fn balance(env: Env, id: Address) -> Result<i128, BarError> {
        get_config(&env)?;
        to_boundary_amount(get_balance(&env, &id))
    }

    pub fn total_supply(env: Env) -> Result<i128, BarError> {
        to_boundary_amount(get_state(&env)?.total_shares)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> Result<i128, BarError> {
        get_config(&env)?;
        to_boundary_amount(share_token::allowance(&env, &from, &spender))
    }

    /// Allow `spender` to move up to `amount` of `from`'s shares until
    /// `expiration_ledger`. An amount of zero revokes the allowance.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), BarError> {
        from.require_auth();
        get_config(&env)?;
        if amount < 0 {
            return Err(BarError::InvalidAmount);
        }

        share_token::approve(&env, &from, &spender, amount as u128, expiration_ledger)?;
        events::approve(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), BarError> {
        from.require_auth();
        get_config(&env)?;

        share_token::move_balance(&env, &from, &to, positive_amount(amount)?)?;
        events::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), BarError> {
        spender.require_auth();
        get_config(&env)?;

        let shares = positive_amount(amount)?;
        share_token::spend_allowance(&env, &from, &spender, shares)?;
        share_token::move_balance(&env, &from, &to, shares)?;
        events::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, BarError> {
        Ok(get_config(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, BarError> {
        Ok(get_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, BarError> {
        Ok(get_config(&env)?.symbol)
    }

    // === View Functions ===

    /// Pool balance of the underlying asset
    pub fn total_assets(env: Env) -> Result<i128, BarError> {
        let config = get_config(&env)?;
        to_boundary_amount(asset::total_assets(&env, &config.asset)?)
    }

    /// Underlying asset address
    pub fn asset(env: Env) -> Result<Address, BarError> {
        Ok(get_config(&env)?.asset)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> Result<BarConfig, BarError> {
        get_config(&env)
    }

    /// Get pool state
    pub fn get_state(env: Env) -> Result<BarState, BarError> {
        get_state(&env)
    }
}
