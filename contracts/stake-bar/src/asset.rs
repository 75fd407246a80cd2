use bar_types::{to_boundary_amount, BarError};
use soroban_sdk::{Address, Env};

#[cfg(not(feature = "certora"))]
use soroban_sdk::token::TokenClient as AssetClient;

#[cfg(feature = "certora")]
use crate::certora_specs::token::Client as AssetClient;

/// Pool balance of the underlying asset, read live from the asset ledger
pub fn total_assets(env: &Env, asset: &Address) -> Result<u128, BarError> {
    let balance = AssetClient::new(env, asset).balance(&env.current_contract_address());
    u128::try_from(balance).map_err(|_| BarError::ArithmeticOverflow)
}

/// Decimals of the underlying asset
pub fn decimals(env: &Env, asset: &Address) -> u32 {
    AssetClient::new(env, asset).decimals()
}

/// Pull `amount` from `from` into the pool through the allowance `from`
/// granted to the pool
pub fn pull_from(env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<(), BarError> {
    let client = AssetClient::new(env, asset);
    let pool = env.current_contract_address();
    let amount = to_boundary_amount(amount)?;

    if client.balance(from) < amount {
        return Err(BarError::InsufficientBalance);
    }
    if client.allowance(from, &pool) < amount {
        return Err(BarError::InsufficientAllowance);
    }

    client.transfer_from(&pool, from, &pool, &amount);
    Ok(())
}

/// Pay `amount` out of the pool to `to`
pub fn push_to(env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), BarError> {
    if amount == 0 {
        return Ok(());
    }

    let amount = to_boundary_amount(amount)?;
    AssetClient::new(env, asset).transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
