use soroban_sdk::{Address, Env, Symbol};

pub fn initialized(env: &Env, asset: &Address) {
    env.events()
        .publish((Symbol::new(env, "initialized"),), (asset.clone(),));
}

pub fn enter(env: &Env, from: &Address, amount: u128, shares: u128) {
    env.events()
        .publish((Symbol::new(env, "enter"), from.clone()), (amount, shares));
}

pub fn leave(env: &Env, from: &Address, shares: u128, amount: u128) {
    env.events()
        .publish((Symbol::new(env, "leave"), from.clone()), (shares, amount));
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}
