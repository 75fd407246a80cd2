use bar_types::{AllowanceKey, AllowanceValue, BarConfig, BarError, BarState};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config and State live in Instance storage: read on every enter/leave
// - Each holder balance is a separate Persistent entry, removed at zero
// - Share allowances are Temporary entries that live until their expiration
//   ledger, so expired approvals disappear on their own
// - The reentrancy lock is a Temporary entry that only exists while an
//   enter/leave is running
// ============================================================================

/// Storage keys for the stake bar contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Share supply (Instance storage)
    State,
    /// Holder -> share balance (Persistent storage)
    Balance(Address),
    /// (owner, spender) -> share allowance (Temporary storage)
    Allowance(AllowanceKey),
    /// Set while enter/leave is running (Temporary storage)
    Lock,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<BarConfig, BarError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(BarError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &BarConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<BarState, BarError> {
    let state = env
        .storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(BarError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(state)
}

pub fn set_state(env: &Env, state: &BarState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn get_balance(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0u128)
}

pub fn set_balance(env: &Env, holder: &Address, balance: u128) {
    let key = DataKey::Balance(holder.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Allowance ===

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().get(&key).unwrap_or_default()
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if allowance.amount == 0 {
        env.storage().temporary().remove(&key);
        return;
    }

    env.storage().temporary().set(&key, allowance);

    // Keep the entry alive until its expiration ledger
    let live_for = allowance
        .expiration_ledger
        .saturating_sub(env.ledger().sequence());
    if live_for > 0 {
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::Lock)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().temporary().set(&DataKey::Lock, &true);
    } else {
        env.storage().temporary().remove(&DataKey::Lock);
    }
}
