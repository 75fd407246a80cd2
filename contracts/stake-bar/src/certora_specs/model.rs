// ============================================================================
// GHOST STATE AND MODEL INITIALIZATION
// ============================================================================

/// Ghost state tracking shares minted across calls
static mut GHOST_SHARES_MINTED: u128 = 0;

/// Ghost state tracking shares burned across calls
static mut GHOST_SHARES_BURNED: u128 = 0;

// ============================================================================
// GHOST STATE ACCESSORS
// ============================================================================

pub fn shares_minted() -> u128 {
    unsafe { GHOST_SHARES_MINTED }
}

pub fn add_shares_minted(shares: u128) {
    unsafe { GHOST_SHARES_MINTED += shares }
}

pub fn shares_burned() -> u128 {
    unsafe { GHOST_SHARES_BURNED }
}

pub fn add_shares_burned(shares: u128) {
    unsafe { GHOST_SHARES_BURNED += shares }
}

// ============================================================================
// MODEL INITIALIZATION
// ============================================================================

/// Reset ghost counters
pub fn init() {
    unsafe {
        GHOST_SHARES_MINTED = 0;
        GHOST_SHARES_BURNED = 0;
    }
}

// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures pool state for before/after comparisons
#[derive(Clone)]
pub struct BarSnapshot {
    pub total_shares: u128,
    pub total_assets: u128,
}

impl BarSnapshot {
    pub fn capture(env: &soroban_sdk::Env) -> Self {
        let state = crate::StakeBar::get_state(env.clone()).unwrap_or_default();
        let total_assets = crate::StakeBar::total_assets(env.clone()).unwrap_or(0);
        Self {
            total_shares: state.total_shares,
            total_assets: total_assets as u128,
        }
    }
}

/// Captures one holder's share position
#[derive(Clone)]
pub struct HolderSnapshot {
    pub shares: u128,
}

impl HolderSnapshot {
    pub fn capture(env: &soroban_sdk::Env, holder: &soroban_sdk::Address) -> Self {
        let shares = crate::StakeBar::balance(env.clone(), holder.clone()).unwrap_or(0);
        Self {
            shares: shares as u128,
        }
    }
}
