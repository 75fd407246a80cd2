use soroban_sdk::{contracttype, Address, String};

/// Pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BarConfig {
    /// Underlying asset (SEP-41 token) held by the pool
    pub asset: Address,
    /// Share token name
    pub name: String,
    /// Share token symbol
    pub symbol: String,
    /// Share token decimals, copied from the asset
    pub decimals: u32,
}

/// Pool state - stored in Instance storage.
/// The asset side is never stored; it is read live from the asset ledger.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BarState {
    /// Sum of every holder's share balance
    pub total_shares: u128,
}

impl BarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no shares are outstanding and the next enter is a bootstrap
    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }
}

// ============================================================================
// CONVERSION TYPES
// These separate the pure ratio computation from the storage and token
// side effects applied afterwards.
// ============================================================================

/// Result of pricing a deposit against a pool snapshot
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnterComputation {
    /// Assets to pull from the depositor
    pub amount: u128,
    /// Shares to mint to the depositor
    pub shares: u128,
    /// Outstanding shares before the deposit
    pub total_shares_before: u128,
    /// Pool asset balance before the deposit lands
    pub total_assets_before: u128,
    /// True when the pool was empty (or drained of assets) and minted 1:1
    pub bootstrap: bool,
}

/// Result of pricing a redemption against a pool snapshot
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaveComputation {
    /// Shares to burn
    pub shares: u128,
    /// Assets to pay out
    pub amount: u128,
    /// Outstanding shares before the burn
    pub total_shares_before: u128,
    /// Pool asset balance before the payout
    pub total_assets_before: u128,
}

impl LeaveComputation {
    /// True when this redemption burns the last outstanding shares
    pub fn empties_pool(&self) -> bool {
        self.shares == self.total_shares_before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = BarState::new();
        assert_eq!(state.total_shares, 0);
        assert!(state.is_empty());
    }

    #[test]
    fn test_leave_empties_pool() {
        let full = LeaveComputation {
            shares: 30,
            amount: 50,
            total_shares_before: 30,
            total_assets_before: 50,
        };
        assert!(full.empties_pool());

        let partial = LeaveComputation {
            shares: 5,
            amount: 8,
            total_shares_before: 36,
            total_assets_before: 60,
        };
        assert!(!partial.empties_pool());
    }
}
