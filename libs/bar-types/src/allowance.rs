use soroban_sdk::{contracttype, Address};

/// Share allowance key: owner -> spender
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

/// Share allowance granted by `approve`
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllowanceValue {
    /// Shares the spender may still move
    pub amount: u128,
    /// Last ledger on which the allowance is usable
    pub expiration_ledger: u32,
}

impl AllowanceValue {
    /// Amount usable at `ledger`; expired allowances read as zero
    pub fn available_at(&self, ledger: u32) -> u128 {
        if self.expiration_ledger < ledger {
            0
        } else {
            self.amount
        }
    }
}
