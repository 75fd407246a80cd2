#![no_std]

mod allowance;
mod bar;
mod error;

pub use allowance::*;
pub use bar::*;
pub use error::*;

/// Largest share or asset amount that can cross the contract boundary.
/// Amounts are `i128` on the token interface and `u128` internally.
pub const MAX_AMOUNT: u128 = i128::MAX as u128;

/// Convert a boundary amount into the internal unsigned representation.
/// Zero and negative amounts are rejected.
pub fn positive_amount(amount: i128) -> Result<u128, BarError> {
    if amount <= 0 {
        return Err(BarError::InvalidAmount);
    }
    Ok(amount as u128)
}

/// Convert an internal amount back to the boundary representation
pub fn to_boundary_amount(amount: u128) -> Result<i128, BarError> {
    i128::try_from(amount).map_err(|_| BarError::ArithmeticOverflow)
}
