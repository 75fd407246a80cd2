// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification specifications for the stake bar share accounting.
//
// STRUCTURE:
//
// - model.rs        : Ghost state, state snapshots
// - token.rs        : Mock asset ledger client used under the certora feature
// - math_specs.rs   : Pure conversion verification (bar-math)
// - bar_specs.rs    : enter/leave verification against the contract
// - supply_specs.rs : Share supply and share token ledger verification
//
// PATTERNS USED:
//
// 1. Ghost state - Track minted/burned shares across calls
// 2. State snapshots - Before/after comparisons
// 3. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p stake-bar
// - Certora build: cargo build --features certora -p stake-bar
// - Verification: certoraSorobanProver stake_bar.conf
//
// ============================================================================

// Ghost state and model initialization
#[cfg(feature = "certora")]
pub mod model;

// Mock asset ledger
#[cfg(feature = "certora")]
pub mod token;

// Spec modules
pub mod bar_specs;
pub mod math_specs;
pub mod supply_specs;
