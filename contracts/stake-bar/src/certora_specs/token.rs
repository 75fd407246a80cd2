use soroban_sdk::{Env, Address};
use cvlr_soroban_derive::cvlr_mock_client as mockclient;

// Asset ledger surface the pool consumes. Balances and allowances are
// nondeterministic under the prover.

#[allow(unused)]
#[mockclient(name = "Client")]
trait AssetInterface {
    fn allowance(env: Env, from: Address, spender: Address) -> i128;
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn decimals(env: Env) -> u32;
}
