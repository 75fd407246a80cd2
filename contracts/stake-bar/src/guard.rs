use crate::storage::{is_locked, set_locked};
use bar_types::BarError;
use soroban_sdk::Env;

/// Run `f` while holding the pool lock.
///
/// The lock covers the whole read-compute-mutate sequence of enter/leave,
/// including the call into the asset ledger. A nested enter/leave observed
/// while the lock is held fails with `Reentrant`. The lock is released on
/// the error path as well; the host discards the invocation's writes anyway.
pub fn non_reentrant<T>(
    env: &Env,
    f: impl FnOnce() -> Result<T, BarError>,
) -> Result<T, BarError> {
    if is_locked(env) {
        return Err(BarError::Reentrant);
    }

    set_locked(env, true);
    let result = f();
    set_locked(env, false);

    result
}
