use soroban_sdk::{panic_with_error, Env};

use crate::errors::VaultError;
use crate::storage;

/// Run `f` holding the vault lock. A nested call into any guarded entry point
/// fails with `ReentrantCall` instead of observing half-updated state.
///
/// A failing call aborts the invocation and rolls the flag back with every
/// other write, so the lock can never be left set.
pub fn non_reentrant<T>(e: &Env, f: impl FnOnce() -> T) -> T {
    enter(e);
    let result = f();
    exit(e);
    result
}

fn enter(e: &Env) {
    if storage::is_locked(e) {
        panic_with_error!(e, VaultError::ReentrantCall);
    }
    storage::set_locked(e, true);
}

fn exit(e: &Env) {
    storage::set_locked(e, false);
}
