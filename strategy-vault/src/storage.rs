use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const VAULT_KEY: &str = "Vault";
const TOKEN_KEY: &str = "Token";
const ADMIN_KEY: &str = "Admin";
const PRINCIPAL_KEY: &str = "Principal";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// The only address allowed to move principal in or out
pub fn get_vault(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, VAULT_KEY))
        .unwrap_optimized()
}

pub fn set_vault(e: &Env, vault: &Address) {
    e.storage().instance().set(&Symbol::new(e, VAULT_KEY), vault);
}

pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&Symbol::new(e, TOKEN_KEY), token);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&Symbol::new(e, ADMIN_KEY), admin);
}

pub fn get_principal(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PRINCIPAL_KEY))
        .unwrap_or(0)
}

pub fn set_principal(e: &Env, principal: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, PRINCIPAL_KEY), principal);
}
