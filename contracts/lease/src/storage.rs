use soroban_sdk::{contracttype, Address, Env};

use rental_lib::{LeaseError, LeaseTerms, Occupancy, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Lessor entitled to escrowed rent
    Owner,
    Terms,
    Occupancy,
    EscrowBalance,
    RentalCount,
}

/* ---------------- TTL ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/* ---------------- OWNER ---------------- */

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, LeaseError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(LeaseError::NotInitialized)
}

/* ---------------- TERMS ---------------- */

pub fn has_terms(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Terms)
}

pub fn set_terms(env: &Env, terms: &LeaseTerms) {
    env.storage().instance().set(&DataKey::Terms, terms);
}

pub fn get_terms(env: &Env) -> Result<LeaseTerms, LeaseError> {
    env.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(LeaseError::NotInitialized)
}

/* ---------------- OCCUPANCY ---------------- */

pub fn get_occupancy(env: &Env) -> Occupancy {
    env.storage()
        .instance()
        .get(&DataKey::Occupancy)
        .unwrap_or_else(Occupancy::vacant)
}

pub fn set_occupancy(env: &Env, occupancy: &Occupancy) {
    env.storage().instance().set(&DataKey::Occupancy, occupancy);
}

/* ---------------- ESCROW ---------------- */

pub fn get_escrow_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::EscrowBalance)
        .unwrap_or(0)
}

pub fn set_escrow_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::EscrowBalance, &balance);
}

/* ---------------- COUNTERS ---------------- */

pub fn get_rental_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RentalCount)
        .unwrap_or(0)
}

pub fn increment_rental_count(env: &Env) -> u64 {
    let next = get_rental_count(env).saturating_add(1);
    env.storage().instance().set(&DataKey::RentalCount, &next);
    next
}
