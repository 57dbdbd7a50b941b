#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, IntoVal, String, Symbol, Val,
};


// Persistent token entry TTL, in ledgers.
const TOKEN_TTL_THRESHOLD: u32 = 518_400; // ~30 days
const TOKEN_TTL_EXTEND: u32 = 1_036_800; // ~60 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TokenName,
    TokenSymbol,
    Owner(u64),
    /// Single usage grant per token
    Approved(u64),
    /// (owner, operator) -> approved for all of owner's tokens
    Operator(Address, Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    TokenNotFound = 4,
    TokenExists = 5,
    NotAuthorized = 6,
}

#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    /// Initialize contract with admin (one-time setup)
    pub fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::TokenName, &name);
        env.storage().instance().set(&DataKey::TokenSymbol, &symbol);
        Ok(())
    }

    /// Mint `token_id` to `to`. Admin only.
    pub fn mint(env: Env, to: Address, token_id: u64) -> Result<(), RegistryError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)?;
        admin.require_auth();

        let key = DataKey::Owner(token_id);
        if env.storage().persistent().has(&key) {
            return Err(RegistryError::TokenExists);
        }
        Self::write(&env, &key, &to);

        env.events().publish((Symbol::new(&env, "mint"),), (token_id, to));
        Ok(())
    }

    pub fn name(env: Env) -> Result<String, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::TokenName)
            .ok_or(RegistryError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::TokenSymbol)
            .ok_or(RegistryError::NotInitialized)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, RegistryError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(RegistryError::TokenNotFound)
    }

    /// Let `operator` manage usage grants on every token `owner` holds.
    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();

        let key = DataKey::Operator(owner.clone(), operator.clone());
        if approved {
            Self::write(&env, &key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }

        env.events().publish(
            (Symbol::new(&env, "approval_for_all"),),
            (owner, operator, approved),
        );
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Operator(owner, operator))
            .unwrap_or(false)
    }

    /// Current usage grantee of `token_id`, if any.
    pub fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Approved(token_id))
    }

    /// Grant usage directly as the token owner.
    pub fn approve(env: Env, owner: Address, grantee: Address, token_id: u64) -> Result<(), RegistryError> {
        owner.require_auth();
        if Self::owner_of(env.clone(), token_id)? != owner {
            return Err(RegistryError::Unauthorized);
        }
        Self::grant(&env, token_id, &grantee);
        Ok(())
    }

    /// Grant usage as the owner or one of the owner's operators. Idempotent.
    pub fn authorize(env: Env, operator: Address, token_id: u64, grantee: Address) -> Result<(), RegistryError> {
        operator.require_auth();
        Self::require_operator(&env, &operator, token_id)?;
        Self::grant(&env, token_id, &grantee);
        Ok(())
    }

    /// Clear the usage grant on `token_id`. No-op when nothing is granted.
    pub fn revoke_all(env: Env, operator: Address, token_id: u64) -> Result<(), RegistryError> {
        operator.require_auth();
        Self::require_operator(&env, &operator, token_id)?;

        let key = DataKey::Approved(token_id);
        if env.storage().persistent().has(&key) {
            env.storage().persistent().remove(&key);
            env.events().publish((Symbol::new(&env, "revoke"),), (token_id, operator));
        }
        Ok(())
    }

    /// Move `token_id` to `to`. Any usage grant is cleared.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), RegistryError> {
        from.require_auth();
        if Self::owner_of(env.clone(), token_id)? != from {
            return Err(RegistryError::Unauthorized);
        }

        env.storage().persistent().remove(&DataKey::Approved(token_id));
        Self::write(&env, &DataKey::Owner(token_id), &to);

        env.events().publish((Symbol::new(&env, "transfer"),), (token_id, from, to));
        Ok(())
    }
}

impl AssetRegistry {
    fn require_operator(env: &Env, operator: &Address, token_id: u64) -> Result<(), RegistryError> {
        let owner = Self::owner_of(env.clone(), token_id)?;
        if &owner != operator && !Self::is_approved_for_all(env.clone(), owner, operator.clone()) {
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    fn grant(env: &Env, token_id: u64, grantee: &Address) {
        Self::write(env, &DataKey::Approved(token_id), grantee);
        env.events().publish((Symbol::new(env, "approve"),), (token_id, grantee.clone()));
    }

    fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
        env.storage().persistent().set(key, value);
        env.storage()
            .persistent()
            .extend_ttl(key, TOKEN_TTL_THRESHOLD, TOKEN_TTL_EXTEND);
    }
}
