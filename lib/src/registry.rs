//! Client-side view of the asset registry the lease delegates usage rights to.
//!
//! The lease never keeps its own record of who may use the asset; it asks the
//! registry to grant and revoke, acting as an approved operator of the owner.
use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistryInterface {
    /// Current owner of `token_id`. Fails for unknown tokens.
    fn owner_of(env: Env, token_id: u64) -> Address;

    /// Grant `grantee` usage of `token_id`. `operator` must be the owner or
    /// approved for all of the owner's tokens. Idempotent.
    fn authorize(env: Env, operator: Address, token_id: u64, grantee: Address);

    /// Clear any usage grant on `token_id`. No-op when nothing is granted.
    fn revoke_all(env: Env, operator: Address, token_id: u64);
}
