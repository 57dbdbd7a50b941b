#![no_std]

//! Hourly lease of a single registry-held NFT.
//!
//! The lease is either vacant or held by one tenant. Renting pays
//! `hours * price_per_hour` into escrow and asks the registry to grant the
//! tenant usage of the token; terminating asks the registry to revoke it.
//! Expiry is computed from the ledger timestamp and never clears the tenant on
//! its own: the lease stays occupied until someone calls `terminate`.

use soroban_sdk::{contract, contractimpl, token, Address, Env};
use rental_lib::{
    audit::{self, AuditLog, AuditLogQueryResult, OperationType},
    validation, AssetRegistryClient, LeaseError, LeaseInfo, LeaseStatus, LeaseTerms, Occupancy,
    TerminationPolicy, INIT_TOPIC, OWNER_TOPIC, RENTED_TOPIC, TERMINATED_TOPIC, WITHDRAWN_TOPIC,
};

mod storage;

#[cfg(test)]
mod test_escrow;
#[cfg(test)]
mod test_policy;
#[cfg(test)]
mod test_props;

use storage::*;

#[contract]
pub struct Lease;

#[contractimpl]
impl Lease {
    /// Fix the lease terms (one-time setup)
    ///
    /// `owner` is the lessor entitled to withdraw escrowed rent. The registry
    /// at `asset` must know `token_id`; the owner is expected to approve this
    /// contract as an operator there before the first rental.
    pub fn initialize(
        env: Env,
        owner: Address,
        asset: Address,
        token_id: u64,
        price_per_hour: i128,
        payment_token: Address,
        termination_policy: TerminationPolicy,
    ) -> Result<(), LeaseError> {
        if has_terms(&env) {
            return Err(LeaseError::AlreadyInitialized);
        }

        owner.require_auth();
        validation::validate_price_per_hour(price_per_hour)?;

        let registry = AssetRegistryClient::new(&env, &asset);
        if !matches!(registry.try_owner_of(&token_id), Ok(Ok(_))) {
            return Err(LeaseError::InvalidConfiguration);
        }

        let terms = LeaseTerms {
            asset: asset.clone(),
            token_id,
            price_per_hour,
            payment_token,
            termination_policy,
        };
        set_terms(&env, &terms);
        set_occupancy(&env, &Occupancy::vacant());
        set_escrow_balance(&env, 0);
        set_owner(&env, &owner);
        bump_instance(&env);

        env.events()
            .publish((INIT_TOPIC,), (owner.clone(), asset, token_id, price_per_hour));
        audit::create_audit_log(&env, owner, OperationType::LeaseInitialized, None, 0, 0);

        Ok(())
    }

    /// Rent the asset for `hours`, paying exactly `hours * price_per_hour`.
    ///
    /// Returns the rental expiry timestamp. Fails with `AlreadyRented` while
    /// any tenant is recorded, even one whose rental has already expired.
    pub fn rent(env: Env, tenant: Address, hours: u64, payment: i128) -> Result<u64, LeaseError> {
        tenant.require_auth();

        let terms = get_terms(&env)?;
        validation::validate_payment(hours, terms.price_per_hour, payment)?;
        validation::validate_hours(hours)?;

        if !get_occupancy(&env).is_vacant() {
            return Err(LeaseError::AlreadyRented);
        }

        let rental_expiry = validation::rental_expiry(env.ledger().timestamp(), hours)?;
        let escrow_balance = get_escrow_balance(&env)
            .checked_add(payment)
            .ok_or(LeaseError::InvalidAmount)?;

        let this = env.current_contract_address();
        let registry = AssetRegistryClient::new(&env, &terms.asset);
        if !matches!(
            registry.try_authorize(&this, &terms.token_id, &tenant),
            Ok(Ok(()))
        ) {
            return Err(LeaseError::RegistryRejected);
        }

        // Lock rent in the contract
        token::Client::new(&env, &terms.payment_token).transfer(&tenant, &this, &payment);

        set_occupancy(
            &env,
            &Occupancy {
                tenant: Some(tenant.clone()),
                rental_expiry,
            },
        );
        set_escrow_balance(&env, escrow_balance);
        increment_rental_count(&env);
        bump_instance(&env);

        env.events()
            .publish((RENTED_TOPIC, tenant.clone()), (hours, payment, rental_expiry));
        audit::create_audit_log(
            &env,
            tenant.clone(),
            OperationType::Rented,
            Some(tenant),
            payment,
            rental_expiry,
        );

        Ok(rental_expiry)
    }

    /// End the current rental and revoke the tenant's usage of the asset.
    ///
    /// Anyone may call this. Under `TerminationPolicy::AfterExpiry` an
    /// unexpired rental cannot be ended. On a vacant lease it succeeds without
    /// touching the lease or the registry.
    pub fn terminate(env: Env, caller: Address) -> Result<(), LeaseError> {
        caller.require_auth();

        let terms = get_terms(&env)?;
        let occupancy = get_occupancy(&env);
        let tenant = match occupancy.tenant.clone() {
            Some(tenant) => tenant,
            None => return Ok(()),
        };

        let now = env.ledger().timestamp();
        if terms.termination_policy == TerminationPolicy::AfterExpiry
            && occupancy.status_at(now) == LeaseStatus::Occupied
        {
            return Err(LeaseError::LeaseNotExpired);
        }

        let registry = AssetRegistryClient::new(&env, &terms.asset);
        if !matches!(
            registry.try_revoke_all(&env.current_contract_address(), &terms.token_id),
            Ok(Ok(()))
        ) {
            return Err(LeaseError::RegistryRejected);
        }

        set_occupancy(&env, &Occupancy::vacant());
        bump_instance(&env);

        env.events().publish(
            (TERMINATED_TOPIC, tenant.clone()),
            (caller.clone(), occupancy.rental_expiry),
        );
        audit::create_audit_log(
            &env,
            caller,
            OperationType::Terminated,
            Some(tenant),
            0,
            occupancy.rental_expiry,
        );

        Ok(())
    }

    /// Pay `amount` of escrowed rent out to the owner. Returns the remaining
    /// escrow balance.
    pub fn withdraw(env: Env, owner: Address, amount: i128) -> Result<i128, LeaseError> {
        Self::require_owner(&env, &owner)?;

        let terms = get_terms(&env)?;
        let balance = get_escrow_balance(&env);
        validation::validate_withdrawal(amount, balance)?;

        let remaining = balance - amount;
        set_escrow_balance(&env, remaining);
        bump_instance(&env);

        token::Client::new(&env, &terms.payment_token).transfer(
            &env.current_contract_address(),
            &owner,
            &amount,
        );

        env.events()
            .publish((WITHDRAWN_TOPIC, owner.clone()), (amount, remaining));
        audit::create_audit_log(&env, owner, OperationType::EscrowWithdrawn, None, amount, 0);

        Ok(remaining)
    }

    /// Hand the lessor role, and with it future withdrawals, to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), LeaseError> {
        Self::require_owner(&env, &current_owner)?;
        set_owner(&env, &new_owner);
        bump_instance(&env);

        env.events()
            .publish((OWNER_TOPIC,), (current_owner.clone(), new_owner));
        audit::create_audit_log(
            &env,
            current_owner,
            OperationType::OwnershipTransferred,
            None,
            0,
            0,
        );

        Ok(())
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Registry contract holding the leased token.
    pub fn asset(env: Env) -> Result<Address, LeaseError> {
        Ok(get_terms(&env)?.asset)
    }

    pub fn token_id(env: Env) -> Result<u64, LeaseError> {
        Ok(get_terms(&env)?.token_id)
    }

    pub fn price_per_hour(env: Env) -> Result<i128, LeaseError> {
        Ok(get_terms(&env)?.price_per_hour)
    }

    pub fn tenant(env: Env) -> Option<Address> {
        get_occupancy(&env).tenant
    }

    /// Absolute ledger timestamp the current rental ends at, or 0 when
    /// vacant.
    pub fn duration(env: Env) -> u64 {
        get_occupancy(&env).rental_expiry
    }

    pub fn owner(env: Env) -> Result<Address, LeaseError> {
        get_owner(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, LeaseError> {
        Ok(get_terms(&env)?.payment_token)
    }

    pub fn termination_policy(env: Env) -> Result<TerminationPolicy, LeaseError> {
        Ok(get_terms(&env)?.termination_policy)
    }

    pub fn escrow_balance(env: Env) -> i128 {
        get_escrow_balance(&env)
    }

    /// Number of rentals accepted over the lifetime of the lease.
    pub fn rental_count(env: Env) -> u64 {
        get_rental_count(&env)
    }

    /// Vacant, occupied, or occupied past expiry as of the current ledger.
    pub fn status(env: Env) -> LeaseStatus {
        get_occupancy(&env).status_at(env.ledger().timestamp())
    }

    pub fn lease_info(env: Env) -> Result<LeaseInfo, LeaseError> {
        let terms = get_terms(&env)?;
        let occupancy = get_occupancy(&env);
        let status = occupancy.status_at(env.ledger().timestamp());

        Ok(LeaseInfo {
            owner: get_owner(&env)?,
            terms,
            tenant: occupancy.tenant,
            rental_expiry: occupancy.rental_expiry,
            status,
            escrow_balance: get_escrow_balance(&env),
            rental_count: get_rental_count(&env),
        })
    }

    pub fn audit_log(env: Env, log_id: u64) -> Option<AuditLog> {
        audit::get_audit_log(&env, log_id)
    }

    pub fn audit_logs(env: Env, start_id: u64, end_id: u64, max_results: u32) -> AuditLogQueryResult {
        audit::query_audit_logs(&env, start_id, end_id, max_results)
    }
}

impl Lease {
    /// Authenticate `caller` and check it is the current lessor.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), LeaseError> {
        caller.require_auth();
        if &get_owner(env)? != caller {
            return Err(LeaseError::Unauthorized);
        }
        Ok(())
    }
}
