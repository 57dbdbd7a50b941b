//! Escrowed rent, owner withdrawals, and the audit trail.

#![cfg(test)]

use rental_lib::{audit::OperationType, LeaseError, LeaseStatus, TerminationPolicy, SECONDS_PER_HOUR};
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::testutils::{advance_to, setup, START_TIME, TOKEN_ID};

#[test]
fn test_escrow_accumulates_across_rentals() {
    let env = Env::default();
    let f = setup(&env, 4, TerminationPolicy::Anyone);
    let second = f.funded_party(&env, 100);

    f.lease.rent(&f.tenant, &2, &8);
    advance_to(&env, START_TIME + 2 * SECONDS_PER_HOUR);
    f.lease.terminate(&second);
    f.lease.rent(&second, &3, &12);

    assert_eq!(f.lease.escrow_balance(), 20);
    assert_eq!(f.token.balance(&f.lease.address), 20);
    assert_eq!(f.token.balance(&second), 88);
    assert_eq!(f.lease.rental_count(), 2);
}

#[test]
fn test_owner_withdraws_escrow() {
    let env = Env::default();
    let f = setup(&env, 5, TerminationPolicy::Anyone);

    f.lease.rent(&f.tenant, &2, &10);

    assert_eq!(f.lease.withdraw(&f.owner, &4), 6);
    assert_eq!(f.token.balance(&f.owner), 4);
    assert_eq!(f.lease.escrow_balance(), 6);

    assert_eq!(f.lease.withdraw(&f.owner, &6), 0);
    assert_eq!(f.token.balance(&f.owner), 10);
    assert_eq!(f.token.balance(&f.lease.address), 0);

    // withdrawing does not disturb the running rental
    assert_eq!(f.lease.tenant(), Some(f.tenant.clone()));
}

#[test]
fn test_withdraw_validation() {
    let env = Env::default();
    let f = setup(&env, 5, TerminationPolicy::Anyone);
    let stranger = Address::generate(&env);

    f.lease.rent(&f.tenant, &1, &5);

    assert_eq!(
        f.lease.try_withdraw(&stranger, &1),
        Err(Ok(LeaseError::Unauthorized))
    );
    assert_eq!(
        f.lease.try_withdraw(&f.tenant, &1),
        Err(Ok(LeaseError::Unauthorized))
    );
    assert_eq!(
        f.lease.try_withdraw(&f.owner, &0),
        Err(Ok(LeaseError::InvalidAmount))
    );
    assert_eq!(
        f.lease.try_withdraw(&f.owner, &6),
        Err(Ok(LeaseError::InsufficientEscrow))
    );
    assert_eq!(f.lease.escrow_balance(), 5);
}

#[test]
fn test_transfer_ownership_moves_withdrawal_rights() {
    let env = Env::default();
    let f = setup(&env, 1, TerminationPolicy::Anyone);
    let new_owner = Address::generate(&env);

    f.lease.rent(&f.tenant, &3, &3);

    assert_eq!(
        f.lease.try_transfer_ownership(&new_owner, &new_owner),
        Err(Ok(LeaseError::Unauthorized))
    );

    f.lease.transfer_ownership(&f.owner, &new_owner);
    assert_eq!(f.lease.owner(), new_owner);

    assert_eq!(
        f.lease.try_withdraw(&f.owner, &1),
        Err(Ok(LeaseError::Unauthorized))
    );
    f.lease.withdraw(&new_owner, &3);
    assert_eq!(f.token.balance(&new_owner), 3);
}

#[test]
fn test_lease_info_snapshot() {
    let env = Env::default();
    let f = setup(&env, 2, TerminationPolicy::AfterExpiry);

    f.lease.rent(&f.tenant, &1, &2);
    advance_to(&env, START_TIME + SECONDS_PER_HOUR + 1);

    let info = f.lease.lease_info();
    assert_eq!(info.owner, f.owner);
    assert_eq!(info.terms.asset, f.registry.address);
    assert_eq!(info.terms.token_id, TOKEN_ID);
    assert_eq!(info.terms.price_per_hour, 2);
    assert_eq!(info.terms.termination_policy, TerminationPolicy::AfterExpiry);
    assert_eq!(info.tenant, Some(f.tenant.clone()));
    assert_eq!(info.rental_expiry, START_TIME + SECONDS_PER_HOUR);
    assert_eq!(info.status, LeaseStatus::Expired);
    assert_eq!(info.escrow_balance, 2);
    assert_eq!(info.rental_count, 1);
}

#[test]
fn test_audit_trail_records_lifecycle() {
    let env = Env::default();
    let f = setup(&env, 1, TerminationPolicy::Anyone);
    let whoever = Address::generate(&env);

    f.lease.rent(&f.tenant, &1, &1);
    advance_to(&env, START_TIME + SECONDS_PER_HOUR);
    f.lease.terminate(&whoever);
    f.lease.withdraw(&f.owner, &1);

    let result = f.lease.audit_logs(&0, &u64::MAX, &0);
    assert_eq!(result.total_count, 4);
    assert!(!result.has_more);

    let ops: [OperationType; 4] = [
        OperationType::LeaseInitialized,
        OperationType::Rented,
        OperationType::Terminated,
        OperationType::EscrowWithdrawn,
    ];
    for (i, op) in ops.iter().enumerate() {
        assert_eq!(result.logs.get(i as u32).unwrap().operation_type, *op);
    }

    let rented = f.lease.audit_log(&2).unwrap();
    assert_eq!(rented.operator, f.tenant);
    assert_eq!(rented.tenant, Some(f.tenant.clone()));
    assert_eq!(rented.amount, 1);
    assert_eq!(rented.rental_expiry, START_TIME + SECONDS_PER_HOUR);
    assert_eq!(rented.timestamp, START_TIME);

    let terminated = f.lease.audit_log(&3).unwrap();
    assert_eq!(terminated.operator, whoever);
    assert_eq!(terminated.tenant, Some(f.tenant.clone()));
    assert_eq!(terminated.timestamp, START_TIME + SECONDS_PER_HOUR);

    assert!(f.lease.audit_log(&5).is_none());
}
