//! Termination policy: who may end an occupied lease before it expires.

#![cfg(test)]

use rental_lib::{LeaseError, LeaseStatus, TerminationPolicy, SECONDS_PER_HOUR};
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::testutils::{advance_to, setup, START_TIME, TOKEN_ID};

#[test]
fn test_anyone_may_terminate_early() {
    let env = Env::default();
    let f = setup(&env, 1, TerminationPolicy::Anyone);
    let stranger = Address::generate(&env);

    f.lease.rent(&f.tenant, &2, &2);
    advance_to(&env, START_TIME + 60);

    f.lease.terminate(&stranger);

    assert_eq!(f.lease.tenant(), None);
    assert_eq!(f.registry.get_approved(&TOKEN_ID), None);
}

#[test]
fn test_after_expiry_blocks_early_termination() {
    let env = Env::default();
    let f = setup(&env, 1, TerminationPolicy::AfterExpiry);
    let stranger = Address::generate(&env);

    f.lease.rent(&f.tenant, &1, &1);
    advance_to(&env, START_TIME + SECONDS_PER_HOUR - 1);

    assert_eq!(
        f.lease.try_terminate(&stranger),
        Err(Ok(LeaseError::LeaseNotExpired))
    );
    // not even the tenant or owner may cut it short
    assert_eq!(
        f.lease.try_terminate(&f.tenant),
        Err(Ok(LeaseError::LeaseNotExpired))
    );
    assert_eq!(
        f.lease.try_terminate(&f.owner),
        Err(Ok(LeaseError::LeaseNotExpired))
    );

    assert_eq!(f.lease.tenant(), Some(f.tenant.clone()));
    assert_eq!(f.registry.get_approved(&TOKEN_ID), Some(f.tenant.clone()));
    assert_eq!(f.lease.status(), LeaseStatus::Occupied);
}

#[test]
fn test_after_expiry_allows_termination_at_expiry() {
    let env = Env::default();
    let f = setup(&env, 1, TerminationPolicy::AfterExpiry);
    let stranger = Address::generate(&env);

    let expiry = f.lease.rent(&f.tenant, &1, &1);
    advance_to(&env, expiry);

    f.lease.terminate(&stranger);

    assert_eq!(f.lease.tenant(), None);
    assert_eq!(f.lease.duration(), 0);
    assert_eq!(f.registry.get_approved(&TOKEN_ID), None);
}

#[test]
fn test_after_expiry_vacant_terminate_is_noop() {
    let env = Env::default();
    let f = setup(&env, 1, TerminationPolicy::AfterExpiry);

    f.lease.terminate(&f.owner);

    assert_eq!(f.lease.tenant(), None);
    assert_eq!(f.lease.status(), LeaseStatus::Vacant);
}
