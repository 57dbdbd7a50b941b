#![cfg(test)]

extern crate std;

use proptest::prelude::*;
use rental_lib::{LeaseError, TerminationPolicy, SECONDS_PER_HOUR};
use soroban_sdk::Env;

use crate::testutils::{setup, START_TIME, TENANT_FUNDS, TOKEN_ID};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_mismatched_payment_is_rejected(
        price in 1..1_000i128,
        hours in 1..48u64,
        delta in prop_oneof![-1_000..0i128, 1..1_000i128],
    ) {
        let env = Env::default();
        let f = setup(&env, price, TerminationPolicy::Anyone);
        let payment = hours as i128 * price + delta;

        // INVARIANT: anything but the exact price fails and changes nothing
        prop_assert_eq!(
            f.lease.try_rent(&f.tenant, &hours, &payment),
            Err(Ok(LeaseError::InvalidPriceAmount))
        );
        prop_assert_eq!(f.lease.tenant(), None);
        prop_assert_eq!(f.lease.duration(), 0);
        prop_assert_eq!(f.registry.get_approved(&TOKEN_ID), None);
        prop_assert_eq!(f.token.balance(&f.tenant), TENANT_FUNDS);
    }

    #[test]
    fn prop_exact_payment_sets_expiry(price in 1..1_000i128, hours in 1..48u64) {
        let env = Env::default();
        let f = setup(&env, price, TerminationPolicy::Anyone);

        let expiry = f.lease.rent(&f.tenant, &hours, &(hours as i128 * price));

        // INVARIANT: expiry is the acceptance time plus whole hours
        prop_assert_eq!(expiry, START_TIME + hours * SECONDS_PER_HOUR);
        prop_assert_eq!(f.lease.duration(), expiry);
        prop_assert_eq!(f.lease.escrow_balance(), hours as i128 * price);
        prop_assert_eq!(f.lease.tenant(), Some(f.tenant.clone()));
    }
}
