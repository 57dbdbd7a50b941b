use crate::{errors::LeaseError, PRICE_UPPER_BOUND, SECONDS_PER_HOUR};

pub fn validate_price_per_hour(price_per_hour: i128) -> Result<(), LeaseError> {
    if price_per_hour <= 0 || price_per_hour > PRICE_UPPER_BOUND {
        return Err(LeaseError::InvalidConfiguration);
    }
    Ok(())
}

/// A zero-hour rental would expire the moment it is accepted.
pub fn validate_hours(hours: u64) -> Result<(), LeaseError> {
    if hours == 0 {
        return Err(LeaseError::InvalidDuration);
    }
    Ok(())
}

/// Total rent owed for `hours`. An overflowing product can never be matched
/// by a payment, so it reports as a price mismatch.
pub fn rent_cost(hours: u64, price_per_hour: i128) -> Result<i128, LeaseError> {
    (hours as i128)
        .checked_mul(price_per_hour)
        .ok_or(LeaseError::InvalidPriceAmount)
}

pub fn validate_payment(hours: u64, price_per_hour: i128, payment: i128) -> Result<(), LeaseError> {
    if payment != rent_cost(hours, price_per_hour)? {
        return Err(LeaseError::InvalidPriceAmount);
    }
    Ok(())
}

pub fn rental_expiry(now: u64, hours: u64) -> Result<u64, LeaseError> {
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|seconds| now.checked_add(seconds))
        .ok_or(LeaseError::InvalidDuration)
}

pub fn validate_withdrawal(amount: i128, escrow_balance: i128) -> Result<(), LeaseError> {
    if amount <= 0 {
        return Err(LeaseError::InvalidAmount);
    }
    if amount > escrow_balance {
        return Err(LeaseError::InsufficientEscrow);
    }
    Ok(())
}
