use soroban_sdk::contracterror;

/// Errors returned by the lease contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LeaseError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Non-positive price or an asset reference the registry does not know
    InvalidConfiguration = 3,
    /// Payment does not equal `hours * price_per_hour`
    InvalidPriceAmount = 4,
    /// A tenant holds the lease, expired or not
    AlreadyRented = 5,
    /// Zero hours, too many hours, or an expiry that overflows
    InvalidDuration = 6,
    /// Termination policy requires the rental to have expired first
    LeaseNotExpired = 7,
    /// Caller is not the lease owner
    Unauthorized = 8,
    /// Withdrawal amount must be positive
    InvalidAmount = 9,
    /// Withdrawal exceeds the escrowed balance
    InsufficientEscrow = 10,
    /// The asset registry refused to grant usage rights
    RegistryRejected = 11,
}
