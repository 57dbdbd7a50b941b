use soroban_sdk::{contracttype, Address};

/// Who may end an occupied lease, and when.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
#[repr(u32)]
pub enum TerminationPolicy {
    /// Any party may terminate at any time.
    Anyone = 0,
    /// Any party may terminate, but only once the rental has expired.
    AfterExpiry = 1,
}

/// Observed state of the lease at a given ledger timestamp.
///
/// `Expired` is derived for reads only; stored state stays occupied until
/// someone calls `terminate`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
#[repr(u32)]
pub enum LeaseStatus {
    Vacant = 0,
    Occupied = 1,
    Expired = 2,
}

/// Immutable terms fixed at initialization.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct LeaseTerms {
    /// Registry contract holding the asset.
    pub asset: Address,
    /// Unit within the registry.
    pub token_id: u64,
    pub price_per_hour: i128,
    /// Token contract rent is paid in.
    pub payment_token: Address,
    pub termination_policy: TerminationPolicy,
}

/// Mutable occupancy record. `tenant` is `None` iff `rental_expiry == 0`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Occupancy {
    pub tenant: Option<Address>,
    /// Absolute ledger timestamp the rental ends at, or 0 when vacant.
    pub rental_expiry: u64,
}

impl Occupancy {
    pub fn vacant() -> Self {
        Occupancy {
            tenant: None,
            rental_expiry: 0,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.tenant.is_none()
    }

    pub fn status_at(&self, now: u64) -> LeaseStatus {
        match self.tenant {
            None => LeaseStatus::Vacant,
            Some(_) if now >= self.rental_expiry => LeaseStatus::Expired,
            Some(_) => LeaseStatus::Occupied,
        }
    }
}

/// Read-only snapshot returned by `lease_info`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct LeaseInfo {
    pub owner: Address,
    pub terms: LeaseTerms,
    pub tenant: Option<Address>,
    pub rental_expiry: u64,
    pub status: LeaseStatus,
    pub escrow_balance: i128,
    pub rental_count: u64,
}
