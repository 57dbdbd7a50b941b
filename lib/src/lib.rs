#![no_std]
pub mod audit;
pub mod errors;
pub mod registry;
pub mod storage_keys;
pub mod types;
pub mod validation;


pub use errors::LeaseError;
pub use registry::{AssetRegistryClient, AssetRegistryInterface};
pub use storage_keys::*;
pub use types::*;

// Time
pub const SECONDS_PER_HOUR: u64 = 3600;

// Pricing
pub const PRICE_UPPER_BOUND: i128 = i128::MAX / 2; // Prevent overflow in calculations

// Audit queries
pub const MAX_AUDIT_QUERY_LIMIT: u32 = 500;
pub const DEFAULT_AUDIT_QUERY_LIMIT: u32 = 100;

// Instance storage TTL, in ledgers (~5s each).
pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const INSTANCE_TTL_EXTEND: u32 = 1_036_800; // ~60 days
pub const AUDIT_TTL_THRESHOLD: u32 = 518_400;
pub const AUDIT_TTL_EXTEND: u32 = 1_036_800;
