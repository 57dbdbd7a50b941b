/// Audit trail for lease operations.
///
/// Every accepted rental, termination, withdrawal and ownership change is
/// appended under an auto-incrementing id in persistent storage. Entries are
/// never modified or deleted, and can be paged through by id range.
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{
    AUDIT_TTL_EXTEND, AUDIT_TTL_THRESHOLD, DEFAULT_AUDIT_QUERY_LIMIT, MAX_AUDIT_QUERY_LIMIT,
};

// ============================================================================
// AUDIT LOG TYPES
// ============================================================================

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperationType {
    LeaseInitialized = 1,
    Rented = 2,
    Terminated = 3,
    EscrowWithdrawn = 4,
    OwnershipTransferred = 5,
}

/// Immutable audit log entry
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AuditLog {
    pub id: u64,
    /// Ledger timestamp at time of operation
    pub timestamp: u64,
    /// Address that triggered the operation
    pub operator: Address,
    pub operation_type: OperationType,
    /// Tenant affected by the operation, if any
    pub tenant: Option<Address>,
    /// Rent paid or escrow withdrawn; 0 when no funds moved
    pub amount: i128,
    /// Rental expiry set or ended by the operation; 0 when none
    pub rental_expiry: u64,
}

/// Result of a paginated audit log query
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuditLogQueryResult {
    pub logs: Vec<AuditLog>,
    pub total_count: u64,
    pub start_id: u64,
    pub end_id: u64,
    pub has_more: bool,
}

// ============================================================================
// STORAGE
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum AuditStorageKey {
    /// Counter for auto-incrementing audit log IDs
    LogIdCounter,
    /// Individual audit log entry (indexed by id)
    LogEntry(u64),
}

pub fn get_log_id_counter(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get::<_, u64>(&AuditStorageKey::LogIdCounter)
        .unwrap_or(0)
}

fn increment_log_id_counter(env: &Env) -> u64 {
    let key = AuditStorageKey::LogIdCounter;
    let next = get_log_id_counter(env).saturating_add(1);
    env.storage().persistent().set(&key, &next);
    env.storage()
        .persistent()
        .extend_ttl(&key, AUDIT_TTL_THRESHOLD, AUDIT_TTL_EXTEND);
    next
}

fn store_audit_log(env: &Env, log: &AuditLog) {
    let key = AuditStorageKey::LogEntry(log.id);
    env.storage().persistent().set(&key, log);
    env.storage()
        .persistent()
        .extend_ttl(&key, AUDIT_TTL_THRESHOLD, AUDIT_TTL_EXTEND);
}

pub fn get_audit_log(env: &Env, log_id: u64) -> Option<AuditLog> {
    env.storage()
        .persistent()
        .get(&AuditStorageKey::LogEntry(log_id))
}

// ============================================================================
// CREATION
// ============================================================================

/// Append a new entry stamped with the current ledger timestamp and return
/// its id.
pub fn create_audit_log(
    env: &Env,
    operator: Address,
    operation_type: OperationType,
    tenant: Option<Address>,
    amount: i128,
    rental_expiry: u64,
) -> u64 {
    let id = increment_log_id_counter(env);
    let log = AuditLog {
        id,
        timestamp: env.ledger().timestamp(),
        operator,
        operation_type,
        tenant,
        amount,
        rental_expiry,
    };
    store_audit_log(env, &log);
    id
}

// ============================================================================
// QUERYING
// ============================================================================

/// Query audit logs with pagination
///
/// Returns logs inclusive of `start_id` and `end_id`. A `start_id` of 0 means
/// the first entry, an `end_id` past the latest entry is clamped, and
/// `max_results` of 0 falls back to the default page size. Pages never exceed
/// `MAX_AUDIT_QUERY_LIMIT`.
pub fn query_audit_logs(
    env: &Env,
    start_id: u64,
    end_id: u64,
    max_results: u32,
) -> AuditLogQueryResult {
    let total_count = get_log_id_counter(env);

    let actual_start = if start_id == 0 { 1 } else { start_id };
    let actual_end = end_id.min(total_count);
    let limit = match max_results {
        0 => DEFAULT_AUDIT_QUERY_LIMIT,
        n => n.min(MAX_AUDIT_QUERY_LIMIT),
    };

    let mut logs: Vec<AuditLog> = Vec::new(env);

    if actual_start > actual_end {
        return AuditLogQueryResult {
            logs,
            total_count,
            start_id: actual_start,
            end_id: actual_end,
            has_more: false,
        };
    }

    let mut count = 0u32;
    let mut current_id = actual_start;

    while current_id <= actual_end && count < limit {
        if let Some(log) = get_audit_log(env, current_id) {
            logs.push_back(log);
            count += 1;
        }
        current_id += 1;
    }

    // Stopped on the limit rather than the end of the range
    let has_more = count == limit && current_id <= actual_end;

    AuditLogQueryResult {
        logs,
        total_count,
        start_id: actual_start,
        end_id: if has_more { current_id - 1 } else { actual_end },
        has_more,
    }
}
