use soroban_sdk::{symbol_short, Symbol};

// Event topics
pub const INIT_TOPIC: Symbol = symbol_short!("init");
pub const RENTED_TOPIC: Symbol = symbol_short!("rented");
pub const TERMINATED_TOPIC: Symbol = symbol_short!("ended");
pub const WITHDRAWN_TOPIC: Symbol = symbol_short!("withdrawn");
pub const OWNER_TOPIC: Symbol = symbol_short!("owner_set");
