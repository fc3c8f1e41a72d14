// Logic to generate unique session IDs

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of every issued session ID
pub const SESSION_ID_PREFIX: &str = "sessionId_";

/// Session ID generator contract
///
/// Implementations must be safe to share between
/// concurrent callers (Arc<dyn SessionIdGenerator>)
pub trait SessionIdGenerator: Send + Sync {
    /// Generates a session ID for an account
    ///
    /// # Arguments
    ///
    /// * `account_name` - Name of the account the session is for
    ///
    /// # Return value
    ///
    /// Returns the session ID, as an opaque string
    fn generate_session_id(&self, account_name: &str) -> String;
}

/// Session ID generator backed by an in-memory counter
///
/// IDs are unique only for the lifetime of the instance.
/// The counter is not persisted, so a new instance
/// will issue the same IDs again.
#[derive(Debug, Default)]
pub struct CounterSessionIdGenerator {
    // Next counter value
    next_id: AtomicU64,
}

impl CounterSessionIdGenerator {
    /// Creates new CounterSessionIdGenerator
    pub fn new() -> CounterSessionIdGenerator {
        CounterSessionIdGenerator {
            next_id: AtomicU64::new(0),
        }
    }

    /// Generates a new unique session ID
    ///
    /// # Arguments
    ///
    /// * `account_name` - Name of the account. Not validated, can be empty.
    ///
    /// # Return value
    ///
    /// Returns a string like `sessionId_{counter}_{account_name}`
    pub fn generate(&self, account_name: &str) -> String {
        // fetch_add wraps on overflow
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        format!("{}{}_{}", SESSION_ID_PREFIX, id, account_name)
    }

    /// Gets the number of session IDs issued so far
    pub fn issued_count(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }
}

impl SessionIdGenerator for CounterSessionIdGenerator {
    fn generate_session_id(&self, account_name: &str) -> String {
        self.generate(account_name)
    }
}

// Tests
