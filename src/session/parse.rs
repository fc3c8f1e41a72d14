// Session ID parsing

use super::SESSION_ID_PREFIX;

/// Components of an issued session ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSessionId<'a> {
    /// Counter value used when the ID was issued
    pub counter: u64,

    /// Account name, verbatim
    pub account_name: &'a str,
}

/// Splits a session ID into its components
///
/// The account name is everything after the separator
/// that follows the counter, so it may contain '_' or be empty.
///
/// # Arguments
///
/// * `session_id` - The session ID
///
/// # Return value
///
/// Returns the components, or None if the string
/// is not a session ID issued by CounterSessionIdGenerator
pub fn parse_session_id(session_id: &str) -> Option<ParsedSessionId<'_>> {
    let rest = session_id.strip_prefix(SESSION_ID_PREFIX)?;
    let (counter_str, account_name) = rest.split_once('_')?;

    if counter_str.is_empty() || !counter_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Counters are never zero-padded
    if counter_str.len() > 1 && counter_str.starts_with('0') {
        return None;
    }

    let counter: u64 = counter_str.parse().ok()?;

    Some(ParsedSessionId {
        counter,
        account_name,
    })
}

// Tests
