//! Result type aliases for Prompt Relay.

use crate::RelayError;

/// A specialized `Result` type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
