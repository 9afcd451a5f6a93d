//! Resolution error taxonomy

use thiserror::Error;

/// Errors raised while deriving nodes or querying a namespace
///
/// Per-namespace errors never escape [`crate::dispatch::NameResolver::get_names`];
/// they are captured as [`crate::types::ResolutionOutcome::Failed`] and
/// reported as "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Malformed input (address or chain identifier)
    #[error("derivation error: {0}")]
    Derivation(String),

    /// Transport-level failure (connection, timeout, malformed RPC response)
    #[error("network error: {0}")]
    Network(String),

    /// The contract call reverted or returned an unexpected shape
    #[error("contract call error: {0}")]
    ContractCall(String),

    /// A transport bound to the wrong chain was supplied for a namespace
    #[error("transport is bound to chain {got}, expected chain {expected}")]
    ChainMismatch { expected: u64, got: u64 },

    /// Namespace key outside the supported set
    #[error("unsupported namespace: {0}")]
    UnsupportedNamespace(String),

    /// Transport could not be built from configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_mismatch_message() {
        let err = ResolveError::ChainMismatch {
            expected: 8453,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "transport is bound to chain 1, expected chain 8453"
        );
    }

    #[test]
    fn test_unsupported_namespace_message() {
        let err = ResolveError::UnsupportedNamespace("lens".to_string());
        assert!(err.to_string().contains("lens"));
    }
}
