//! Resolution and fetch outcomes

use std::fmt;

use super::MetadataDocument;

/// Outcome of resolving a userdoc notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// Notice text with every known placeholder substituted
    Resolved(String),
    /// The metadata repository has no entry for the contract
    ContractNotFound,
    /// Metadata exists but no function/notice matched the signature
    NoMatchingDocFound,
    /// Unexpected HTTP status, network failure, or an unusable request
    TransportError(String),
}

impl ResolutionResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionResult::Resolved(_))
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            ResolutionResult::Resolved(notice) => Some(notice),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionResult::Resolved(notice) => f.write_str(notice),
            ResolutionResult::ContractNotFound => f.write_str("contract not found"),
            ResolutionResult::NoMatchingDocFound => f.write_str("no matching userdoc found"),
            ResolutionResult::TransportError(message) => f.write_str(message),
        }
    }
}

/// Outcome of a single metadata fetch
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Found(MetadataDocument),
    NotFound,
    /// Body was retrieved but could not be parsed into a document
    Malformed(String),
    TransportError(String),
}
