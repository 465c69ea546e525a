//! Metadata source trait

use alloy_primitives::Address;
use async_trait::async_trait;

use super::{ChainId, FetchOutcome};

/// Source of contract metadata documents
///
/// This trait abstracts over how metadata is retrieved, so the resolver can be
/// driven by the HTTP repository fetcher or by an in-memory fixture.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch the metadata document for `address` on `chain`
    ///
    /// Each call performs a fresh lookup; implementations do not cache.
    async fn fetch(&self, chain: ChainId, address: Address) -> FetchOutcome;
}
