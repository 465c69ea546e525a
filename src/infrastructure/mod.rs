//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - reqwest-based metadata repository fetcher
//! - ABI function matching and call-data decoding using alloy-dyn-abi

pub mod abi;
pub mod metadata;
