//! Resolve human-readable NatSpec notices for contract calls.
//!
//! Given a contract address, chain and a text or 4-byte method signature, the
//! resolver fetches the contract's compiler metadata from a metadata repository,
//! finds the matching ABI function and substitutes the call's argument values
//! into the function's `@notice` template.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod resolver;

pub use config::ResolverConfig;
pub use domain::{
    ChainId, FetchOutcome, HexMethodSignature, MetadataDocument, MetadataSource, PaymentRequest,
    ResolutionResult, TextMethodSignature,
};
pub use infrastructure::metadata::MetadataFetcher;
pub use resolver::UserDocResolver;
