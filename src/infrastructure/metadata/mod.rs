//! Metadata repository access

mod fetcher;

pub use fetcher::{FetchError, MetadataFetcher};
