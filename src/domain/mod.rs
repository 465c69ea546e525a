//! Domain models and contracts
//!
//! Types for signatures, metadata documents and resolution outcomes, independent
//! of the HTTP client and ABI decoding implementation.

mod metadata;
mod payment;
mod result;
mod signature;
mod source;

pub use metadata::{DocumentError, MetadataDocument, MetadataOutput, MethodDoc, UserDoc};
pub use payment::PaymentRequest;
pub use result::{FetchOutcome, ResolutionResult};
pub use signature::{ChainId, HexMethodSignature, SignatureError, TextMethodSignature};
pub use source::MetadataSource;
