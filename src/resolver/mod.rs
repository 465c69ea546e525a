//! Userdoc resolution pipeline
//!
//! Each entry point fetches the contract's metadata, matches the function,
//! resolves argument display values and substitutes them into the notice.
//! Steps run strictly in sequence; nothing is cached between calls.

mod notice;

use alloy::rpc::types::TransactionRequest;
use alloy_primitives::Address;

use crate::config::ResolverConfig;
use crate::domain::{
    ChainId, FetchOutcome, HexMethodSignature, MetadataDocument, MetadataSource, PaymentRequest,
    ResolutionResult, TextMethodSignature,
};
use crate::infrastructure::abi;
use crate::infrastructure::metadata::{FetchError, MetadataFetcher};

pub use notice::{resolve_notice, substitute};

/// Resolves userdoc notices against a metadata source
#[derive(Debug, Clone)]
pub struct UserDocResolver<S = MetadataFetcher> {
    source: S,
}

impl UserDocResolver<MetadataFetcher> {
    /// Resolver backed by the default metadata repository
    pub fn new() -> Self {
        Self::with_source(MetadataFetcher::new())
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, FetchError> {
        Ok(Self::with_source(MetadataFetcher::from_config(config)?))
    }
}

impl Default for UserDocResolver<MetadataFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MetadataSource> UserDocResolver<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve from a text signature and caller-rendered argument values
    pub async fn resolve_text_signature(
        &self,
        signature: &TextMethodSignature,
        address: Address,
        chain: ChainId,
        values: &[String],
    ) -> ResolutionResult {
        let document = match self.load(chain, address).await {
            Ok(document) => document,
            Err(result) => return result,
        };

        let Some(function) = abi::find_by_text_signature(document.functions(), signature) else {
            return ResolutionResult::NoMatchingDocFound;
        };
        let values = abi::resolve_from_strings(&function.inputs, values);
        resolve_notice(&document, function, &signature.normalized_signature(), &values)
    }

    /// Resolve from a selector and raw call-data (selector included)
    pub async fn resolve_hex_signature(
        &self,
        selector: &HexMethodSignature,
        address: Address,
        chain: ChainId,
        data: &[u8],
    ) -> ResolutionResult {
        let document = match self.load(chain, address).await {
            Ok(document) => document,
            Err(result) => return result,
        };

        let Some(function) = abi::find_by_hex_signature(document.functions(), selector) else {
            return ResolutionResult::NoMatchingDocFound;
        };
        let values = abi::resolve_from_call_data(&function.inputs, data);
        resolve_notice(&document, function, &function.signature(), &values)
    }

    /// Resolve the call made by a transaction (`to`, `chain_id` and `input`)
    pub async fn resolve_transaction(&self, tx: &TransactionRequest) -> ResolutionResult {
        let Some(address) = tx.to.as_ref().and_then(|kind| kind.to().copied()) else {
            return ResolutionResult::TransportError(
                "transaction must have a destination address to resolve the userdoc".to_string(),
            );
        };
        let Some(chain) = tx.chain_id else {
            return ResolutionResult::TransportError(
                "transaction must have a chain id to resolve the userdoc".to_string(),
            );
        };
        let input: &[u8] = tx.input.input().map(|bytes| &bytes[..]).unwrap_or_default();
        let Some(selector) = HexMethodSignature::from_call_data(input) else {
            return ResolutionResult::TransportError(
                "transaction input is shorter than a function selector".to_string(),
            );
        };

        self.resolve_hex_signature(&selector, address, ChainId(chain), input)
            .await
    }

    /// Resolve a payment request; the request must carry a target address
    pub async fn resolve_payment_request(
        &self,
        request: &PaymentRequest,
        chain: ChainId,
    ) -> ResolutionResult {
        let Some(raw_address) = request.address.as_deref().map(str::trim).filter(|a| !a.is_empty())
        else {
            return ResolutionResult::TransportError(
                "payment request must have an address to resolve the userdoc".to_string(),
            );
        };
        let address: Address = match raw_address.parse() {
            Ok(address) => address,
            Err(err) => {
                return ResolutionResult::TransportError(format!(
                    "invalid payment request address '{}': {}",
                    raw_address, err
                ))
            }
        };

        self.resolve_text_signature(&request.text_signature(), address, chain, &request.param_values())
            .await
    }

    async fn load(&self, chain: ChainId, address: Address) -> Result<MetadataDocument, ResolutionResult> {
        match self.source.fetch(chain, address).await {
            FetchOutcome::Found(document) => Ok(document),
            FetchOutcome::NotFound => Err(ResolutionResult::ContractNotFound),
            FetchOutcome::Malformed(_) => Err(ResolutionResult::NoMatchingDocFound),
            FetchOutcome::TransportError(message) => Err(ResolutionResult::TransportError(message)),
        }
    }
}
