//! Chain ids and method signatures (text and 4-byte selector forms)

use std::fmt;
use std::str::FromStr;

use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a target network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid selector '{0}' (expected 8 hex chars)")]
    InvalidSelector(String),
}

/// Text form of a method signature, e.g. `transfer(address,uint256)`
///
/// The raw text is kept as supplied; [`TextMethodSignature::normalized_signature`]
/// yields the canonical key used by the userdoc method mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextMethodSignature {
    raw: String,
}

impl TextMethodSignature {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            raw: signature.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Canonical `name(type1,type2,...)` form
    pub fn normalized_signature(&self) -> String {
        normalize_signature(&self.raw)
    }

    /// Keccak-256 selector of the normalized signature
    pub fn to_hex_signature(&self) -> HexMethodSignature {
        let hash = keccak256(self.normalized_signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[..4]);
        HexMethodSignature(selector)
    }
}

impl From<&str> for TextMethodSignature {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TextMethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// 4-byte function selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexMethodSignature(pub [u8; 4]);

impl HexMethodSignature {
    pub const LENGTH: usize = 4;

    pub fn bytes(&self) -> [u8; 4] {
        self.0
    }

    /// Selector taken from the first four bytes of call-data
    pub fn from_call_data(data: &[u8]) -> Option<Self> {
        let selector: [u8; 4] = data.get(..Self::LENGTH)?.try_into().ok()?;
        Some(Self(selector))
    }
}

impl From<[u8; 4]> for HexMethodSignature {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl FromStr for HexMethodSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let payload = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if payload.len() != 8 {
            return Err(SignatureError::InvalidSelector(s.to_string()));
        }

        let bytes = hex::decode(payload).map_err(|_| SignatureError::InvalidSelector(s.to_string()))?;
        let selector: [u8; 4] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidSelector(s.to_string()))?;
        Ok(Self(selector))
    }
}

impl fmt::Display for HexMethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

const IGNORED_KEYWORDS: &[&str] = &["memory", "calldata", "storage", "indexed", "payable"];

fn normalize_signature(sig: &str) -> String {
    let sig = sig.trim();
    let Some(open) = sig.find('(') else {
        return sig.split_whitespace().collect();
    };

    let name: String = sig[..open].split_whitespace().collect();
    let rest = &sig[open..];
    // Anything after the closing paren (returns clause, modifiers) is dropped
    let inner = match matching_paren(rest) {
        Some(close) => &rest[1..close],
        None => &rest[1..],
    };

    format!("{}({})", name, normalize_params(inner))
}

fn normalize_params(inner: &str) -> String {
    split_top_level(inner)
        .into_iter()
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(normalize_param)
        .collect::<Vec<_>>()
        .join(",")
}

fn normalize_param(param: &str) -> String {
    let param = param.trim();
    let param = match param.strip_prefix("tuple") {
        Some(stripped) if stripped.trim_start().starts_with('(') => stripped.trim_start(),
        _ => param,
    };

    if param.starts_with('(') {
        let close = matching_paren(param).unwrap_or(param.len());
        let components = normalize_params(&param[1..close]);
        let suffix = array_suffix(param.get(close + 1..).unwrap_or(""));
        return format!("({}){}", components, suffix);
    }

    let ty = param
        .split_whitespace()
        .find(|token| !IGNORED_KEYWORDS.contains(token))
        .unwrap_or("");
    canonical_type(ty)
}

/// Leading `[..]` groups of the text following a tuple
fn array_suffix(rest: &str) -> String {
    let compact: String = rest.split_whitespace().collect();
    let end = compact
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '[' || *c == ']'))
        .map(|(idx, _)| idx)
        .unwrap_or(compact.len());
    compact[..end].to_string()
}

fn canonical_type(ty: &str) -> String {
    let (base, suffix) = match ty.find('[') {
        Some(idx) => ty.split_at(idx),
        None => (ty, ""),
    };
    let base = match base {
        "uint" => "uint256",
        "int" => "int256",
        "byte" => "bytes1",
        "fixed" => "fixed128x18",
        "ufixed" => "ufixed128x18",
        other => other,
    };
    format!("{}{}", base, suffix)
}

fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_signature() {
        let sig = TextMethodSignature::new("transfer(address to, uint amount)");
        assert_eq!(sig.normalized_signature(), "transfer(address,uint256)");

        let sig = TextMethodSignature::new("balanceOf(address) returns (uint256)");
        assert_eq!(sig.normalized_signature(), "balanceOf(address)");

        let sig = TextMethodSignature::new("  deposit ( ) ");
        assert_eq!(sig.normalized_signature(), "deposit()");
    }

    #[test]
    fn test_normalize_arrays_and_tuples() {
        let sig = TextMethodSignature::new("batch(uint[] ids, (address, int)[2] pairs, string memory note)");
        assert_eq!(sig.normalized_signature(), "batch(uint256[],(address,int256)[2],string)");

        let sig = TextMethodSignature::new("submit(tuple(uint a, bytes b) order)");
        assert_eq!(sig.normalized_signature(), "submit((uint256,bytes))");
    }

    #[test]
    fn test_normalized_is_case_sensitive() {
        let sig = TextMethodSignature::new("Transfer(address,uint256)");
        assert_eq!(sig.normalized_signature(), "Transfer(address,uint256)");
    }

    #[test]
    fn test_text_to_hex_signature() {
        let sig = TextMethodSignature::new("transfer(address,uint256)");
        assert_eq!(sig.to_hex_signature().to_string(), "0xa9059cbb");

        let aliased = TextMethodSignature::new("transfer(address, uint)");
        assert_eq!(aliased.to_hex_signature(), sig.to_hex_signature());
    }

    #[test]
    fn test_hex_signature_parse() {
        let sel: HexMethodSignature = "0xa9059cbb".parse().unwrap();
        assert_eq!(sel.bytes(), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!("A9059CBB".parse::<HexMethodSignature>().unwrap(), sel);
        assert!("0xa9059c".parse::<HexMethodSignature>().is_err());
        assert!("0xzz059cbb".parse::<HexMethodSignature>().is_err());
    }

    #[test]
    fn test_hex_signature_from_call_data() {
        let data = [0xd0, 0xe3, 0x0d, 0xb0, 0x01];
        let sel = HexMethodSignature::from_call_data(&data).unwrap();
        assert_eq!(sel.to_string(), "0xd0e30db0");
        assert!(HexMethodSignature::from_call_data(&[0x01, 0x02]).is_none());
    }
}
