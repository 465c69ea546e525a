//! Argument display values for notice substitution
//!
//! Values either come straight from the caller (text-signature path) or are
//! decoded from raw call-data with alloy-dyn-abi (selector path). Decoding is
//! best-effort: a parameter that cannot be decoded yields `None`, which the
//! notice resolver renders as `null`.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_json_abi::Param;
use alloy_primitives::U256;

use crate::domain::HexMethodSignature;

const WORD: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported type '{0}'")]
    UnknownType(String),
    #[error("call-data truncated: need {needed} bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("dynamic offset {0} points outside call-data")]
    BadOffset(U256),
    #[error("abi decode failed: {0}")]
    Abi(#[from] alloy_dyn_abi::Error),
}

/// Read position over the argument section of call-data
///
/// Each decoded parameter consumes its head slot and advances the cursor.
/// Dynamic values are read from the tail through their head offset, which is
/// relative to the start of the argument section.
#[derive(Debug, Clone)]
pub struct CallDataCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> CallDataCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Take the next `len` bytes, or exhaust the cursor when fewer remain
    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            let err = DecodeError::Truncated {
                offset: self.offset,
                needed: len,
                remaining: self.remaining(),
            };
            self.offset = self.data.len();
            return Err(err);
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Decode the next value of type `ty`
    ///
    /// An unknown type descriptor leaves the cursor where it was.
    pub fn decode_next(&mut self, ty: &str) -> Result<DynSolValue, DecodeError> {
        let sol_type: DynSolType = ty
            .parse()
            .map_err(|_| DecodeError::UnknownType(ty.to_string()))?;

        let width = head_words(&sol_type)
            .and_then(|words| words.checked_mul(WORD))
            .unwrap_or(usize::MAX);
        let head = self.take(width)?;
        if !sol_type.is_dynamic() {
            return Ok(sol_type.abi_decode(head)?);
        }

        let pointer = U256::from_be_slice(head);
        let tail = usize::try_from(pointer)
            .ok()
            .and_then(|start| self.data.get(start..))
            .ok_or(DecodeError::BadOffset(pointer))?;

        // Re-frame as a single-element encoding: offset word 0x20, then the tail
        let mut framed = Vec::with_capacity(WORD + tail.len());
        framed.extend_from_slice(&U256::from(WORD).to_be_bytes::<32>());
        framed.extend_from_slice(tail);
        Ok(sol_type.abi_decode(&framed)?)
    }
}

/// Number of 32-byte head slots a type occupies, `None` on overflow
fn head_words(ty: &DynSolType) -> Option<usize> {
    if ty.is_dynamic() {
        return Some(1);
    }
    match ty {
        DynSolType::FixedArray(inner, len) => head_words(inner)?.checked_mul(*len),
        DynSolType::Tuple(types) => types
            .iter()
            .try_fold(0usize, |total, ty| total.checked_add(head_words(ty)?)),
        _ => Some(1),
    }
}

/// Caller-supplied display values, one slot per input
///
/// Missing values leave the slot empty; surplus values are ignored.
pub fn resolve_from_strings(inputs: &[Param], values: &[String]) -> Vec<Option<String>> {
    if values.len() != inputs.len() {
        tracing::warn!(
            expected = inputs.len(),
            got = values.len(),
            "argument count does not match function inputs"
        );
    }
    (0..inputs.len()).map(|idx| values.get(idx).cloned()).collect()
}

/// Decode display values from call-data that starts with a 4-byte selector
pub fn resolve_from_call_data(inputs: &[Param], data: &[u8]) -> Vec<Option<String>> {
    resolve_from_call_data_with_selector(inputs, data, HexMethodSignature::LENGTH)
}

/// Decode display values after skipping `selector_len` leading bytes
pub fn resolve_from_call_data_with_selector(
    inputs: &[Param],
    data: &[u8],
    selector_len: usize,
) -> Vec<Option<String>> {
    let args = data.get(selector_len..).unwrap_or_default();
    let mut cursor = CallDataCursor::new(args);

    inputs
        .iter()
        .map(|input| {
            let ty = input.selector_type();
            match cursor.decode_next(&ty) {
                Ok(value) => Some(format_value(&value)),
                Err(err) => {
                    tracing::debug!(param = %input.name, ty = %ty, error = %err, "argument left unresolved");
                    None
                }
            }
        })
        .collect()
}

/// Canonical display string for a decoded value
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::FixedBytes(word, size) => {
            let bytes = &word.as_slice()[..(*size).min(32)];
            format!("0x{}", hex::encode(bytes))
        }
        DynSolValue::Address(addr) => addr.to_checksum(None),
        DynSolValue::Function(func) => format!("0x{}", hex::encode(func.as_slice())),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            let items: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        DynSolValue::Tuple(fields) => {
            let items: Vec<String> = fields.iter().map(format_value).collect();
            format!("({})", items.join(", "))
        }
        #[allow(unreachable_patterns)]
        other => format!("{:?}", other),
    }
}
