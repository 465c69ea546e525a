//! Match a method signature against ABI functions

use alloy_json_abi::Function;

use crate::domain::{HexMethodSignature, TextMethodSignature};

/// Find the function whose canonical signature equals the normalized target
///
/// Comparison is exact and case-sensitive. First match in ABI order wins.
pub fn find_by_text_signature<'a, I>(functions: I, target: &TextMethodSignature) -> Option<&'a Function>
where
    I: IntoIterator<Item = &'a Function>,
{
    let normalized = target.normalized_signature();
    let found = functions
        .into_iter()
        .find(|function| function.signature() == normalized);

    if found.is_none() {
        tracing::debug!(signature = %normalized, "no ABI function matches text signature");
    }
    found
}

/// Find the function whose selector equals the target bytes
///
/// Different signatures can share a selector; the first declared function wins,
/// the same way a contract dispatcher resolves it.
pub fn find_by_hex_signature<'a, I>(functions: I, target: &HexMethodSignature) -> Option<&'a Function>
where
    I: IntoIterator<Item = &'a Function>,
{
    let found = functions
        .into_iter()
        .find(|function| function.selector().0 == target.bytes());

    if found.is_none() {
        tracing::debug!(selector = %target, "no ABI function matches selector");
    }
    found
}
