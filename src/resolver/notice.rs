//! Notice template lookup and placeholder substitution

use alloy_json_abi::{Function, Param};

use crate::domain::{MetadataDocument, ResolutionResult};

const NULL_VALUE: &str = "null";

/// Resolve the notice for `function` under `normalized_signature`
///
/// `values` holds one display value per input; empty slots render as `null`.
pub fn resolve_notice(
    document: &MetadataDocument,
    function: &Function,
    normalized_signature: &str,
    values: &[Option<String>],
) -> ResolutionResult {
    match document.notice_for(normalized_signature) {
        Some(template) => ResolutionResult::Resolved(substitute(template, &function.inputs, values)),
        None => {
            tracing::debug!(signature = normalized_signature, "no userdoc notice for signature");
            ResolutionResult::NoMatchingDocFound
        }
    }
}

/// Replace each backtick-quoted input name with its value
///
/// The template is scanned once, so text inserted for one placeholder is never
/// matched again by a later one. When names repeat, the first declared input wins.
pub fn substitute(template: &str, inputs: &[Param], values: &[Option<String>]) -> String {
    let placeholders: Vec<(&str, &str)> = inputs
        .iter()
        .enumerate()
        .filter(|(_, input)| !input.name.is_empty())
        .map(|(idx, input)| {
            let value = values
                .get(idx)
                .and_then(|value| value.as_deref())
                .unwrap_or(NULL_VALUE);
            (input.name.as_str(), value)
        })
        .collect();

    let lookup = |token: &str| {
        placeholders
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| *value)
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('`') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        if let Some(close) = after.find('`') {
            if let Some(value) = lookup(&after[..close]) {
                out.push_str(value);
                rest = &after[close + 1..];
                continue;
            }
        }
        out.push('`');
        rest = after;
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(names: &[&str]) -> Vec<Param> {
        let json: Vec<String> = names
            .iter()
            .map(|name| format!(r#"{{"name":"{}","type":"uint256"}}"#, name))
            .collect();
        serde_json::from_str(&format!("[{}]", json.join(","))).unwrap()
    }

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_substitute_transfer() {
        let result = substitute(
            "Transfers `amount` tokens to `to`",
            &inputs(&["amount", "to"]),
            &some(&["100", "0xabc"]),
        );
        assert_eq!(result, "Transfers 100 tokens to 0xabc");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let result = substitute("`a` then `a` and `b`", &inputs(&["a", "b"]), &some(&["1", "2"]));
        assert_eq!(result, "1 then 1 and 2");
    }

    #[test]
    fn test_missing_value_renders_null() {
        let result = substitute(
            "Send `amount` to `to`",
            &inputs(&["amount", "to"]),
            &[Some("5".to_string()), None],
        );
        assert_eq!(result, "Send 5 to null");

        let result = substitute("Send `amount` to `to`", &inputs(&["amount", "to"]), &[]);
        assert_eq!(result, "Send null to null");
    }

    #[test]
    fn test_no_cascading_replacement() {
        // The value for `a` contains the placeholder for `b`
        let result = substitute("`a` / `b`", &inputs(&["a", "b"]), &some(&["`b`", "2"]));
        assert_eq!(result, "`b` / 2");
    }

    #[test]
    fn test_unknown_and_unbalanced_backticks() {
        let result = substitute("keep `other` and `x`` and `", &inputs(&["x"]), &some(&["9"]));
        assert_eq!(result, "keep `other` and 9` and `");
    }

    #[test]
    fn test_unnamed_inputs_are_ignored() {
        let result = substitute("literal `` stays", &inputs(&[""]), &some(&["1"]));
        assert_eq!(result, "literal `` stays");
    }

    #[test]
    fn test_substitution_is_repeatable() {
        let params = inputs(&["amount"]);
        let values = some(&["7"]);
        let once = substitute("Burn `amount`", &params, &values);
        let twice = substitute("Burn `amount`", &params, &values);
        assert_eq!(once, twice);
    }
}
