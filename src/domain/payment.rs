//! Payment-request style call descriptor (ERC-681 shape)

use serde::{Deserialize, Serialize};

use super::TextMethodSignature;

/// A function call described by name and typed string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Target contract address; required for userdoc resolution
    pub address: Option<String>,
    /// Function name, e.g. `transfer`
    pub function: Option<String>,
    /// Ordered `(type, value)` pairs
    #[serde(default)]
    pub function_params: Vec<(String, String)>,
}

impl PaymentRequest {
    pub fn new(address: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            function: Some(function.into()),
            function_params: Vec::new(),
        }
    }

    pub fn with_param(mut self, ty: impl Into<String>, value: impl Into<String>) -> Self {
        self.function_params.push((ty.into(), value.into()));
        self
    }

    /// `function(type1,type2,...)` built from the parameter types
    pub fn text_signature(&self) -> TextMethodSignature {
        let types: Vec<&str> = self.function_params.iter().map(|(ty, _)| ty.as_str()).collect();
        TextMethodSignature::new(format!(
            "{}({})",
            self.function.as_deref().unwrap_or_default(),
            types.join(",")
        ))
    }

    /// Parameter values in declaration order
    pub fn param_values(&self) -> Vec<String> {
        self.function_params.iter().map(|(_, value)| value.clone()).collect()
    }
}
