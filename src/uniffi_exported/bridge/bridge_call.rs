use crate::prelude::*;

/// A named SDK operation Rust asks the host to carry out, with its positional
/// arguments encoded as a JSON array. Absent optional arguments are `null`
/// slots, the array is never shortened.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct BridgeCall {
    pub method: String,
    pub arguments_json: String,
}

impl BridgeCall {
    /// Decodes `arguments_json`, handy for host implementations written in
    /// Rust and for tests.
    pub fn arguments(&self) -> Result<Vec<Value>, RustSideError> {
        serde_json::from_str(&self.arguments_json).map_err(|e| {
            RustSideError::UnableToDeserializeBridgeValue {
                type_name: std::any::type_name::<Vec<Value>>().to_owned(),
                reason: e.to_string(),
            }
        })
    }
}
