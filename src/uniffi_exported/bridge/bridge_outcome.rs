use crate::prelude::*;

/// UniFFI does not let us pass a `[Swift]Result` across, so this is the
/// host's way of telling Rust how a [`BridgeCall`] ended.
///
/// `value_json` is the JSON encoded result, empty when the operation has no
/// result. `payload_json` is the raw JSON failure object produced by the SDK.
#[derive(Enum, Clone, Debug, PartialEq, Eq, enum_as_inner::EnumAsInner)]
pub enum BridgeOutcome {
    Success { value_json: String },
    Failure { payload_json: String },
}

impl From<BridgeOutcome> for Result<String, String> {
    fn from(value: BridgeOutcome) -> Self {
        match value {
            BridgeOutcome::Success { value_json } => Ok(value_json),
            BridgeOutcome::Failure { payload_json } => Err(payload_json),
        }
    }
}
