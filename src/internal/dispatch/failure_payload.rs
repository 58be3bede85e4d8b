use crate::prelude::*;

/// The failure object as the SDK produces it: the standard error fields with
/// the cancellation flag mixed in.
#[derive(Deserialize)]
struct RawFailurePayload {
    #[serde(flatten)]
    error: BridgeError,
    #[serde(default, rename = "userCancelled")]
    user_cancelled: Option<bool>,
}

/// Splits a raw failure payload into the error and the `userCancelled` flag,
/// which defaults to `false` when absent.
pub(crate) fn split_failure_payload(
    payload_json: &str,
) -> Result<(BridgeError, bool), RustSideError> {
    let raw = serde_json::from_str::<RawFailurePayload>(payload_json).map_err(|_| {
        RustSideError::MalformedFailurePayload {
            payload: payload_json.to_owned(),
        }
    })?;
    Ok((raw.error, raw.user_cancelled.unwrap_or(false)))
}

/// How a failure payload of a non purchase operation reaches the caller.
pub(crate) fn bridge_failure(payload_json: &str) -> PurchasesError {
    match split_failure_payload(payload_json) {
        Ok((error, _)) => PurchasesError::Bridge { error },
        Err(error) => error.into(),
    }
}

/// How a failure payload of a purchase operation reaches the caller.
pub(crate) fn purchase_failure(payload_json: &str) -> PurchasesError {
    match split_failure_payload(payload_json) {
        Ok((error, user_cancelled)) => PurchasesError::PurchaseFailed {
            error,
            user_cancelled,
        },
        Err(error) => error.into(),
    }
}
