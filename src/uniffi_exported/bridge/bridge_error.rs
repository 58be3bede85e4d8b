use crate::prelude::*;

/// An error reported by the purchases SDK on the host side, normalized into
/// the same shape for every operation.
///
/// Never carries the user cancellation flag, see
/// [`PurchasesError::PurchaseFailed`].
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeError {
    pub code: i32,
    pub message: String,
    pub readable_error_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_error_message: Option<String>,
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (code {}): '{}'",
            self.readable_error_code, self.code, self.message
        )?;
        if let Some(underlying) = &self.underlying_error_message {
            write!(f, ", underlying error: '{underlying}'")?;
        }
        Ok(())
    }
}
