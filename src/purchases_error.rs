use crate::prelude::*;
use thiserror::Error as ThisError;

/// Errors the host executor reports synchronously, when it could not even
/// start carrying out a [`BridgeCall`].
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum HostSideError {
    #[error("Host executor unavailable: '{reason}'")]
    ExecutorUnavailable { reason: String },

    #[error("Unexpected error in host callback: '{reason}'")]
    UnexpectedCallbackError { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for HostSideError {
    fn from(value: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedCallbackError {
            reason: value.reason,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum RustSideError {
    #[error("'{operation}' requires a non empty app user id")]
    EmptyAppUserId { operation: String },

    #[error("Purchases has already been configured")]
    AlreadyConfigured,

    #[error("Failed to receive outcome from host, listener dropped without being notified")]
    FailedToReceiveOutcomeFromHost,

    #[error("Unable to JSON serialize arguments of '{operation}'")]
    UnableToSerializeArguments { operation: String },

    #[error("Unable to JSON deserialize bridge value into type: {type_name}, reason: {reason}")]
    UnableToDeserializeBridgeValue { type_name: String, reason: String },

    #[error("Malformed failure payload from host: '{payload}'")]
    MalformedFailurePayload { payload: String },
}

/// The error of every public operation.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum PurchasesError {
    #[error(transparent)]
    FromRust {
        #[from]
        error: RustSideError,
    },

    #[error(transparent)]
    FromHost {
        #[from]
        error: HostSideError,
    },

    #[error("{error}")]
    Bridge { error: BridgeError },

    /// Only produced by purchase operations. `user_cancelled` lives next to
    /// the error, not inside it.
    #[error("Purchase failed (user cancelled: {user_cancelled}): {error}")]
    PurchaseFailed {
        error: BridgeError,
        user_cancelled: bool,
    },
}

impl PurchasesError {
    /// `true` only for a purchase the user chose not to complete.
    pub fn user_cancelled(&self) -> bool {
        matches!(
            self,
            Self::PurchaseFailed {
                user_cancelled: true,
                ..
            }
        )
    }

    /// The error reported by the SDK, if this failure came from the bridge.
    pub fn bridge_error(&self) -> Option<&BridgeError> {
        match self {
            Self::Bridge { error } | Self::PurchaseFailed { error, .. } => Some(error),
            Self::FromRust { .. } | Self::FromHost { .. } => None,
        }
    }
}
