mod internal;
mod logging;
mod purchases_error;
mod uniffi_exported;

pub mod prelude {
    pub use crate::logging::*;
    pub use crate::purchases_error::*;
    pub use crate::uniffi_exported::*;

    pub(crate) use crate::internal::*;

    pub(crate) use serde::{de::DeserializeOwned, Deserialize, Serialize};
    pub(crate) use serde_json::Value;
    #[cfg(test)]
    pub(crate) use serde_json::json;
    pub(crate) use std::collections::HashMap;
    pub(crate) use std::sync::{Arc, Mutex};
    pub(crate) use tokio::sync::oneshot::{channel, Sender};
    pub(crate) use uniffi::{export, Enum, Error, Object, Record};
}

pub use prelude::*;

uniffi::setup_scaffolding!();
