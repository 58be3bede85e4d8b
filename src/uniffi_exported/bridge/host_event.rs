use crate::prelude::*;

/// Unsolicited events the host pushes to Rust, outside of any single
/// [`BridgeCall`].
#[derive(Enum, Clone, Debug, PartialEq, Eq, enum_as_inner::EnumAsInner)]
pub enum HostEvent {
    /// The SDK refreshed its cached customer state.
    CustomerInfoUpdated { customer_info_json: String },

    /// The user started a purchase from the storefront itself, the host is
    /// holding it until Rust resumes it with `token`.
    PromotionalPurchaseInitiated { token: i64 },
}
