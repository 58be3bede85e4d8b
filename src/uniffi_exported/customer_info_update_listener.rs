use crate::prelude::*;

/// Implemented by the app to be told whenever the SDK refreshed the customer
/// state, independently of any particular call.
#[uniffi::export(with_foreign)]
pub trait CustomerInfoUpdateListener: Send + Sync {
    fn on_customer_info_updated(&self, customer_info: CustomerInfo);
}
