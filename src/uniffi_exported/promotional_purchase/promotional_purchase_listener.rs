use crate::prelude::*;

/// Implemented by the app to be told about purchases started from the store
/// front itself (e.g. a promoted in-app purchase on the App Store).
#[uniffi::export(with_foreign)]
pub trait PromotionalPurchaseListener: Send + Sync {
    /// Call `deferred_purchase.resume()` when the app is ready to complete the
    /// purchase, now or later, e.g. after onboarding. Never calling it means
    /// the purchase is never made.
    fn on_promotional_purchase_initiated(
        &self,
        deferred_purchase: Arc<DeferredPromotionalPurchase>,
    );
}
