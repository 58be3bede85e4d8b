use crate::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Single-use capability to complete one promotional purchase, bound to the
/// token the host issued for it. Every listener notified about the same
/// purchase shares the same capability.
#[derive(Object)]
pub struct DeferredPromotionalPurchase {
    token: i64,
    resumed: AtomicBool,
    dispatcher: Arc<BridgeDispatcher>,
}

impl DeferredPromotionalPurchase {
    pub(crate) fn new(token: i64, dispatcher: Arc<BridgeDispatcher>) -> Self {
        Self {
            token,
            resumed: AtomicBool::new(false),
            dispatcher,
        }
    }
}

#[export]
impl DeferredPromotionalPurchase {
    pub fn token(&self) -> i64 {
        self.token
    }

    pub fn is_resumed(&self) -> bool {
        self.resumed.load(Ordering::SeqCst)
    }

    /// Tells the host to complete the purchase. Only the first call reaches
    /// the host and returns `true` once it acknowledged, later calls are
    /// no-ops returning `false`.
    ///
    /// The host rejecting the token, e.g. because the purchase already
    /// completed, is reported as a [`PurchasesError::Bridge`].
    pub async fn resume(&self) -> Result<bool, PurchasesError> {
        if self.resumed.swap(true, Ordering::SeqCst) {
            tracing::debug!(token = self.token, "Deferred purchase already resumed, ignoring");
            return Ok(false);
        }
        tracing::info!(token = self.token, "Resuming deferred promotional purchase");
        self.dispatcher
            .dispatch_unit(
                Operation::new(OperationKind::ResumeDeferredPurchase).with_argument(self.token),
            )
            .await
            .map(|_| true)
    }
}
