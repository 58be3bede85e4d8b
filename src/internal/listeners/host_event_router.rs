use crate::prelude::*;

/// Routes the unsolicited [`HostEvent`]s to whoever registered interest in
/// them.
pub(crate) struct HostEventRouter {
    promo_purchases: Arc<PromoPurchaseCoordinator>,
    customer_info_listeners: Arc<ListenerRegistry<dyn CustomerInfoUpdateListener>>,
}

impl HostEventRouter {
    pub(crate) fn new(
        promo_purchases: Arc<PromoPurchaseCoordinator>,
        customer_info_listeners: Arc<ListenerRegistry<dyn CustomerInfoUpdateListener>>,
    ) -> Self {
        Self {
            promo_purchases,
            customer_info_listeners,
        }
    }

    pub(crate) fn route(&self, event: HostEvent) {
        match event {
            HostEvent::CustomerInfoUpdated { customer_info_json } => {
                self.broadcast_customer_info(&customer_info_json)
            }
            HostEvent::PromotionalPurchaseInitiated { token } => {
                self.promo_purchases.on_promotional_purchase_initiated(token);
            }
        }
    }

    fn broadcast_customer_info(&self, customer_info_json: &str) {
        let customer_info = match CustomerInfo::from_json(customer_info_json) {
            Ok(customer_info) => customer_info,
            Err(error) => {
                tracing::warn!(%error, "Dropping customer info update from host");
                return;
            }
        };
        let listeners = self.customer_info_listeners.snapshot();
        tracing::debug!(listeners = listeners.len(), "Broadcasting customer info update");
        for listener in listeners {
            listener.on_customer_info_updated(customer_info.clone());
        }
    }
}
