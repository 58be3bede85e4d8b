use crate::prelude::*;

#[export]
impl Purchases {
    /// Registers `listener` to be told about promotional purchases, returning
    /// the id to remove it with. Registering the same listener object twice
    /// returns the id of the first registration.
    pub fn add_promotional_purchase_listener(
        &self,
        listener: Arc<dyn PromotionalPurchaseListener>,
    ) -> u64 {
        self.promo_purchases.add_listener(listener)
    }

    /// `false` if no listener is registered under `listener_id`.
    pub fn remove_promotional_purchase_listener(&self, listener_id: u64) -> bool {
        self.promo_purchases.remove_listener_by_id(listener_id)
    }

    /// Registers `listener` to be told about every customer info refresh.
    pub fn add_customer_info_update_listener(
        &self,
        listener: Arc<dyn CustomerInfoUpdateListener>,
    ) -> u64 {
        self.customer_info_listeners.add(listener)
    }

    pub fn remove_customer_info_update_listener(&self, listener_id: u64) -> bool {
        self.customer_info_listeners.remove_by_id(listener_id)
    }
}

// A foreign object crossing the FFI boundary is wrapped anew each time, so
// removing by reference is only offered to Rust callers.
impl Purchases {
    pub fn remove_promotional_purchase_listener_ref(
        &self,
        listener: &Arc<dyn PromotionalPurchaseListener>,
    ) -> bool {
        self.promo_purchases.remove_listener(listener)
    }

    pub fn remove_customer_info_update_listener_ref(
        &self,
        listener: &Arc<dyn CustomerInfoUpdateListener>,
    ) -> bool {
        self.customer_info_listeners.remove(listener)
    }
}
