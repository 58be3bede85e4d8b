mod host_event_router;
mod listener_registry;
mod promo_purchase_coordinator;

pub(crate) use host_event_router::*;
pub(crate) use listener_registry::*;
pub(crate) use promo_purchase_coordinator::*;
