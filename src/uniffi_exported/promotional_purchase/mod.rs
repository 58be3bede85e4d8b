mod deferred_promotional_purchase;
mod promotional_purchase_listener;

pub use deferred_promotional_purchase::*;
pub use promotional_purchase_listener::*;
