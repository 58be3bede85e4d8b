mod bridge;
mod customer_info_update_listener;
mod models;
mod promotional_purchase;
mod purchases;

pub use bridge::*;
pub use customer_info_update_listener::*;
pub use models::*;
pub use promotional_purchase::*;
pub use purchases::*;

#[cfg(test)]
pub(crate) use models::fixtures;
