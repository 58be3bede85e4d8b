mod purchases;
mod purchases_listeners;
mod purchases_settings;

pub use purchases::*;
