mod bridge_call;
mod bridge_error;
mod bridge_outcome;
mod bridge_outcome_listener;
mod host_bridge_executor;
mod host_event;
mod host_event_listener;

pub use bridge_call::*;
pub use bridge_error::*;
pub use bridge_outcome::*;
pub use bridge_outcome_listener::*;
pub use host_bridge_executor::*;
pub use host_event::*;
pub use host_event_listener::*;
