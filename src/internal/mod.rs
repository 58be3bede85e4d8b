mod dispatch;
mod listeners;
mod oneshot_outcome_sender;

pub(crate) use dispatch::*;
pub(crate) use listeners::*;
pub(crate) use oneshot_outcome_sender::*;
