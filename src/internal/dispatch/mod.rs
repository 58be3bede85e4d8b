mod bridge_dispatcher;
mod failure_payload;
mod operation;

pub(crate) use bridge_dispatcher::*;
pub(crate) use failure_payload::*;
pub(crate) use operation::*;
