//module tree
mod delay_scheduler;
mod message_channel;
mod state_transitions;

//API exports
pub use crate::delay_scheduler::*;
pub use crate::message_channel::*;
pub use crate::state_transitions::*;
