mod coordinator;

pub use coordinator::{CoordinatorExecuteMsg, RandomnessCallback, ReceiverExecuteMsg};
