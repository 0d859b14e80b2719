mod exchange;
mod exchange_queue;
mod matchmaker;
mod matchmaker_command;
mod matchmaker_handle;

pub use exchange::*;
pub use exchange_queue::*;
pub use matchmaker::*;
pub use matchmaker_command::*;
pub use matchmaker_handle::*;
