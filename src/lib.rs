pub mod error;
pub mod protocol;

pub use error::{Error, Result};
pub use protocol::{Message, MessageBuilder, MessageState, Synapse};
