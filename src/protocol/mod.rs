mod synapse;
mod types;

pub use synapse::*;
pub use types::*;
