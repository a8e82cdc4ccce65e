pub mod partition;
pub mod spin;
pub mod words;

pub use partition::*;
pub use spin::*;
pub use words::*;
