pub mod period;
pub mod record;

pub use period::Period;
pub use record::{Record, WorkEntry};
