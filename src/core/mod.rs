pub mod del;
pub mod filter;
pub mod input;
pub mod selection;
pub mod totals;

pub use del::DeleteLogic;
pub use filter::RecordFilter;
pub use input::EntryInput;
pub use selection::SelectionSet;
pub use totals::Totals;
