pub mod name_history;
pub mod name_record;
pub mod name_slot;

pub use name_history::*;
pub use name_record::*;
pub use name_slot::*;
