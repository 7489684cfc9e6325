pub mod change_name;
pub mod initialize_record;
pub mod read_record;

pub use change_name::*;
pub use initialize_record::*;
pub use read_record::*;
