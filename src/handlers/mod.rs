pub mod inventory;
pub mod root;

pub use inventory::*;
pub use root::*;
