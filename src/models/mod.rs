pub mod error;
pub mod item;
pub mod root;

pub use error::*;
pub use item::*;
pub use root::*;
