pub mod tables;
pub mod type_map;
pub mod types;

pub use tables::*;
pub use type_map::*;
pub use types::*;
