pub mod catalog;
pub mod cli;
pub mod dict;
pub mod filter;
pub mod schema;
pub mod writer;

pub use catalog::Catalog;
pub use cli::{Cli, Commands};
