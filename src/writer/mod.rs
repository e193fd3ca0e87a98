pub mod dict_gen;
pub mod output;
pub mod schema_gen;
pub mod scripts;

pub use dict_gen::*;
pub use output::*;
pub use schema_gen::*;
pub use scripts::*;

/// Render a string as a single-quoted SQL literal
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
