pub mod categories;
pub mod codes;
pub mod ids;

pub use categories::*;
pub use codes::*;
pub use ids::*;
