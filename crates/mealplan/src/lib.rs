pub mod catalog;
mod day;
mod matcher;
mod state;
mod summary;

pub use catalog::Recipe;
pub use day::*;
pub use matcher::*;
pub use state::*;
pub use summary::*;
