//! Quest definitions, catalogs, and load-time validation.

mod catalog;
mod quest;
mod validation;

pub use catalog::*;
pub use quest::*;
pub use validation::*;
