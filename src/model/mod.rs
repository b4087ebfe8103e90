//! Pure data structures exchanged with the product service.

pub mod product;
pub mod validation;

pub use product::*;
pub use validation::*;
