pub mod builtin;
pub mod catalog;
pub mod definition;
pub mod validation;

pub use builtin::*;
pub use catalog::*;
pub use definition::*;
pub use validation::*;
