pub mod compatibility;
pub mod value_type;

pub use compatibility::*;
pub use value_type::*;
