pub mod connection;
pub mod conversion;
pub mod definition;
pub mod factory;

pub use conversion::*;
pub use definition::*;
pub use factory::*;
