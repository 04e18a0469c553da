pub mod cost;
pub mod error;
pub mod merit_order;
pub mod types;

pub use cost::*;
pub use error::*;
pub use merit_order::*;
pub use types::*;
