pub mod cart;
pub mod catalog;

pub use cart::*;
pub use catalog::*;
