pub mod category;
pub mod order;
pub mod product;

pub use category::*;
pub use order::*;
pub use product::*;
