pub mod builtin;
pub mod item;
pub mod query;

pub use builtin::*;
pub use item::*;
pub use query::*;
