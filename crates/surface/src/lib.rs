pub mod assist;
pub mod map;
pub mod panel;

pub use assist::*;
pub use map::*;
pub use panel::*;
