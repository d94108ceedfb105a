pub mod events;
pub mod geocode;
pub mod options;
pub mod session;
pub mod workspace;

pub use events::*;
pub use geocode::*;
pub use options::*;
pub use session::*;
pub use workspace::*;
