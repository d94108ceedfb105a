pub mod charts;
pub mod layer;
pub mod location;
pub mod stratum;

// Model crate: workspace data shapes and small pure helpers only.
pub use charts::*;
pub use layer::*;
pub use location::*;
pub use stratum::*;
