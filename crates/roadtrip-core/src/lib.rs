pub mod constants;
pub mod controller;
pub mod error;
pub mod geo;
pub mod report;
pub mod state;

pub use constants::*;
pub use controller::*;
pub use error::*;
pub use geo::*;
pub use report::*;
pub use state::*;
