pub mod config;
pub mod env;
pub mod routes;
pub mod signals;
pub mod templates;

pub use config::{Cli, ListenTarget};
pub use env::Environment;
pub use routes::{configure, AppState, LocationError};
pub use templates::{PageData, TemplateEngine, TemplateError};
