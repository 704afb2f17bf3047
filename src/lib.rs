pub mod api;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod observability;
pub mod validation;

pub use models::driver::{Department, Driver, make_driver};
pub use models::package::{Package, make_package};
pub use validation::Validated;
