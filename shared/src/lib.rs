pub mod auth;
pub mod config;
pub mod nav;

pub use auth::{AuthOutcome, RejectReason};
pub use config::{ConfigError, GateConfig};
pub use nav::{NavBar, NavLink, NavStyle};
