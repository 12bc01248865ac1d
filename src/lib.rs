pub mod config;
pub mod observability;
pub mod output;
pub mod session;

pub use config::Config;
