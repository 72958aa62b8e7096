pub mod config;
pub mod pop_client;

pub use config::ConfigError;
pub use pop_client::PopClientError;
