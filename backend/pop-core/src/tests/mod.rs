// Unit tests for pop-core. Network behaviour is covered in integration_tests/.

mod classify;
mod config;
mod error;
mod normalize;
mod query;
mod server;
