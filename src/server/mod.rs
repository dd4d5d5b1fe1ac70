pub mod types;
pub mod config;
pub mod handlers;
pub mod app;
pub mod core;
pub mod middleware;

pub use config::ServerConfig;
pub use core::serve;
