pub mod security;

pub use security::{create_nosniff_layer, create_security_headers_layer};
