use std::path::PathBuf;

/// Default page storage directory
pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Default static assets directory
pub fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Default page shown at the site root
pub fn default_front_page() -> String {
    "FrontPage".to_string()
}

/// Default address to bind to
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default port to listen on
pub fn default_port() -> u16 {
    8080
}
